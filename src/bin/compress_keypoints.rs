//! CLI entry point for CellCounter marker compression

use axonmorph::io::cli::{KeypointsCli, KeypointsProcessor};
use clap::Parser;

fn main() -> axonmorph::Result<()> {
    env_logger::init();

    let cli = KeypointsCli::parse();
    let processor = KeypointsProcessor::new(cli);
    processor.run()
}
