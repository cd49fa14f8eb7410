//! CLI entry point for morphometrics computation and filtering

use axonmorph::io::cli::{MorphometricsCli, MorphometricsProcessor};
use clap::Parser;

fn main() -> axonmorph::Result<()> {
    env_logger::init();

    let cli = MorphometricsCli::parse();
    let processor = MorphometricsProcessor::new(cli);
    processor.run()
}
