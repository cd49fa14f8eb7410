//! Command-line interfaces for the two pipeline utilities

use crate::io::configuration::{
    DEFAULT_KEYPOINTS_DIR, DEFAULT_MORPHOMETRICS_PROGRAM, DEFAULT_PIXEL_SIZE_UM,
    MYELINATED_TABLE_SUFFIX, SUMMARY_FILENAME, UNMYELINATED_TABLE_SUFFIX,
};
use crate::io::error::{Result, fs_error};
use crate::io::progress::BatchProgress;
use crate::keypoints::export::{to_pretty_json, write_keypoints};
use crate::keypoints::naming::SubjectId;
use crate::keypoints::parser::{collect_marker_files, parse_cellcounter_xml};
use crate::masks::merge::prepare_masks;
use crate::morphometrics::driver::{AxonPopulation, MorphometricsDriver, collect_tables};
use crate::morphometrics::filter::{FilterRule, MYELINATED_RULES, UNMYELINATED_RULES, filter_table};
use crate::morphometrics::summary::{summarize_counts, write_summary};
use clap::Parser;
use std::path::{Path, PathBuf};

/// Command-line arguments for the morphometrics utility
#[derive(Parser)]
#[command(name = "compute_morphometrics")]
#[command(
    author,
    version,
    about = "Compute morphometrics from semantic segmentations and filter implausible measurements"
)]
pub struct MorphometricsCli {
    /// Folder containing the semantic segmentation masks
    #[arg(long = "seg_dir", value_name = "DIR")]
    pub seg_dir: PathBuf,

    /// Folder containing manual counts in CellCounter XML format
    #[arg(long = "counts_dir", value_name = "DIR")]
    pub counts_dir: PathBuf,

    /// File listing the subjects to process, one per line
    #[arg(long = "subj_list", value_name = "FILE")]
    pub subj_list: PathBuf,

    /// Folder where results are saved
    #[arg(long = "output_dir", value_name = "DIR")]
    pub output_dir: PathBuf,

    /// Pixel size of the acquisition in micrometers
    #[arg(short = 's', long = "pixel_size", default_value_t = DEFAULT_PIXEL_SIZE_UM)]
    pub pixel_size: f64,

    /// External morphometrics program to invoke
    #[arg(long = "morphometrics_cmd", default_value = DEFAULT_MORPHOMETRICS_PROGRAM)]
    pub morphometrics_cmd: String,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl MorphometricsCli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

fn read_subject_list(path: &Path) -> Result<Vec<String>> {
    let text =
        std::fs::read_to_string(path).map_err(|e| fs_error(path, "read subject list", e))?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

/// Orchestrates mask preparation, the external computation, filtering, and
/// the count summary
pub struct MorphometricsProcessor {
    cli: MorphometricsCli,
}

impl MorphometricsProcessor {
    /// Create a processor from parsed CLI arguments
    pub const fn new(cli: MorphometricsCli) -> Self {
        Self { cli }
    }

    /// Run the full morphometrics sequence
    ///
    /// External-tool failures are logged and the run continues; every other
    /// error is fatal.
    ///
    /// # Errors
    ///
    /// Returns an error on unreadable inputs, malformed tables or marker
    /// files, or unwritable outputs
    pub fn run(&self) -> Result<()> {
        let subjects = read_subject_list(&self.cli.subj_list)?;
        std::fs::create_dir_all(&self.cli.output_dir)
            .map_err(|e| fs_error(&self.cli.output_dir, "create directory", e))?;

        let written = prepare_masks(&self.cli.seg_dir)?;
        if written > 0 {
            log::info!("created {written} combined axonmyelin mask(s)");
        }

        self.compute_morphometrics()?;
        self.filter_tables()?;

        let summaries = summarize_counts(&subjects, &self.cli.counts_dir, &self.cli.seg_dir)?;
        write_summary(&self.cli.output_dir.join(SUMMARY_FILENAME), &summaries)?;
        log::info!("wrote count summary for {} subject(s)", summaries.len());
        Ok(())
    }

    // External-tool failures are trapped here; they must not abort the
    // batch or taint the exit code
    fn compute_morphometrics(&self) -> Result<()> {
        let driver = MorphometricsDriver::new(&self.cli.seg_dir, self.cli.pixel_size)
            .with_program(&self.cli.morphometrics_cmd);

        if driver.needs_run()? {
            for population in [AxonPopulation::Myelinated, AxonPopulation::Unmyelinated] {
                if let Err(error) = driver.run(population) {
                    log::error!(
                        "{} morphometrics computation failed: {error}",
                        population.label()
                    );
                }
            }
        } else {
            log::info!("measurement tables are up to date, skipping recomputation");
        }
        Ok(())
    }

    fn filter_tables(&self) -> Result<()> {
        let myelinated = collect_tables(&self.cli.seg_dir, MYELINATED_TABLE_SUFFIX)?;
        let unmyelinated = collect_tables(&self.cli.seg_dir, UNMYELINATED_TABLE_SUFFIX)?;

        let progress = BatchProgress::new(
            self.cli.should_show_progress(),
            myelinated.len() + unmyelinated.len(),
        );

        let batches: [(&[PathBuf], &[FilterRule]); 2] = [
            (&myelinated, &MYELINATED_RULES),
            (&unmyelinated, &UNMYELINATED_RULES),
        ];
        for (paths, rules) in batches {
            for path in paths {
                let name = path.file_name().unwrap_or_default().to_string_lossy();
                progress.start_item(&name);
                filter_table(path, rules)?;
                progress.complete_item();
            }
        }
        progress.finish();
        Ok(())
    }
}

/// Command-line arguments for the keypoint compression utility
#[derive(Parser)]
#[command(name = "compress_keypoints")]
#[command(
    author,
    version,
    about = "Convert CellCounter marker files into per-subject keypoint JSON"
)]
pub struct KeypointsCli {
    /// A single CellCounter marker file, or a directory of marker files
    #[arg(short, long, value_name = "PATH")]
    pub input: PathBuf,

    /// Output directory for the compressed keypoint files
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_KEYPOINTS_DIR)]
    pub output: PathBuf,
}

/// Converts marker annotations according to CLI arguments
pub struct KeypointsProcessor {
    cli: KeypointsCli,
}

impl KeypointsProcessor {
    /// Create a processor from parsed CLI arguments
    pub const fn new(cli: KeypointsCli) -> Self {
        Self { cli }
    }

    /// Process the input file or directory
    ///
    /// Directory mode writes one keypoints file per marker file; single-file
    /// mode prints the indented JSON to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if any marker file is unreadable or malformed, a
    /// filename yields no subject/sample identifiers, or an output file
    /// cannot be written
    // Allow print: single-file mode emits its JSON on stdout
    #[allow(clippy::print_stdout)]
    pub fn run(&self) -> Result<()> {
        if self.cli.input.is_dir() {
            for file in collect_marker_files(&self.cli.input)? {
                let stem = file.file_stem().unwrap_or_default().to_string_lossy();
                let id = SubjectId::from_stem(&stem)?;
                let markers = parse_cellcounter_xml(&file)?;
                let path = write_keypoints(&markers, &self.cli.output, &id)?;
                log::info!("wrote {}", path.display());
            }
            Ok(())
        } else {
            let markers = parse_cellcounter_xml(&self.cli.input)?;
            for (identifier, positions) in &markers {
                log::info!("marker type {identifier}: {} marker(s)", positions.len());
            }
            println!("{}", to_pretty_json(&markers)?);
            Ok(())
        }
    }
}
