//! Driver around the external morphometrics computation

use crate::io::configuration::{DEFAULT_MORPHOMETRICS_PROGRAM, MYELINATED_TABLE_SUFFIX};
use crate::io::error::{PipelineError, Result, fs_error};
use crate::masks::pairing;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Which axon population the external tool measures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxonPopulation {
    /// Axons with a myelin sheath
    Myelinated,
    /// Axons without a myelin sheath
    Unmyelinated,
}

impl AxonPopulation {
    /// Command-line flag the external tool expects for this population
    pub const fn flag(self) -> &'static str {
        match self {
            Self::Myelinated => "-c",
            Self::Unmyelinated => "-u",
        }
    }

    /// Human-readable population name for diagnostics
    pub const fn label(self) -> &'static str {
        match self {
            Self::Myelinated => "myelinated",
            Self::Unmyelinated => "unmyelinated",
        }
    }
}

/// Invokes the external per-subject morphometrics computation
///
/// The driver is idempotent at the directory level: when every subject
/// (combined mask) already has a measurement table, recomputation is
/// skipped.
pub struct MorphometricsDriver {
    seg_dir: PathBuf,
    pixel_size_um: f64,
    program: String,
}

impl MorphometricsDriver {
    /// Create a driver over a segmentation directory
    pub fn new(seg_dir: &Path, pixel_size_um: f64) -> Self {
        Self {
            seg_dir: seg_dir.to_path_buf(),
            pixel_size_um,
            program: DEFAULT_MORPHOMETRICS_PROGRAM.to_string(),
        }
    }

    /// Override the external program name
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Whether the external computation still has work to do
    ///
    /// Compares the subject count (combined masks) against the count of
    /// existing myelinated measurement tables; equal counts mean the
    /// previous run completed and recomputation is skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the segmentation directory cannot be read
    pub fn needs_run(&self) -> Result<bool> {
        let subjects = pairing::axonmyelin_mask_count(&self.seg_dir)?;
        let tables = table_count(&self.seg_dir, MYELINATED_TABLE_SUFFIX)?;
        Ok(subjects != tables)
    }

    /// Run the external computation for one axon population
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::ExternalTool`] when the program exits with a
    /// non-zero status (carrying the captured stderr) or cannot be spawned
    pub fn run(&self, population: AxonPopulation) -> Result<()> {
        log::info!(
            "computing {} morphometrics for {}",
            population.label(),
            self.seg_dir.display()
        );

        let output = Command::new(&self.program)
            .arg("-i")
            .arg(&self.seg_dir)
            .arg("-s")
            .arg(self.pixel_size_um.to_string())
            .arg(population.flag())
            .output()
            .map_err(|e| PipelineError::ExternalTool {
                program: self.program.clone(),
                status: None,
                stderr: e.to_string(),
            })?;

        if output.status.success() {
            Ok(())
        } else {
            Err(PipelineError::ExternalTool {
                program: self.program.clone(),
                status: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }
}

/// Count measurement tables with the given filename suffix
///
/// # Errors
///
/// Returns an error if the directory cannot be read
pub fn table_count(dir: &Path, suffix: &str) -> Result<usize> {
    Ok(collect_tables(dir, suffix)?.len())
}

/// Collect measurement tables with the given filename suffix, sorted
///
/// # Errors
///
/// Returns an error if the directory cannot be read
pub fn collect_tables(dir: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| fs_error(dir, "read directory", e))?;

    let mut tables = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| fs_error(dir, "read directory entry", e))?
            .path();
        if path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(suffix))
        {
            tables.push(path);
        }
    }
    tables.sort();
    Ok(tables)
}
