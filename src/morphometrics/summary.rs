//! Manual-vs-detected count comparison

use crate::io::configuration::{FILTERED_SUFFIX, MYELINATED_TABLE_SUFFIX};
use crate::io::error::{PipelineError, Result, fs_error};
use crate::keypoints::parser::parse_cellcounter_xml;
use crate::morphometrics::table::MeasurementTable;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// One subject's manual and automated counts
#[derive(Debug, Serialize)]
pub struct SubjectSummary {
    /// Subject identifier from the subject list
    pub subject: String,
    /// Total manually placed markers across all marker types, when a marker
    /// file for the subject exists
    pub manual_markers: Option<usize>,
    /// Rows of the subject's filtered myelinated table, 0 when absent
    pub detected_axons: usize,
}

fn find_subject_file(dir: &Path, subject: &str, suffix: &str) -> Result<Option<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| fs_error(dir, "read directory", e))?;

    let mut matches = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| fs_error(dir, "read directory entry", e))?
            .path();
        if path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.contains(subject) && n.ends_with(suffix))
        {
            matches.push(path);
        }
    }
    matches.sort();
    Ok(matches.into_iter().next())
}

fn filtered_table_suffix() -> String {
    let base = MYELINATED_TABLE_SUFFIX.trim_end_matches(".csv");
    format!("{base}{FILTERED_SUFFIX}.csv")
}

/// Compare manual marker counts against filtered detection counts
///
/// For each subject, the manual count is the total number of markers in the
/// subject's CellCounter file under `counts_dir`; subjects without one are
/// logged and reported with no manual count. The detected count is the row
/// count of the subject's filtered myelinated table under `seg_dir`.
///
/// # Errors
///
/// Returns an error if a directory cannot be read, or a matched marker file
/// or table is malformed
pub fn summarize_counts(
    subjects: &[String],
    counts_dir: &Path,
    seg_dir: &Path,
) -> Result<Vec<SubjectSummary>> {
    let table_suffix = filtered_table_suffix();
    let mut summaries = Vec::with_capacity(subjects.len());

    for subject in subjects {
        let manual_markers = match find_subject_file(counts_dir, subject, ".xml")? {
            Some(marker_path) => {
                let markers = parse_cellcounter_xml(&marker_path)?;
                Some(markers.values().map(Vec::len).sum())
            }
            None => {
                log::warn!("no marker file found for subject '{subject}'");
                None
            }
        };

        let detected_axons = match find_subject_file(seg_dir, subject, &table_suffix)? {
            Some(table_path) => MeasurementTable::load(&table_path)?.len(),
            None => 0,
        };

        summaries.push(SubjectSummary {
            subject: subject.clone(),
            manual_markers,
            detected_axons,
        });
    }
    Ok(summaries)
}

/// Write the comparison table as CSV
///
/// # Errors
///
/// Returns an error if the file cannot be created or a row cannot be
/// serialized
pub fn write_summary(path: &Path, summaries: &[SubjectSummary]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| PipelineError::Table {
        path: path.to_path_buf(),
        source: e,
    })?;

    for summary in summaries {
        writer.serialize(summary).map_err(|e| PipelineError::Table {
            path: path.to_path_buf(),
            source: e,
        })?;
    }
    writer
        .flush()
        .map_err(|e| fs_error(path, "flush summary", e))?;
    Ok(())
}
