//! Keypoint JSON serialization and per-subject output files

use crate::io::configuration::JSON_INDENT;
use crate::io::error::{Result, fs_error};
use crate::keypoints::naming::SubjectId;
use crate::keypoints::parser::MarkerCollection;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::path::{Path, PathBuf};

/// Serialize a marker collection as indented JSON
///
/// The annotation tooling downstream expects the 4-space indentation the
/// original exporter produced, so the default pretty formatter is not used.
///
/// # Errors
///
/// Returns an error if serialization fails
pub fn to_pretty_json(markers: &MarkerCollection) -> Result<String> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    markers.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Write a subject's keypoints file into the output directory
///
/// The directory is created when absent. Returns the path written.
///
/// # Errors
///
/// Returns an error if the directory cannot be created, serialization
/// fails, or the file cannot be written
pub fn write_keypoints(
    markers: &MarkerCollection,
    output_dir: &Path,
    id: &SubjectId,
) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)
        .map_err(|e| fs_error(output_dir, "create directory", e))?;

    let path = output_dir.join(id.keypoints_filename());
    std::fs::write(&path, to_pretty_json(markers)?)
        .map_err(|e| fs_error(&path, "write keypoints", e))?;
    Ok(path)
}
