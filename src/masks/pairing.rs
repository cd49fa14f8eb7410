//! Mask filename derivation and segmentation directory scanning

use crate::io::configuration::{
    AXON_CLASS_TOKEN, AXON_MASK_SUFFIX, COMBINED_CLASS_TOKEN, COMBINED_MASK_MARKER,
    MYELIN_CLASS_TOKEN,
};
use crate::io::error::{Result, fs_error};
use std::path::{Path, PathBuf};

// Filename-level substitution; the directory component is left untouched
fn substitute_class(path: &Path, from: &str, to: &str) -> PathBuf {
    let name = path.file_name().unwrap_or_default().to_string_lossy();
    let substituted = name.replace(from, to);

    if let Some(parent) = path.parent() {
        parent.join(substituted)
    } else {
        PathBuf::from(substituted)
    }
}

/// Derive the myelin partner path of an axon mask
pub fn myelin_partner(axon_path: &Path) -> PathBuf {
    substitute_class(axon_path, AXON_CLASS_TOKEN, MYELIN_CLASS_TOKEN)
}

/// Derive the combined axonmyelin output path of an axon mask
pub fn combined_path(axon_path: &Path) -> PathBuf {
    substitute_class(axon_path, AXON_CLASS_TOKEN, COMBINED_CLASS_TOKEN)
}

/// Collect all per-class axon masks in a segmentation directory, sorted
///
/// # Errors
///
/// Returns an error if the directory cannot be read
pub fn collect_axon_masks(seg_dir: &Path) -> Result<Vec<PathBuf>> {
    let entries =
        std::fs::read_dir(seg_dir).map_err(|e| fs_error(seg_dir, "read directory", e))?;

    let mut masks = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| fs_error(seg_dir, "read directory entry", e))?
            .path();
        if path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(AXON_MASK_SUFFIX))
        {
            masks.push(path);
        }
    }
    masks.sort();
    Ok(masks)
}

/// Count combined axonmyelin masks present in a segmentation directory
///
/// One combined mask corresponds to one subject, so this count doubles as
/// the subject count for idempotency checks.
///
/// # Errors
///
/// Returns an error if the directory cannot be read
pub fn axonmyelin_mask_count(seg_dir: &Path) -> Result<usize> {
    let entries =
        std::fs::read_dir(seg_dir).map_err(|e| fs_error(seg_dir, "read directory", e))?;

    let mut count = 0;
    for entry in entries {
        let path = entry
            .map_err(|e| fs_error(seg_dir, "read directory entry", e))?
            .path();
        if path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.contains(COMBINED_MASK_MARKER))
        {
            count += 1;
        }
    }
    Ok(count)
}
