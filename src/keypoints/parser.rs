//! CellCounter XML marker file parsing

use crate::io::error::{Result, fs_error, marker_error};
use roxmltree::{Document, Node};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Mapping from marker-type identifier to its (x, y) pixel coordinates
pub type MarkerCollection = BTreeMap<String, Vec<(i64, i64)>>;

fn coordinate(path: &Path, node: Option<Node<'_, '_>>) -> Result<i64> {
    let text = node
        .and_then(|n| n.text())
        .map(str::trim)
        .ok_or_else(|| marker_error(path, &"Marker is missing a coordinate element"))?;
    text.parse()
        .map_err(|e| marker_error(path, &format!("coordinate '{text}' is not an integer: {e}")))
}

// Marker children are positional: X, Y, then the always-1 Z which is dropped
fn marker_position(path: &Path, marker: Node<'_, '_>) -> Result<(i64, i64)> {
    let mut elements = marker.children().filter(|n| n.is_element());
    let x = coordinate(path, elements.next())?;
    let y = coordinate(path, elements.next())?;
    Ok((x, y))
}

/// Parse a CellCounter marker file into a marker collection
///
/// Traverses `Marker_Data/Marker_Type` elements. A marker type listing no
/// markers is omitted from the result; each retained type maps its `Type`
/// identifier to the (x, y) positions of all its markers.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not well-formed XML, a
/// retained marker type has no `Type` identifier, or a coordinate is not an
/// integer
pub fn parse_cellcounter_xml(path: &Path) -> Result<MarkerCollection> {
    let text = std::fs::read_to_string(path).map_err(|e| fs_error(path, "read marker file", e))?;
    let document = Document::parse(&text).map_err(|e| marker_error(path, &e))?;

    let mut collection = MarkerCollection::new();
    for marker_data in document
        .root_element()
        .children()
        .filter(|n| n.has_tag_name("Marker_Data"))
    {
        for marker_type in marker_data
            .children()
            .filter(|n| n.has_tag_name("Marker_Type"))
        {
            let markers: Vec<Node<'_, '_>> = marker_type
                .children()
                .filter(|n| n.has_tag_name("Marker"))
                .collect();
            if markers.is_empty() {
                continue;
            }

            let identifier = marker_type
                .children()
                .find(|n| n.has_tag_name("Type"))
                .and_then(|n| n.text())
                .map(str::trim)
                .ok_or_else(|| marker_error(path, &"Marker_Type has no Type identifier"))?;

            let mut positions = Vec::with_capacity(markers.len());
            for marker in markers {
                positions.push(marker_position(path, marker)?);
            }
            collection.insert(identifier.to_string(), positions);
        }
    }
    Ok(collection)
}

/// Collect all marker files in a directory, sorted
///
/// # Errors
///
/// Returns an error if the directory cannot be read
pub fn collect_marker_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| fs_error(dir, "read directory", e))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| fs_error(dir, "read directory entry", e))?
            .path();
        if path.extension().and_then(|s| s.to_str()) == Some("xml") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
