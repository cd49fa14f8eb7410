//! CellCounter marker annotations and compressed keypoint output
//!
//! This module contains annotation-related functionality including:
//! - CellCounter XML parsing into marker collections
//! - Subject/sample identifier derivation from filenames
//! - Indented JSON keypoint export

/// Keypoint JSON serialization and output files
pub mod export;
/// Subject and sample naming
pub mod naming;
/// CellCounter XML parsing
pub mod parser;

pub use naming::SubjectId;
pub use parser::{MarkerCollection, parse_cellcounter_xml};
