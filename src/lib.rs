//! Command-line tooling for an axon/myelin morphometrics pipeline
//!
//! The crate prepares combined axonmyelin masks from per-class segmentation
//! outputs, drives an external per-subject morphometrics computation with
//! idempotent re-run checks, filters the resulting measurement tables with a
//! fixed set of plausibility rules, and converts manually annotated
//! CellCounter XML marker files into compact per-subject keypoint JSON.

#![forbid(unsafe_code)]

/// Input/output operations: CLI orchestration, errors, constants, progress
pub mod io;
/// CellCounter marker parsing and keypoint JSON export
pub mod keypoints;
/// Per-class mask pairing and combined-mask synthesis
pub mod masks;
/// External morphometrics driver and measurement-table filtering
pub mod morphometrics;

pub use io::error::{PipelineError, Result};
