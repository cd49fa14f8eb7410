//! External morphometrics computation and measurement-table filtering
//!
//! This module contains morphometrics-related functionality including:
//! - The idempotent driver around the external computation
//! - Measurement-table loading and writing
//! - Declarative post-hoc filter rules
//! - Manual-vs-detected count comparison

/// External computation driver and table discovery
pub mod driver;
/// Named row-exclusion rules and their application
pub mod filter;
/// Manual-vs-detected count comparison
pub mod summary;
/// Measurement table I/O
pub mod table;

pub use driver::{AxonPopulation, MorphometricsDriver};
pub use table::MeasurementTable;
