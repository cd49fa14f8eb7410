//! Per-class segmentation mask handling
//!
//! This module contains mask-related functionality including:
//! - Pairing of axon masks with their myelin partners by filename
//! - Synthesis of combined axonmyelin masks

/// Combined-mask synthesis and batch preparation
pub mod merge;
/// Mask filename derivation and directory scanning
pub mod pairing;

pub use merge::prepare_masks;
