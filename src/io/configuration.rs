//! Pipeline constants and runtime configuration defaults

// Acquisition calibration
/// Default pixel size in micrometers (5.648 nm), matching the acquisition
/// resolution of the APP-cKO cohort; override with `--pixel_size` for other
/// scanners
pub const DEFAULT_PIXEL_SIZE_UM: f64 = 0.005_648;

/// Name of the external morphometrics computation program
pub const DEFAULT_MORPHOMETRICS_PROGRAM: &str = "axondeepseg_morphometrics";

// Segmentation mask naming
/// Filename suffix identifying a per-class axon mask
pub const AXON_MASK_SUFFIX: &str = "_seg-axon.png";
/// Class token substituted when deriving paired mask paths
pub const AXON_CLASS_TOKEN: &str = "-axon";
/// Class token of the myelin partner mask
pub const MYELIN_CLASS_TOKEN: &str = "-myelin";
/// Class token of the combined axonmyelin mask
pub const COMBINED_CLASS_TOKEN: &str = "-axonmyelin";
/// Filename marker identifying a combined mask of any extension
pub const COMBINED_MASK_MARKER: &str = "_seg-axonmyelin";

// Combined mask pixel labels
/// Gray level written for axon pixels (wins where classes overlap)
pub const AXON_PIXEL: u8 = 255;
/// Gray level written for myelin pixels
pub const MYELIN_PIXEL: u8 = 127;

// Measurement table naming
/// Suffix of myelinated measurement tables produced by the external tool
pub const MYELINATED_TABLE_SUFFIX: &str = "_axon_morphometrics.csv";
/// Suffix of unmyelinated measurement tables produced by the external tool
pub const UNMYELINATED_TABLE_SUFFIX: &str = "_unmyelinated_morphometrics.csv";
/// Suffix inserted before the extension of filtered tables
pub const FILTERED_SUFFIX: &str = "_filtered";
/// Filename of the manual-vs-detected count comparison table
pub const SUMMARY_FILENAME: &str = "counts_summary.csv";

// Measurement table columns
/// Axon diameter column header
pub const DIAMETER_COLUMN: &str = "axon_diam (um)";
/// g-ratio column header
pub const GRATIO_COLUMN: &str = "gratio";
/// Axon area column header
pub const AREA_COLUMN: &str = "axon_area (um^2)";
/// Solidity column header
pub const SOLIDITY_COLUMN: &str = "solidity";

// Filter thresholds
/// Myelinated axons below this diameter (µm) are discarded
pub const MIN_MYELINATED_DIAMETER_UM: f64 = 0.1;
/// Unmyelinated axons below this diameter (µm) are discarded
pub const MIN_UNMYELINATED_DIAMETER_UM: f64 = 0.05;
/// Shapes below this solidity are segmentation artifacts
pub const MIN_SOLIDITY: f64 = 0.8;
/// Unmyelinated axons above this area (µm²) are discarded
pub const MAX_UNMYELINATED_AREA_UM2: f64 = 1.0;

// Keypoint output settings
/// Default output directory for compressed keypoint files
pub const DEFAULT_KEYPOINTS_DIR: &str = "compressed_keypoints";
/// Zero-padded width of sample identifiers in output filenames
pub const SAMPLE_PAD_WIDTH: usize = 4;
/// Sample token normalized to sample 1 (whole-slide acquisitions)
pub const SAMPLE_SENTINEL: &str = "8000X";
/// Indentation unit for keypoint JSON output
pub const JSON_INDENT: &[u8] = b"    ";

// Progress bar display settings
/// Width of the batch progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
