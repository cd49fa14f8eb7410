//! Error types for pipeline operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all pipeline operations
#[derive(Debug)]
pub enum PipelineError {
    /// Failed to load a segmentation mask from the filesystem
    ImageLoad {
        /// Path to the mask file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a combined mask to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// Paired mask files disagree on pixel dimensions
    MaskDimensionMismatch {
        /// Path of the axon mask
        axon_path: PathBuf,
        /// Dimensions of the axon mask (width, height)
        axon_dimensions: (u32, u32),
        /// Dimensions of the myelin mask (width, height)
        myelin_dimensions: (u32, u32),
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// External morphometrics computation failed
    ///
    /// Raised when the external program exits with a non-zero status or
    /// cannot be spawned at all. Callers driving a batch log this error and
    /// continue with the remaining work.
    ExternalTool {
        /// Name of the external program
        program: String,
        /// Exit status code, if the process ran to completion
        status: Option<i32>,
        /// Captured standard error output
        stderr: String,
    },

    /// Measurement table could not be read or written
    Table {
        /// Path to the table file
        path: PathBuf,
        /// Underlying CSV error
        source: csv::Error,
    },

    /// Measurement table is missing a required column
    MissingColumn {
        /// Path to the table file
        path: PathBuf,
        /// Name of the absent column
        column: &'static str,
    },

    /// CellCounter marker file could not be parsed
    MarkerXml {
        /// Path to the marker file
        path: PathBuf,
        /// Description of the parse failure
        reason: String,
    },

    /// Filename stem could not be decomposed into subject and sample
    Naming {
        /// The offending filename stem
        stem: String,
        /// Explanation of the failure
        reason: &'static str,
    },

    /// Keypoint JSON serialization failed
    Json {
        /// Underlying serialization error
        source: serde_json::Error,
    },
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load mask '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(f, "Failed to export mask to '{}': {source}", path.display())
            }
            Self::MaskDimensionMismatch {
                axon_path,
                axon_dimensions,
                myelin_dimensions,
            } => {
                write!(
                    f,
                    "Mask pair for '{}' disagrees on dimensions: axon {}x{}, myelin {}x{}",
                    axon_path.display(),
                    axon_dimensions.0,
                    axon_dimensions.1,
                    myelin_dimensions.0,
                    myelin_dimensions.1
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::ExternalTool {
                program,
                status,
                stderr,
            } => match status {
                Some(code) => {
                    write!(f, "'{program}' exited with status {code}: {stderr}")
                }
                None => write!(f, "'{program}' could not be run: {stderr}"),
            },
            Self::Table { path, source } => {
                write!(
                    f,
                    "Measurement table error for '{}': {source}",
                    path.display()
                )
            }
            Self::MissingColumn { path, column } => {
                write!(
                    f,
                    "Measurement table '{}' is missing column '{column}'",
                    path.display()
                )
            }
            Self::MarkerXml { path, reason } => {
                write!(f, "Invalid marker file '{}': {reason}", path.display())
            }
            Self::Naming { stem, reason } => {
                write!(f, "Cannot derive subject/sample from '{stem}': {reason}")
            }
            Self::Json { source } => {
                write!(f, "Keypoint serialization failed: {source}")
            }
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::Table { source, .. } => Some(source),
            Self::Json { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for pipeline results
pub type Result<T> = std::result::Result<T, PipelineError>;

impl From<std::io::Error> for PipelineError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<image::ImageError> for PipelineError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<csv::Error> for PipelineError {
    fn from(err: csv::Error) -> Self {
        Self::Table {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for PipelineError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json { source: err }
    }
}

/// Create a file system error carrying path and operation context
pub fn fs_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> PipelineError {
    PipelineError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}

/// Create a marker file error with a parse failure description
pub fn marker_error(path: impl Into<PathBuf>, reason: &impl ToString) -> PipelineError {
    PipelineError::MarkerXml {
        path: path.into(),
        reason: reason.to_string(),
    }
}
