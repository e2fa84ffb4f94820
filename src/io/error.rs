//! Error types and path context for conversion operations

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all conversion operations
#[derive(Debug)]
pub enum ConversionError {
    /// Configured image directory does not exist
    InputNotFound {
        /// Path that was expected to be a directory
        path: PathBuf,
    },

    /// Source image could not be opened or decoded
    UnreadableImage {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Output location is unusable
    ///
    /// Raised before any image is processed when:
    /// - The parent directory does not exist
    /// - The file extension is not `pdf`
    InvalidOutputPath {
        /// Offending output path
        path: PathBuf,
        /// Explanation of what is wrong with the path
        reason: String,
    },

    /// Conversion parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Rendered page could not be encoded
    ImageEncode {
        /// Target encoding
        format: &'static str,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// No usable font for annotations was found
    FontUnavailable {
        /// Locations that were searched
        searched: Vec<PathBuf>,
    },

    /// Font file exists but could not be parsed
    InvalidFont {
        /// Path to the font file
        path: PathBuf,
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
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputNotFound { path } => {
                write!(f, "Image directory '{}' does not exist", path.display())
            }
            Self::UnreadableImage { path, source } => {
                write!(f, "Failed to read image '{}': {source}", path.display())
            }
            Self::InvalidOutputPath { path, reason } => {
                write!(f, "Invalid output path '{}': {reason}", path.display())
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageEncode { format, source } => {
                write!(f, "Failed to encode page as {format}: {source}")
            }
            Self::FontUnavailable { searched } => {
                let locations = searched
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "No annotation font found (searched: {locations})")
            }
            Self::InvalidFont { path } => {
                write!(f, "Font '{}' could not be parsed", path.display())
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
        }
    }
}

impl std::error::Error for ConversionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnreadableImage { source, .. } | Self::ImageEncode { source, .. } => {
                Some(source)
            }
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for conversion results
pub type Result<T> = std::result::Result<T, ConversionError>;

/// Attaches the path being worked on to low-level errors
pub trait WithPath<T> {
    /// Convert the error into a [`ConversionError`] that names `path`
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| ConversionError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

impl<T> WithPath<T> for std::result::Result<T, image::ImageError> {
    fn with_path(self, path: &Path, _operation: &'static str) -> Result<T> {
        self.map_err(|source| ConversionError::UnreadableImage {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> ConversionError {
    ConversionError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid output path error
pub fn invalid_output(path: &Path, reason: &impl ToString) -> ConversionError {
    ConversionError::InvalidOutputPath {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}
