//! Error types for the booking library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all booking and redemption operations.
#[derive(Error, Debug)]
pub enum BookingError {
    /// QR artifact encoding failed (payload too large, image or PNG errors).
    ///
    /// Recovered inside the booking lifecycle: the record is still created
    /// with an empty artifact and the failure is logged.
    #[error("QR encoding failed: {message}")]
    ArtifactEncoding { message: String },
    /// Copy-to-clipboard is not available on this system
    #[error("Clipboard unavailable: {reason}")]
    ClipboardUnavailable { reason: String },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// No cafe in the catalog matches the given id or name
    #[error("No cafe matches '{name}'")]
    CafeNotFound { name: String },
    /// The flow was dismissed before the operation completed; any
    /// late-arriving artifact is discarded and no record is produced
    #[error("Flow was dismissed before completing")]
    FlowClosed,
    /// Time arithmetic or parsing errors from the underlying time library
    #[error("Time error: {0}")]
    Time(#[from] jiff::Error),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// File export errors (QR image download)
    #[error("Export failed at path '{}': {source}", path.display())]
    Export {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> BookingError {
        BookingError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl BookingError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates an artifact encoding error from any displayable cause.
    pub fn artifact(message: impl Into<String>) -> Self {
        Self::ArtifactEncoding {
            message: message.into(),
        }
    }

    /// Creates a clipboard availability error.
    pub fn clipboard(reason: impl Into<String>) -> Self {
        Self::ClipboardUnavailable {
            reason: reason.into(),
        }
    }
}

/// Specialized extension trait for export-related Results.
pub trait ExportResultExt<T> {
    /// Map I/O errors into export errors carrying the offending path.
    fn export_context(self, path: &std::path::Path) -> Result<T>;
}

impl<T> ExportResultExt<T> for std::result::Result<T, std::io::Error> {
    fn export_context(self, path: &std::path::Path) -> Result<T> {
        self.map_err(|e| BookingError::Export {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

/// Result type alias for booking operations
pub type Result<T> = std::result::Result<T, BookingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_builder() {
        let err = BookingError::invalid_input("date").with_reason("must not be in the past");
        match err {
            BookingError::InvalidInput { field, reason } => {
                assert_eq!(field, "date");
                assert_eq!(reason, "must not be in the past");
            }
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[test]
    fn test_error_display() {
        let err = BookingError::CafeNotFound {
            name: "Moonlight".to_string(),
        };
        assert_eq!(format!("{err}"), "No cafe matches 'Moonlight'");

        let err = BookingError::artifact("payload exceeds QR capacity");
        assert!(format!("{err}").contains("QR encoding failed"));
    }
}
