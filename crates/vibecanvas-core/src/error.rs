//! Error handling for VibeCanvas
//!
//! Provides the error taxonomy shared by every layer of the canvas:
//! - File errors (loading/saving canvas documents)
//! - Resize errors (stage dimension validation)
//! - Clipboard errors (image paste/copy)
//!
//! All error types use `thiserror` for ergonomic error handling. User
//! cancellation of a dialog is not an error and never appears here.

use thiserror::Error;

/// File error type
///
/// Raised while reading, parsing or writing canvas documents.
#[derive(Error, Debug)]
pub enum FileError {
    /// The document is not a canvas file (missing or malformed `shapes`)
    #[error("Invalid canvas file format: {reason}")]
    InvalidFormat {
        /// Why the document was rejected.
        reason: String,
    },

    /// A shape entry could not be decoded
    #[error("Invalid shape at index {index}: {reason}")]
    InvalidShape {
        /// Position of the shape in the `shapes` array.
        index: usize,
        /// The decoder message.
        reason: String,
    },

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Resize error type
///
/// Stage resize requests are validated before any mutation happens.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResizeError {
    /// Requested dimensions outside the supported range
    #[error("Canvas dimensions must be between {min} and {max} pixels (got {width} x {height})")]
    OutOfRange {
        /// Requested width.
        width: f64,
        /// Requested height.
        height: f64,
        /// Smallest accepted dimension.
        min: f64,
        /// Largest accepted dimension.
        max: f64,
    },

    /// The current stage has a degenerate size and cannot be scaled from
    #[error("Cannot scale from a {width} x {height} stage")]
    DegenerateSource {
        /// Current width.
        width: f64,
        /// Current height.
        height: f64,
    },
}

/// Clipboard error type
#[derive(Error, Debug, Clone)]
pub enum ClipboardError {
    /// The clipboard holds no image
    #[error("No image found in clipboard")]
    NoImage,

    /// The clipboard image could not be decoded or encoded
    #[error("Failed to decode image: {reason}")]
    Decode {
        /// The decoder message.
        reason: String,
    },

    /// The platform clipboard refused the operation
    #[error("Clipboard error: {reason}")]
    Backend {
        /// The backend message.
        reason: String,
    },
}

/// Main error type for VibeCanvas
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug)]
pub enum Error {
    /// File error
    #[error(transparent)]
    File(#[from] FileError),

    /// Resize error
    #[error(transparent)]
    Resize(#[from] ResizeError),

    /// Clipboard error
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

impl Error {
    /// Check if this is a file error
    pub fn is_file_error(&self) -> bool {
        matches!(self, Error::File(_))
    }

    /// Check if this is a resize error
    pub fn is_resize_error(&self) -> bool {
        matches!(self, Error::Resize(_))
    }

    /// Check if this is a clipboard error
    pub fn is_clipboard_error(&self) -> bool {
        matches!(self, Error::Clipboard(_))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::File(FileError::Io(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::File(FileError::Json(err))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
