use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or plotting a sample file.
///
/// Every variant aborts the run: there is no partial figure.
#[derive(Debug, Error)]
pub enum SampleError {
    /// The path is missing or unreadable.
    #[error("cannot read {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Not valid JSON, or not an object whose values are arrays.
    #[error("invalid sample file: {0}")]
    Parse(#[from] serde_json::Error),

    /// A point is not an array of exactly three numbers.
    #[error("label {label:?}, point {index}: expected [x, y, z], found {found}")]
    Shape {
        label: String,
        index: usize,
        found: String,
    },

    /// Writing a generated sample file failed.
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Type alias for Results using SampleError
pub type Result<T> = std::result::Result<T, SampleError>;
