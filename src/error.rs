use thiserror::Error;

/// Main error type for cuttle operations
///
/// The engine itself is total over all string inputs and never returns an
/// error; this type covers the surrounding plumbing, chiefly loading a
/// labeled corpus from disk.
#[derive(Error, Debug)]
pub enum CuttleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid corpus: {0}")]
    InvalidCorpus(String),
}

/// Result type alias for cuttle operations
pub type Result<T> = std::result::Result<T, CuttleError>;
