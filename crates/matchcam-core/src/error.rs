//! Error types for matchcam.

use thiserror::Error;

/// The main error type for matchcam operations.
#[derive(Error, Debug)]
pub enum MatchcamError {
    /// Calibration input that is neither a parsed record nor a
    /// fetchable location.
    #[error("unusable calibration input: {0}")]
    Configuration(String),

    /// Fetching a remote calibration export failed.
    #[error("failed to fetch calibration from '{url}': {source}")]
    Fetch {
        /// The URL that was being fetched.
        url: String,
        /// The underlying transport error.
        #[source]
        source: Box<ureq::Error>,
    },

    /// Calibration data that is missing required fields or fails
    /// validation.
    #[error("invalid calibration data: {0}")]
    MalformedData(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for MatchcamError {
    fn from(e: serde_json::Error) -> Self {
        Self::MalformedData(e.to_string())
    }
}

/// A specialized Result type for matchcam operations.
pub type Result<T> = std::result::Result<T, MatchcamError>;
