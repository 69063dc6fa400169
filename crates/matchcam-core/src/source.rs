//! Calibration input sources.

use std::fs;
use std::path::PathBuf;

use crate::calibration::CalibrationRecord;
use crate::error::{MatchcamError, Result};

/// Where a calibration record comes from.
///
/// A tagged variant replaces runtime type probing at the boundary:
/// hosts either hand over an already-loaded record or a fetchable
/// location.
#[derive(Debug, Clone)]
pub enum CalibrationSource {
    /// An already-loaded record.
    Inline(CalibrationRecord),
    /// A JSON export on local storage.
    Path(PathBuf),
    /// A JSON export fetched over HTTP(S).
    Url(String),
}

impl CalibrationSource {
    /// Interprets a location string as either a URL or a file path.
    #[must_use]
    pub fn from_location(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            Self::Url(location.to_string())
        } else {
            Self::Path(PathBuf::from(location))
        }
    }

    /// Interprets a dynamically-typed configuration value.
    ///
    /// Strings are treated as locations and objects as inline records.
    /// Every other JSON type is a configuration error: it is logged
    /// and nothing is loaded.
    pub fn from_json_value(value: serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::String(location) => Ok(Self::from_location(&location)),
            value @ serde_json::Value::Object(_) => {
                Ok(Self::Inline(CalibrationRecord::from_json_value(value)?))
            }
            other => {
                log::error!(
                    "calibration input must be a parsed record or a location string, got {}",
                    json_type_name(&other)
                );
                Err(MatchcamError::Configuration(format!(
                    "expected an object or a string, got {}",
                    json_type_name(&other)
                )))
            }
        }
    }

    /// Resolves the source into a record.
    ///
    /// Fetching is a one-shot blocking operation; there is no retry.
    pub fn load(&self) -> Result<CalibrationRecord> {
        match self {
            Self::Inline(record) => Ok(record.clone()),
            Self::Path(path) => {
                if path.as_os_str().is_empty() {
                    return Err(MatchcamError::Configuration(
                        "empty calibration path".to_string(),
                    ));
                }
                let json = fs::read_to_string(path)?;
                let record = CalibrationRecord::from_json_str(&json)?;
                log::info!("loaded calibration from {}", path.display());
                Ok(record)
            }
            Self::Url(url) => {
                let body = ureq::get(url.as_str())
                    .call()
                    .map_err(|e| MatchcamError::Fetch {
                        url: url.clone(),
                        source: Box::new(e),
                    })?
                    .into_body()
                    .read_to_string()
                    .map_err(|e| MatchcamError::Fetch {
                        url: url.clone(),
                        source: Box::new(e),
                    })?;
                let record = CalibrationRecord::from_json_str(&body)?;
                log::info!("loaded calibration from {url}");
                Ok(record)
            }
        }
    }
}

impl From<CalibrationRecord> for CalibrationSource {
    fn from(record: CalibrationRecord) -> Self {
        Self::Inline(record)
    }
}

impl From<&str> for CalibrationSource {
    fn from(location: &str) -> Self {
        Self::from_location(location)
    }
}

impl From<String> for CalibrationSource {
    fn from(location: String) -> Self {
        Self::from_location(&location)
    }
}

impl From<PathBuf> for CalibrationSource {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
