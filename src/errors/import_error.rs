use std::fmt;

use super::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    Io(String),
    Csv(String),
    Json(String),
    InvalidRecord { row: usize, error: ValidationError },
    InvalidPrice { asset_id: String, error: ValidationError },
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ImportError::Io(e) => write!(f, "Could not read input: {e}"),
            ImportError::Csv(e) => write!(f, "Error during csv deserialisation: {e}"),
            ImportError::Json(e) => write!(f, "Error during json deserialisation: {e}"),
            ImportError::InvalidRecord { row, error } => write!(f, "Row {row}: {error}"),
            ImportError::InvalidPrice { asset_id, error } => {
                write!(f, "Price of {asset_id}: {error}")
            }
        }
    }
}

impl std::error::Error for ImportError {}

impl From<csv::Error> for ImportError {
    fn from(e: csv::Error) -> Self {
        ImportError::Csv(e.to_string())
    }
}

impl From<serde_json::Error> for ImportError {
    fn from(e: serde_json::Error) -> Self {
        ImportError::Json(e.to_string())
    }
}

impl From<std::io::Error> for ImportError {
    fn from(e: std::io::Error) -> Self {
        ImportError::Io(e.to_string())
    }
}
