//! Error types for coordinate handling

use std::fmt;
use std::io;

use crate::coordinate::ParseError;

/// Crate-wide error types
#[derive(Debug)]
pub enum GeoError {
    /// I/O error
    IoError(io::Error),
    /// Coordinate text could not be parsed
    Parse(ParseError),
    /// Invalid configuration or location table
    ConfigError(String),
    /// Invalid command-line argument
    InvalidArgument(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for GeoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoError::IoError(e) => write!(f, "I/O error: {}", e),
            GeoError::Parse(e) => write!(f, "{}", e),
            GeoError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            GeoError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            GeoError::GenericError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for GeoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GeoError::IoError(e) => Some(e),
            GeoError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for GeoError {
    fn from(error: io::Error) -> Self {
        GeoError::IoError(error)
    }
}

impl From<ParseError> for GeoError {
    fn from(error: ParseError) -> Self {
        GeoError::Parse(error)
    }
}

impl From<String> for GeoError {
    fn from(msg: String) -> Self {
        GeoError::GenericError(msg)
    }
}

/// Result type for crate operations
pub type GeoResult<T> = Result<T, GeoError>;
