//! Parse error for coordinate text

use std::fmt;

/// Error returned when text cannot be parsed as a [`Coordinate`](super::Coordinate)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    text: String,
}

impl ParseError {
    /// Create a parse error for the given input text
    pub fn new(text: &str) -> Self {
        ParseError {
            text: text.to_string(),
        }
    }

    /// The text that failed to parse
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed parsing '{}' as coordinate", self.text)
    }
}

impl std::error::Error for ParseError {}
