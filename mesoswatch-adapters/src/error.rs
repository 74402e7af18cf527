//! Error types for adapters.

use thiserror::Error;

/// Errors that can occur while translating a metrics document into points.
///
/// A failed parse never yields partial points.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The input stream could not be read to the end.
    #[error("Failed to read metrics stream: {0}")]
    Read(#[source] std::io::Error),

    /// The bytes read are not a JSON object of numeric metrics.
    #[error("Failed to decode metrics document: {0}")]
    Decode(#[source] serde_json::Error),
}

impl ParseError {
    /// Returns true if the failure happened while reading the stream.
    pub fn is_read(&self) -> bool {
        matches!(self, ParseError::Read(_))
    }

    /// Returns true if the failure happened while decoding the document.
    pub fn is_decode(&self) -> bool {
        matches!(self, ParseError::Decode(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn read_error_keeps_cause() {
        let err = ParseError::Read(io::Error::new(io::ErrorKind::BrokenPipe, "peer went away"));
        assert!(err.is_read());
        assert!(!err.is_decode());
        assert!(err.to_string().contains("peer went away"));
        assert!(err.source().is_some());
    }

    #[test]
    fn decode_error_keeps_cause() {
        let cause = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ParseError::Decode(cause);
        assert!(err.is_decode());
        assert!(err.to_string().starts_with("Failed to decode metrics document"));
        assert!(err.source().is_some());
    }
}
