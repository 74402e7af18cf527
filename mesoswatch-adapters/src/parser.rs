//! The parser abstraction shared by all metrics adapters.

use std::io::Read;

use mesoswatch_types::Point;

use crate::ParseError;

/// Trait for turning one metrics document into time-series points.
///
/// The parser takes ownership of the reader and drops it before returning,
/// so the underlying stream is closed exactly once whatever the outcome.
/// Parsers do not retry; the caller decides what a failed cycle means.
///
/// # Example
///
/// ```
/// use mesoswatch_adapters::{Parser, SlaveParser};
///
/// let parser = SlaveParser::new("agent-1");
/// let body = br#"{"slave/cpus_total": 4}"#;
/// let points = parser.parse(&body[..]).unwrap();
/// assert_eq!(points.len(), 7);
/// ```
pub trait Parser {
    /// Read the whole stream and translate it.
    ///
    /// Returns every point produced from the document, or an error and no
    /// points at all.
    fn parse<R: Read>(&self, reader: R) -> Result<Vec<Point>, ParseError>;
}
