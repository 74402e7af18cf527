//! Mesos agent adapter for the `/metrics/snapshot` endpoint.
//!
//! The agent publishes a flat JSON object of counters and gauges, keyed by
//! slash-namespaced names such as `slave/cpus_percent`. This adapter
//! decodes one such document, stamps it with the agent's node name and the
//! capture time, and groups the values into seven measurements.
//!
//! ## Measurements Emitted
//!
//! | Measurement | Fields |
//! |---|---|
//! | `slave-cpu` | percent, total, used |
//! | `slave-disk` | percent, total, used |
//! | `slave-mem` | percent, total, used |
//! | `slave-tasks` | failed, finished, killed, lost, running, staging, starting |
//! | `system` | cpus_total, load_15min, load_1min, load_5min, mem_free_bytes, mem_total_bytes |
//! | `slave-executor` | directory_max_allowed_age_secs, registering, running, terminated, terminating |
//! | `slave-global` | registered, invalid_framework_messages, invalid_status_updates, uptime_secs, valid_framework_messages, valid_status_updates, framewors, conatiner_launch_errors |
//!
//! Every point is tagged `node=<agent>` and all points from one document
//! share a timestamp. The two `system` byte counts are integers; every
//! other field is a float.
//!
//! ## Example
//!
//! ```rust
//! use mesoswatch_adapters::{FieldValue, Parser, SlaveParser};
//!
//! let parser = SlaveParser::new("node-a");
//! let body = r#"{"slave/cpus_percent":0.5,"slave/cpus_total":4,"slave/cpus_used":2}"#;
//!
//! let points = parser.parse(body.as_bytes()).unwrap();
//! let cpu = &points[0];
//! assert_eq!(cpu.measurement, "slave-cpu");
//! assert_eq!(cpu.tag("node"), Some("node-a"));
//! assert_eq!(cpu.field("percent"), Some(FieldValue::Float(0.5)));
//! ```

use std::io::Read;

use tracing::{debug, warn};

use mesoswatch_types::{current_timestamp_ms, Point};

use crate::{ParseError, Parser, ParserConfig};

mod measurement;
mod metric;
mod snapshot;

pub use measurement::{measurement_by_name, FieldSpec, Measurement, Transform, MEASUREMENTS};
pub use metric::SlaveMetric;
pub use snapshot::{SlaveSnapshot, SlaveStats};

/// Parser for Mesos agent metrics documents.
///
/// Holds only the node identity, so it is cheap to clone and safe to share
/// between threads; every call works on its own buffer and snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlaveParser {
    node: String,
}

impl SlaveParser {
    /// Create a parser that tags every point with `node`.
    pub fn new(node: impl Into<String>) -> Self {
        Self { node: node.into() }
    }

    /// Create a parser from loaded configuration.
    pub fn from_config(config: &ParserConfig) -> Self {
        Self::new(config.node.clone())
    }

    /// The node identity applied to every point.
    pub fn node(&self) -> &str {
        &self.node
    }

    /// Read the stream to the end and decode it into a snapshot.
    ///
    /// The reader is consumed; it is dropped before decoding starts, so the
    /// stream is released exactly once on every path.
    pub fn decode<R: Read>(&self, mut reader: R) -> Result<SlaveSnapshot, ParseError> {
        let mut body = Vec::new();
        let read = reader.read_to_end(&mut body);
        drop(reader);

        if let Err(e) = read {
            warn!(node = %self.node, error = %e, "Failed to read agent metrics");
            return Err(ParseError::Read(e));
        }

        self.decode_slice(&body)
    }

    /// Decode an already buffered document into a snapshot.
    pub fn decode_slice(&self, body: &[u8]) -> Result<SlaveSnapshot, ParseError> {
        let stats: SlaveStats = serde_json::from_slice(body).map_err(|e| {
            warn!(node = %self.node, error = %e, "Failed to decode agent metrics");
            ParseError::Decode(e)
        })?;

        Ok(SlaveSnapshot::new(
            self.node.clone(),
            current_timestamp_ms(),
            stats,
        ))
    }

    /// Translate an already buffered document into points.
    pub fn parse_slice(&self, body: &[u8]) -> Result<Vec<Point>, ParseError> {
        let snapshot = self.decode_slice(body)?;
        Ok(self.points(&snapshot))
    }

    fn points(&self, snapshot: &SlaveSnapshot) -> Vec<Point> {
        let points = snapshot.points();
        debug!(
            node = %self.node,
            timestamp_ms = snapshot.timestamp_ms(),
            points = points.len(),
            "Translated agent metrics"
        );
        points
    }
}

impl Parser for SlaveParser {
    fn parse<R: Read>(&self, reader: R) -> Result<Vec<Point>, ParseError> {
        let snapshot = self.decode(reader)?;
        Ok(self.points(&snapshot))
    }
}
