//! Point - one measurement record for a time-series store.

use alloc::collections::BTreeMap;
use alloc::string::String;

use crate::FieldValue;

/// A single measurement observed at one instant.
///
/// Points are what collectors hand to a shipper. The shipper owns the wire
/// format (line protocol, JSON, ...) and the transport.
///
/// # Example
///
/// ```rust
/// use mesoswatch_types::Point;
///
/// let point = Point::builder("system")
///     .tag("node", "agent-1")
///     .field("load_1min", 0.42)
///     .field("mem_free_bytes", 1073741824i64)
///     .build();
///
/// assert_eq!(point.measurement, "system");
/// assert_eq!(point.len(), 2);
///
/// // Serialize with serde (requires "serde" feature)
/// // let json = serde_json::to_string(&point)?;
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "minicbor", derive(minicbor::Encode, minicbor::Decode))]
pub struct Point {
    /// Name of the measurement, e.g. `slave-cpu`.
    #[cfg_attr(feature = "minicbor", n(0))]
    pub measurement: String,

    /// Tag key/value pairs identifying the series.
    #[cfg_attr(feature = "minicbor", n(1))]
    pub tags: BTreeMap<String, String>,

    /// The metric payload.
    #[cfg_attr(feature = "minicbor", n(2))]
    pub fields: BTreeMap<String, FieldValue>,

    /// Unix timestamp in milliseconds when the observation was taken.
    #[cfg_attr(feature = "minicbor", n(3))]
    pub timestamp_ms: u64,
}

impl Point {
    /// Create an empty point with a specific timestamp.
    pub fn with_timestamp(measurement: impl Into<String>, timestamp_ms: u64) -> Self {
        Self {
            measurement: measurement.into(),
            tags: BTreeMap::new(),
            fields: BTreeMap::new(),
            timestamp_ms,
        }
    }

    /// Create a builder for the given measurement.
    pub fn builder(measurement: impl Into<String>) -> PointBuilder {
        PointBuilder::new(measurement)
    }

    /// Look up a tag value.
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    /// Look up a field value.
    pub fn field(&self, key: &str) -> Option<FieldValue> {
        self.fields.get(key).copied()
    }

    /// Check if the point has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of fields in the point.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Iterate over all fields.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.fields.iter()
    }
}

/// Builder for constructing `Point` instances.
#[derive(Debug)]
pub struct PointBuilder {
    measurement: String,
    tags: BTreeMap<String, String>,
    fields: BTreeMap<String, FieldValue>,
    timestamp_ms: Option<u64>,
}

impl PointBuilder {
    /// Create a new builder.
    pub fn new(measurement: impl Into<String>) -> Self {
        Self {
            measurement: measurement.into(),
            tags: BTreeMap::new(),
            fields: BTreeMap::new(),
            timestamp_ms: None,
        }
    }

    /// Add a tag. A repeated key overwrites the earlier value.
    pub fn tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    /// Add a field. A repeated key overwrites the earlier value.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Set a specific timestamp (milliseconds since Unix epoch).
    pub fn timestamp_ms(mut self, ts: u64) -> Self {
        self.timestamp_ms = Some(ts);
        self
    }

    /// Build the point.
    #[cfg(feature = "std")]
    pub fn build(self) -> Point {
        Point {
            measurement: self.measurement,
            tags: self.tags,
            fields: self.fields,
            timestamp_ms: self.timestamp_ms.unwrap_or_else(current_timestamp_ms),
        }
    }

    /// Build the point with a specific timestamp (for no_std).
    #[cfg(not(feature = "std"))]
    pub fn build(self) -> Point {
        Point {
            measurement: self.measurement,
            tags: self.tags,
            fields: self.fields,
            timestamp_ms: self.timestamp_ms.unwrap_or(0),
        }
    }
}

/// Get current timestamp in milliseconds since Unix epoch.
#[cfg(feature = "std")]
pub fn current_timestamp_ms() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
