//! How agent metrics are grouped into measurements.
//!
//! Each measurement is a row in [`MEASUREMENTS`]: a name and the fields it
//! emits, each field naming the metric it copies and how the value is
//! carried. Grouping never fails and never looks at values, so every
//! snapshot yields one point per row, in row order.

use mesoswatch_types::{FieldValue, Point};

use super::{SlaveMetric, SlaveSnapshot};
use SlaveMetric::*;

/// How a metric value is carried into a point field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Keep the float as is.
    Float,
    /// Truncate toward zero into an integer.
    Truncate,
}

impl Transform {
    /// Apply the transform to a raw metric value.
    pub fn apply(self, value: f64) -> FieldValue {
        match self {
            Transform::Float => FieldValue::Float(value),
            Transform::Truncate => FieldValue::truncated(value),
        }
    }
}

/// One output field of a measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name in the emitted point.
    pub name: &'static str,
    /// Metric the value is read from.
    pub source: SlaveMetric,
    pub transform: Transform,
}

impl FieldSpec {
    const fn float(name: &'static str, source: SlaveMetric) -> Self {
        Self {
            name,
            source,
            transform: Transform::Float,
        }
    }

    const fn truncate(name: &'static str, source: SlaveMetric) -> Self {
        Self {
            name,
            source,
            transform: Transform::Truncate,
        }
    }

    /// Read this field's value out of a snapshot.
    pub fn extract(&self, snapshot: &SlaveSnapshot) -> FieldValue {
        self.transform.apply(snapshot.get(self.source))
    }
}

/// A named group of related fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    pub name: &'static str,
    pub fields: &'static [FieldSpec],
}

impl Measurement {
    /// Build this measurement's point from a snapshot.
    ///
    /// The point is tagged with the snapshot's node and carries its
    /// timestamp unchanged.
    pub fn point(&self, snapshot: &SlaveSnapshot) -> Point {
        self.fields
            .iter()
            .fold(Point::builder(self.name), |builder, spec| {
                builder.field(spec.name, spec.extract(snapshot))
            })
            .tag("node", snapshot.node())
            .timestamp_ms(snapshot.timestamp_ms())
            .build()
    }

    /// Look up a field spec by output name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Every measurement produced from an agent snapshot, in emission order.
///
/// `framewors` and `conatiner_launch_errors` are the names existing
/// dashboards and stored series use; they must not be corrected.
pub const MEASUREMENTS: &[Measurement] = &[
    Measurement {
        name: "slave-cpu",
        fields: &[
            FieldSpec::float("percent", CpusPercent),
            FieldSpec::float("total", CpusTotal),
            FieldSpec::float("used", CpusUsed),
        ],
    },
    Measurement {
        name: "slave-disk",
        fields: &[
            FieldSpec::float("percent", DiskPercent),
            FieldSpec::float("total", DiskTotal),
            FieldSpec::float("used", DiskUsed),
        ],
    },
    Measurement {
        name: "slave-mem",
        fields: &[
            FieldSpec::float("percent", MemPercent),
            FieldSpec::float("total", MemTotal),
            FieldSpec::float("used", MemUsed),
        ],
    },
    Measurement {
        name: "slave-tasks",
        fields: &[
            FieldSpec::float("failed", TasksFailed),
            FieldSpec::float("finished", TasksFinished),
            FieldSpec::float("killed", TasksKilled),
            FieldSpec::float("lost", TasksLost),
            FieldSpec::float("running", TasksRunning),
            FieldSpec::float("staging", TasksStaging),
            FieldSpec::float("starting", TasksStarting),
        ],
    },
    Measurement {
        name: "system",
        fields: &[
            FieldSpec::float("cpus_total", SystemCpusTotal),
            FieldSpec::float("load_15min", SystemLoad15Min),
            FieldSpec::float("load_1min", SystemLoad1Min),
            FieldSpec::float("load_5min", SystemLoad5Min),
            FieldSpec::truncate("mem_free_bytes", SystemMemFreeBytes),
            FieldSpec::truncate("mem_total_bytes", SystemMemTotalBytes),
        ],
    },
    Measurement {
        name: "slave-executor",
        fields: &[
            FieldSpec::float(
                "directory_max_allowed_age_secs",
                ExecutorDirectoryMaxAllowedAgeSecs,
            ),
            FieldSpec::float("registering", ExecutorsRegistering),
            FieldSpec::float("running", ExecutorsRunning),
            FieldSpec::float("terminated", ExecutorsTerminated),
            FieldSpec::float("terminating", ExecutorsTerminating),
        ],
    },
    Measurement {
        name: "slave-global",
        fields: &[
            FieldSpec::float("registered", Registered),
            FieldSpec::float("invalid_framework_messages", InvalidFrameworkMessages),
            FieldSpec::float("invalid_status_updates", InvalidStatusUpdates),
            FieldSpec::float("uptime_secs", UptimeSecs),
            FieldSpec::float("valid_framework_messages", ValidFrameworkMessages),
            FieldSpec::float("valid_status_updates", ValidStatusUpdates),
            FieldSpec::float("framewors", FrameworksActive),
            FieldSpec::float("conatiner_launch_errors", ContainerLaunchErrors),
        ],
    },
];

/// Look up a measurement by name.
pub fn measurement_by_name(name: &str) -> Option<&'static Measurement> {
    MEASUREMENTS.iter().find(|m| m.name == name)
}
