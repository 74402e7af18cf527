//! Decoded agent statistics and the snapshot they are stamped into.

use std::fmt;

use serde::de::{Deserialize, Deserializer, IgnoredAny, MapAccess, Visitor};

use mesoswatch_types::Point;

use super::measurement::MEASUREMENTS;
use super::SlaveMetric;

/// Values of every recognized metric from one agent document.
///
/// Decoding is lenient about presence and strict about shape: unknown keys
/// are skipped whatever their value, absent keys read as `0.0`, and a
/// recognized key holding anything but a number (or `null`) is an error.
#[derive(Debug, Clone, PartialEq)]
pub struct SlaveStats {
    values: [f64; SlaveMetric::COUNT],
}

impl SlaveStats {
    /// Value of a metric.
    pub fn get(&self, metric: SlaveMetric) -> f64 {
        self.values[metric.index()]
    }

    /// Set the value of a metric.
    pub fn set(&mut self, metric: SlaveMetric, value: f64) {
        self.values[metric.index()] = value;
    }

    /// Iterate over all recognized metrics and their values.
    pub fn iter(&self) -> impl Iterator<Item = (SlaveMetric, f64)> + '_ {
        SlaveMetric::ALL.iter().map(move |m| (*m, self.get(*m)))
    }
}

impl Default for SlaveStats {
    fn default() -> Self {
        Self {
            values: [0.0; SlaveMetric::COUNT],
        }
    }
}

impl<'de> Deserialize<'de> for SlaveStats {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(StatsVisitor)
    }
}

struct StatsVisitor;

impl<'de> Visitor<'de> for StatsVisitor {
    type Value = SlaveStats;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object of numeric agent metrics")
    }

    fn visit_map<A>(self, mut map: A) -> Result<SlaveStats, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut stats = SlaveStats::default();

        while let Some(key) = map.next_key::<String>()? {
            match SlaveMetric::from_key(&key) {
                Some(metric) => {
                    // null leaves the current value in place
                    if let Some(value) = map.next_value::<Option<f64>>()? {
                        stats.set(metric, value);
                    }
                }
                None => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(stats)
    }
}

/// One observation of one agent: decoded stats plus who and when.
///
/// Built once per parse and never modified afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct SlaveSnapshot {
    node: String,
    timestamp_ms: u64,
    stats: SlaveStats,
}

impl SlaveSnapshot {
    /// Stamp decoded stats with node identity and capture time.
    pub fn new(node: impl Into<String>, timestamp_ms: u64, stats: SlaveStats) -> Self {
        Self {
            node: node.into(),
            timestamp_ms,
            stats,
        }
    }

    /// Identity of the observed agent.
    pub fn node(&self) -> &str {
        &self.node
    }

    /// Capture time in milliseconds since the Unix epoch.
    pub fn timestamp_ms(&self) -> u64 {
        self.timestamp_ms
    }

    pub fn stats(&self) -> &SlaveStats {
        &self.stats
    }

    pub fn get(&self, metric: SlaveMetric) -> f64 {
        self.stats.get(metric)
    }

    /// Project the snapshot onto every measurement, in table order.
    pub fn points(&self) -> Vec<Point> {
        MEASUREMENTS.iter().map(|m| m.point(self)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_stats() {
        let json = r#"{
            "slave/cpus_percent": 0.5,
            "slave/cpus_total": 4,
            "system/mem_free_bytes": 1073741824.7
        }"#;

        let stats: SlaveStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.get(SlaveMetric::CpusPercent), 0.5);
        assert_eq!(stats.get(SlaveMetric::CpusTotal), 4.0);
        assert_eq!(stats.get(SlaveMetric::SystemMemFreeBytes), 1073741824.7);
        assert_eq!(stats.get(SlaveMetric::CpusUsed), 0.0);
    }

    #[test]
    fn unknown_keys_are_skipped_whatever_their_value() {
        let json = r#"{
            "slave/gc_disk_usage_percent": 0.1,
            "version": "1.4.0",
            "nested": {"a": [1, 2, {"b": null}]},
            "flag": true,
            "slave/tasks_running": 3
        }"#;

        let stats: SlaveStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.get(SlaveMetric::TasksRunning), 3.0);
        assert_eq!(stats.iter().filter(|(_, v)| *v != 0.0).count(), 1);
    }

    #[test]
    fn empty_object_is_all_zero() {
        let stats: SlaveStats = serde_json::from_str("{}").unwrap();
        assert_eq!(stats, SlaveStats::default());
        assert!(stats.iter().all(|(_, v)| v == 0.0));
    }

    #[test]
    fn null_reads_as_zero() {
        let stats: SlaveStats = serde_json::from_str(r#"{"slave/mem_used": null}"#).unwrap();
        assert_eq!(stats.get(SlaveMetric::MemUsed), 0.0);
    }

    #[test]
    fn duplicate_key_last_wins() {
        let stats: SlaveStats =
            serde_json::from_str(r#"{"slave/mem_used": 1, "slave/mem_used": 2}"#).unwrap();
        assert_eq!(stats.get(SlaveMetric::MemUsed), 2.0);
    }

    #[test]
    fn string_for_recognized_key_is_rejected() {
        let result = serde_json::from_str::<SlaveStats>(r#"{"slave/cpus_total": "4"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn bool_for_recognized_key_is_rejected() {
        let result = serde_json::from_str::<SlaveStats>(r#"{"slave/registered": true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn non_object_is_rejected() {
        assert!(serde_json::from_str::<SlaveStats>("[1, 2, 3]").is_err());
        assert!(serde_json::from_str::<SlaveStats>("42").is_err());
        assert!(serde_json::from_str::<SlaveStats>("null").is_err());
    }

    #[test]
    fn snapshot_accessors() {
        let mut stats = SlaveStats::default();
        stats.set(SlaveMetric::UptimeSecs, 120.5);

        let snapshot = SlaveSnapshot::new("agent-1", 1703160000000, stats);
        assert_eq!(snapshot.node(), "agent-1");
        assert_eq!(snapshot.timestamp_ms(), 1703160000000);
        assert_eq!(snapshot.get(SlaveMetric::UptimeSecs), 120.5);
        assert_eq!(snapshot.stats().get(SlaveMetric::UptimeSecs), 120.5);
    }

    #[test]
    fn snapshot_points_share_node_and_time() {
        let snapshot = SlaveSnapshot::new("agent-1", 99, SlaveStats::default());
        let points = snapshot.points();

        assert_eq!(points.len(), 7);
        for point in &points {
            assert_eq!(point.tags.len(), 1);
            assert_eq!(point.tag("node"), Some("agent-1"));
            assert_eq!(point.timestamp_ms, 99);
        }
    }
}
