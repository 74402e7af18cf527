//! # mesoswatch-adapters
//!
//! Adapters that translate cluster metrics documents into mesoswatch
//! [`Point`]s.
//!
//! Fetching the document, retrying, scheduling collection and shipping the
//! points to a store are the caller's business. An adapter only turns one
//! readable stream into an ordered list of points, or fails.
//!
//! ## Supported Sources
//!
//! - **Mesos agent** ([`slave`]) - The agent's `/metrics/snapshot` document:
//!   CPU, disk, memory, tasks, executors, host system and global agent state
//!
//! ## Quick Start
//!
//! ```rust
//! use mesoswatch_adapters::{Parser, SlaveParser};
//!
//! let parser = SlaveParser::new("mesos-agent-01");
//!
//! // Any `std::io::Read`: an HTTP response body, a file, a byte slice...
//! let body = br#"{"slave/tasks_running": 12, "system/load_1min": 0.8}"#;
//! let points = parser.parse(&body[..]).unwrap();
//!
//! println!("Collected {} points", points.len());
//! ```

pub mod error;
pub mod parser;
pub mod settings;
pub mod slave;

pub use error::ParseError;
pub use parser::Parser;
pub use settings::ParserConfig;
pub use slave::{SlaveMetric, SlaveParser, SlaveSnapshot, SlaveStats};

// Re-export types for convenience
pub use mesoswatch_types::{FieldValue, Point};
