//! # mesoswatch-types
//!
//! Core types for mesoswatch. A [`Point`] is one measurement record bound
//! for a time-series store: a measurement name, a set of string tags, a set
//! of numeric fields and a timestamp.
//!
//! ## Design Goals
//!
//! - **Zero required dependencies**: Core types work without any serialization framework
//! - **Optional serialization**: Enable `serde` and/or `minicbor` features as needed
//! - **Store agnostic**: Points carry no wire format; the shipper picks one
//! - **Ergonomic builders**: Fluent API for constructing points
//!
//! ## Features
//!
//! - `std` (default): Standard library support
//! - `serde`: JSON/MessagePack/etc. serialization via serde
//! - `minicbor`: Compact binary serialization via CBOR
//! - `all`: Enable all serialization formats
//!
//! ## Example
//!
//! ```rust
//! use mesoswatch_types::{FieldValue, Point};
//!
//! let point = Point::builder("slave-cpu")
//!     .tag("node", "agent-1")
//!     .field("percent", 0.5)
//!     .field("total", 4.0)
//!     .timestamp_ms(1703160000000)
//!     .build();
//!
//! assert_eq!(point.tag("node"), Some("agent-1"));
//! assert_eq!(point.field("total"), Some(FieldValue::Float(4.0)));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod point;
mod value;

pub use point::*;
pub use value::*;
