//! Parser configuration.
//!
//! The only setting is the identity of the observed node. It can come from a
//! config file, from the environment, or both:
//!
//! ```toml
//! node = "mesos-agent-01"
//! ```
//!
//! Environment variables use the `MESOSWATCH` prefix and win over the file,
//! e.g. `MESOSWATCH_NODE=mesos-agent-02`.

use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "MESOSWATCH";

/// Settings applied to every parse call of a parser.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ParserConfig {
    /// Identity of the observed host, attached as the `node` tag.
    pub node: String,
}

impl ParserConfig {
    /// Create a config for the given node.
    pub fn new(node: impl Into<String>) -> Self {
        Self { node: node.into() }
    }

    /// Load from a config file, layered under `MESOSWATCH_*` variables.
    ///
    /// The file format follows the extension (TOML, JSON, YAML, ...).
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()
    }

    /// Load from `MESOSWATCH_*` variables only.
    pub fn from_env() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()
    }
}
