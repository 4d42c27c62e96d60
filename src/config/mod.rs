//! Configuration layering
//!
//! Builds the configuration chain handed to the resolvers, highest priority
//! first:
//! 1. CLI layer
//! 2. Config files, in the order given
//! 3. Built-in defaults

mod defaults;
mod effective;
mod layer;

pub use defaults::BuiltinDefaults;
pub use effective::{ConfigOrigin, ConfigSource, EffectiveChain, SCHEMA_ID, SCHEMA_VERSION};
pub use layer::{SigningConfiguration, MIN_HMAC_OUTPUT_LENGTH};

use std::io;

/// Error types for config operations
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] io::Error),

    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    ValidationError(String),
}
