//! Test fixtures: configuration layers on disk.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// Directory holding the layer fixtures
pub fn layers_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/layers")
}

/// Service-provider override layer
pub fn sp_override_path() -> PathBuf {
    layers_dir().join("sp_override.toml")
}

/// Federation-wide layer
pub fn federation_path() -> PathBuf {
    layers_dir().join("federation.toml")
}

/// Layer with an unparseable precedence value
pub fn invalid_precedence_path() -> PathBuf {
    layers_dir().join("invalid_precedence.toml")
}

/// Layer that sets only a whitelist
pub fn whitelist_only_path() -> PathBuf {
    layers_dir().join("whitelist_only.toml")
}
