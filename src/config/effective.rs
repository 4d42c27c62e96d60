//! Effective configuration chain with full provenance
//!
//! The effective chain captures every contributing layer, highest priority
//! first, plus where each layer came from.

use chrono::{DateTime, Utc};
use samlsec_policy::{
    resolve_and_populate, resolve_predicate, AlgorithmPredicate, CriteriaSet, ResolveError,
    WhitelistBlacklistParameters,
};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::io;
use std::path::Path;

use super::defaults::BuiltinDefaults;
use super::{ConfigError, SigningConfiguration};

/// Schema version for effective_chain
pub const SCHEMA_VERSION: u32 = 1;

/// Schema identifier
pub const SCHEMA_ID: &str = "samlsec/effective_chain@1";

/// Origin of a configuration layer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ConfigOrigin {
    Builtin,
    File,
    Cli,
}

/// A contributing layer with provenance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigSource {
    /// Origin of this layer
    pub origin: ConfigOrigin,

    /// File path (None for builtin/cli)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// SHA-256 digest of raw file bytes (None for builtin/cli)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
}

/// Effective chain with full provenance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectiveChain {
    /// Schema version
    pub schema_version: u32,

    /// Schema identifier
    pub schema_id: String,

    /// When this chain was assembled
    pub created_at: DateTime<Utc>,

    /// Layers, highest priority first
    pub layers: Vec<SigningConfiguration>,

    /// Provenance of each layer, same order as `layers`
    pub sources: Vec<ConfigSource>,
}

impl EffectiveChain {
    /// Build the chain from files and an optional CLI layer.
    ///
    /// Priority: CLI layer, then `files` in the order given, then built-in
    /// defaults.
    pub fn build<P: AsRef<Path>>(
        files: &[P],
        cli_layer: Option<SigningConfiguration>,
    ) -> Result<Self, ConfigError> {
        let mut layers = Vec::new();
        let mut sources = Vec::new();

        if let Some(cli) = cli_layer {
            cli.validate()?;
            layers.push(cli);
            sources.push(ConfigSource {
                origin: ConfigOrigin::Cli,
                path: None,
                digest: None,
            });
        }

        for path in files {
            let path = path.as_ref();
            let (layer, digest) = Self::load_toml_file(path)?;
            tracing::debug!(path = %path.display(), digest = %digest, "loaded configuration layer");
            layers.push(layer);
            sources.push(ConfigSource {
                origin: ConfigOrigin::File,
                path: Some(path.to_string_lossy().to_string()),
                digest: Some(digest),
            });
        }

        layers.push(BuiltinDefaults::default().to_layer());
        sources.push(ConfigSource {
            origin: ConfigOrigin::Builtin,
            path: None,
            digest: None,
        });

        Ok(Self {
            schema_version: SCHEMA_VERSION,
            schema_id: SCHEMA_ID.to_string(),
            created_at: Utc::now(),
            layers,
            sources,
        })
    }

    /// Load and parse a TOML layer, returning the layer and digest
    fn load_toml_file(path: &Path) -> Result<(SigningConfiguration, String), ConfigError> {
        let bytes = fs::read(path)?;

        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        let digest = hex::encode(hasher.finalize());

        let contents = String::from_utf8(bytes).map_err(|e| {
            ConfigError::ValidationError(format!("{}: invalid UTF-8: {}", path.display(), e))
        })?;

        let layer = SigningConfiguration::from_toml(&contents)?;
        Ok((layer, digest))
    }

    /// Resolved whitelist/blacklist parameters of the chain.
    pub fn policy(&self) -> WhitelistBlacklistParameters {
        let mut params = WhitelistBlacklistParameters::default();
        resolve_and_populate(&mut params, &self.layers);
        params
    }

    /// Admission predicate of the chain.
    pub fn predicate(&self) -> AlgorithmPredicate {
        resolve_predicate(&self.layers)
    }

    /// Criteria set for the parameters resolvers.
    pub fn criteria(&self) -> Result<CriteriaSet<SigningConfiguration>, ResolveError> {
        CriteriaSet::with_configurations(self.layers.clone())
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write to file
    pub fn write_to_file(&self, path: &Path) -> io::Result<()> {
        let json = self.to_json().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("JSON serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)
    }
}
