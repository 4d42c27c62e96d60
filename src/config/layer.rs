//! A single configuration layer (one TOML file).

use samlsec_policy::SecurityConfiguration;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::ConfigError;
use crate::credential::Credential;

/// Smallest HMAC output length accepted, in bits.
pub const MIN_HMAC_OUTPUT_LENGTH: u32 = 128;

/// Signing configuration for one layer of the chain.
///
/// The whitelist/blacklist fields sit at the top level of the TOML document
/// next to the signing options:
///
/// ```toml
/// blacklist = ["http://www.w3.org/2000/09/xmldsig#rsa-sha1"]
/// blacklist_merge = true
/// signature_algorithms = ["http://www.w3.org/2001/04/xmldsig-more#rsa-sha256"]
///
/// [[credentials]]
/// name = "idp-signing"
/// key_family = "rsa"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigningConfiguration {
    /// Whitelist/blacklist policy of this layer.
    #[serde(flatten)]
    pub policy: SecurityConfiguration,

    /// Signature algorithms in order of preference.
    #[serde(default)]
    pub signature_algorithms: Vec<String>,

    /// Reference digest methods in order of preference.
    #[serde(default)]
    pub reference_digest_methods: Vec<String>,

    /// Canonicalization algorithm for SignedInfo.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonicalization_algorithm: Option<String>,

    /// HMAC output length in bits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hmac_output_length: Option<u32>,

    /// Candidate signing credentials in order of preference.
    #[serde(default)]
    pub credentials: Vec<Credential>,
}

impl AsRef<SecurityConfiguration> for SigningConfiguration {
    fn as_ref(&self) -> &SecurityConfiguration {
        &self.policy
    }
}

impl SigningConfiguration {
    /// Layer holding only a whitelist/blacklist policy.
    pub fn from_policy(policy: SecurityConfiguration) -> Self {
        Self {
            policy,
            ..Default::default()
        }
    }

    /// Load and parse a layer from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse a layer from a TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let config: SigningConfiguration = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the layer
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(bits) = self.hmac_output_length {
            if bits < MIN_HMAC_OUTPUT_LENGTH || bits % 8 != 0 {
                return Err(ConfigError::ValidationError(format!(
                    "hmac_output_length must be a multiple of 8 and at least {} (got {})",
                    MIN_HMAC_OUTPUT_LENGTH, bits
                )));
            }
        }

        if let Some(c14n) = &self.canonicalization_algorithm {
            if c14n.trim().is_empty() {
                return Err(ConfigError::ValidationError(
                    "canonicalization_algorithm cannot be empty".to_string(),
                ));
            }
        }

        for credential in &self.credentials {
            if credential.name.trim().is_empty() {
                return Err(ConfigError::ValidationError(
                    "credential name cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}
