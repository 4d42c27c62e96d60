//! Built-in defaults (lowest-priority layer)
//!
//! Hardcoded signing preferences plus a blacklist of broken algorithms.

use samlsec_policy::SecurityConfiguration;

use super::SigningConfiguration;
use crate::registry::uris;

/// Built-in default configuration values
#[derive(Debug, Clone)]
pub struct BuiltinDefaults {
    /// Algorithms nobody should accept (MD5 family, RSA PKCS#1 v1.5 key transport)
    pub blacklist: Vec<String>,

    /// Signature algorithms in order of preference
    pub signature_algorithms: Vec<String>,

    /// Reference digest methods in order of preference
    pub reference_digest_methods: Vec<String>,

    /// Canonicalization algorithm (default: exclusive C14N)
    pub canonicalization_algorithm: String,
}

impl Default for BuiltinDefaults {
    fn default() -> Self {
        let owned = |ids: &[&str]| ids.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        Self {
            blacklist: owned(&[
                uris::signature::RSA_MD5,
                uris::mac::HMAC_MD5,
                uris::digest::MD5,
                uris::key_transport::RSA_1_5,
            ]),
            signature_algorithms: owned(&[
                uris::signature::RSA_SHA256,
                uris::signature::ECDSA_SHA256,
                uris::mac::HMAC_SHA256,
                uris::signature::RSA_SHA384,
                uris::signature::ECDSA_SHA384,
                uris::mac::HMAC_SHA384,
                uris::signature::RSA_SHA512,
                uris::signature::ECDSA_SHA512,
                uris::mac::HMAC_SHA512,
                uris::signature::DSA_SHA256,
            ]),
            reference_digest_methods: owned(&[
                uris::digest::SHA256,
                uris::digest::SHA384,
                uris::digest::SHA512,
            ]),
            canonicalization_algorithm: uris::canonicalization::EXCLUSIVE_C14N.to_string(),
        }
    }
}

impl BuiltinDefaults {
    /// Convert to a chain layer
    pub fn to_layer(&self) -> SigningConfiguration {
        SigningConfiguration {
            policy: SecurityConfiguration::new()
                .with_blacklist(&self.blacklist)
                .with_blacklist_merge(true),
            signature_algorithms: self.signature_algorithms.clone(),
            reference_digest_methods: self.reference_digest_methods.clone(),
            canonicalization_algorithm: Some(self.canonicalization_algorithm.clone()),
            hmac_output_length: None,
            credentials: Vec::new(),
        }
    }
}
