//! Algorithm registry
//!
//! Describes which algorithm URIs exist, what kind of operation each performs,
//! which key family it needs and whether this deployment can run it. The
//! registry is an ordinary value: build one (usually from
//! [`AlgorithmRegistry::with_defaults`]), adjust it, and pass it by reference
//! to the parameters resolvers.

pub mod uris;

use samlsec_policy::AlgorithmPredicate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::credential::{Credential, KeyFamily};

/// What an algorithm is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmKind {
    /// Public-key signature.
    Signature,
    /// Keyed-hash signature.
    Mac,
    /// Message digest.
    Digest,
    /// Key transport.
    KeyTransport,
    /// Block encryption.
    BlockEncryption,
}

impl AlgorithmKind {
    /// Every kind, in listing order.
    pub const ALL: [AlgorithmKind; 5] = [
        AlgorithmKind::Signature,
        AlgorithmKind::Mac,
        AlgorithmKind::Digest,
        AlgorithmKind::KeyTransport,
        AlgorithmKind::BlockEncryption,
    ];

    /// Short stable name.
    pub fn name(&self) -> &'static str {
        match self {
            AlgorithmKind::Signature => "signature",
            AlgorithmKind::Mac => "mac",
            AlgorithmKind::Digest => "digest",
            AlgorithmKind::KeyTransport => "key_transport",
            AlgorithmKind::BlockEncryption => "block_encryption",
        }
    }
}

/// A registered algorithm as seen through a policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlgorithmStatus {
    pub uri: String,
    pub kind: AlgorithmKind,
    /// Runnable in this deployment
    pub supported: bool,
    /// Admitted by the whitelist/blacklist
    pub allowed: bool,
}

/// Metadata for one algorithm URI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmDescriptor {
    /// Algorithm URI.
    pub uri: String,

    /// Operation kind.
    pub kind: AlgorithmKind,

    /// Key family required (None for digests).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_family: Option<KeyFamily>,

    /// Smallest key, in bits, a credential may hold to use the algorithm.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_key_length: Option<u32>,

    /// Whether this deployment can execute the algorithm.
    pub supported: bool,
}

impl AlgorithmDescriptor {
    /// Create a supported descriptor.
    pub fn new(uri: impl Into<String>, kind: AlgorithmKind, key_family: Option<KeyFamily>) -> Self {
        Self {
            uri: uri.into(),
            kind,
            key_family,
            min_key_length: None,
            supported: true,
        }
    }

    /// Require keys of at least `bits`.
    pub fn with_min_key_length(mut self, bits: u32) -> Self {
        self.min_key_length = Some(bits);
        self
    }

    /// Whether `credential` holds a key this algorithm can use.
    ///
    /// A credential of unknown length passes the length check.
    pub fn accepts(&self, credential: &Credential) -> bool {
        if self.key_family != Some(credential.key_family) {
            return false;
        }
        match (self.min_key_length, credential.key_length) {
            (Some(min), Some(bits)) => bits >= min,
            _ => true,
        }
    }
}

/// Default minimum key length for a key family.
fn default_min_key_length(family: KeyFamily) -> Option<u32> {
    match family {
        KeyFamily::Rsa | KeyFamily::Dsa => Some(2048),
        KeyFamily::Ec => Some(256),
        KeyFamily::Hmac | KeyFamily::Aes => None,
    }
}

/// Lookup table of algorithm descriptors keyed by URI.
#[derive(Debug, Clone, Default)]
pub struct AlgorithmRegistry {
    entries: HashMap<String, AlgorithmDescriptor>,
}

impl AlgorithmRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with the XML-DSig and XML-Enc algorithms.
    pub fn with_defaults() -> Self {
        use AlgorithmKind::*;
        use KeyFamily::*;

        let defaults: &[(&str, AlgorithmKind, Option<KeyFamily>)] = &[
            (uris::signature::RSA_MD5, Signature, Some(Rsa)),
            (uris::signature::RSA_SHA1, Signature, Some(Rsa)),
            (uris::signature::RSA_SHA256, Signature, Some(Rsa)),
            (uris::signature::RSA_SHA384, Signature, Some(Rsa)),
            (uris::signature::RSA_SHA512, Signature, Some(Rsa)),
            (uris::signature::ECDSA_SHA1, Signature, Some(Ec)),
            (uris::signature::ECDSA_SHA256, Signature, Some(Ec)),
            (uris::signature::ECDSA_SHA384, Signature, Some(Ec)),
            (uris::signature::ECDSA_SHA512, Signature, Some(Ec)),
            (uris::signature::DSA_SHA1, Signature, Some(Dsa)),
            (uris::signature::DSA_SHA256, Signature, Some(Dsa)),
            (uris::mac::HMAC_MD5, Mac, Some(Hmac)),
            (uris::mac::HMAC_SHA1, Mac, Some(Hmac)),
            (uris::mac::HMAC_SHA256, Mac, Some(Hmac)),
            (uris::mac::HMAC_SHA384, Mac, Some(Hmac)),
            (uris::mac::HMAC_SHA512, Mac, Some(Hmac)),
            (uris::digest::MD5, Digest, None),
            (uris::digest::SHA1, Digest, None),
            (uris::digest::SHA256, Digest, None),
            (uris::digest::SHA384, Digest, None),
            (uris::digest::SHA512, Digest, None),
            (uris::key_transport::RSA_1_5, KeyTransport, Some(Rsa)),
            (uris::key_transport::RSA_OAEP_MGF1P, KeyTransport, Some(Rsa)),
            (uris::key_transport::RSA_OAEP_11, KeyTransport, Some(Rsa)),
            (uris::block_encryption::TRIPLEDES_CBC, BlockEncryption, None),
            (uris::block_encryption::AES128_CBC, BlockEncryption, Some(Aes)),
            (uris::block_encryption::AES256_CBC, BlockEncryption, Some(Aes)),
            (uris::block_encryption::AES128_GCM, BlockEncryption, Some(Aes)),
            (uris::block_encryption::AES256_GCM, BlockEncryption, Some(Aes)),
        ];

        let mut registry = Self::new();
        for (uri, kind, key_family) in defaults {
            let mut descriptor = AlgorithmDescriptor::new(*uri, *kind, *key_family);
            descriptor.min_key_length = (*key_family).and_then(default_min_key_length);
            registry.register(descriptor);
        }
        registry
    }

    /// Add or replace a descriptor, returning the previous one.
    pub fn register(&mut self, descriptor: AlgorithmDescriptor) -> Option<AlgorithmDescriptor> {
        self.entries.insert(descriptor.uri.clone(), descriptor)
    }

    /// Mark an algorithm as (un)supported. Returns false if it is unknown.
    pub fn set_supported(&mut self, uri: &str, supported: bool) -> bool {
        match self.entries.get_mut(uri) {
            Some(descriptor) => {
                descriptor.supported = supported;
                true
            }
            None => false,
        }
    }

    /// Look up a descriptor.
    pub fn get(&self, uri: &str) -> Option<&AlgorithmDescriptor> {
        self.entries.get(uri)
    }

    /// Whether the algorithm is registered and runnable.
    pub fn is_supported(&self, uri: &str) -> bool {
        self.get(uri).map(|d| d.supported).unwrap_or(false)
    }

    /// Whether the algorithm is registered as one of `kinds` and runnable.
    pub fn is_supported_as(&self, uri: &str, kinds: &[AlgorithmKind]) -> bool {
        self.get(uri)
            .map(|d| d.supported && kinds.contains(&d.kind))
            .unwrap_or(false)
    }

    /// Whether `credential` holds the kind and size of key `uri` needs.
    pub fn is_key_compatible(&self, uri: &str, credential: &Credential) -> bool {
        self.get(uri)
            .map(|d| d.accepts(credential))
            .unwrap_or(false)
    }

    /// All descriptors of a kind, ordered by URI.
    pub fn of_kind(&self, kind: AlgorithmKind) -> Vec<&AlgorithmDescriptor> {
        let mut descriptors: Vec<_> = self.entries.values().filter(|d| d.kind == kind).collect();
        descriptors.sort_by(|a, b| a.uri.cmp(&b.uri));
        descriptors
    }

    /// Status of every algorithm of `kinds` under `predicate`, grouped by
    /// kind in the order given and sorted by URI within a kind.
    pub fn statuses(
        &self,
        kinds: &[AlgorithmKind],
        predicate: &AlgorithmPredicate,
    ) -> Vec<AlgorithmStatus> {
        kinds
            .iter()
            .flat_map(|kind| self.of_kind(*kind))
            .map(|d| AlgorithmStatus {
                uri: d.uri.clone(),
                kind: d.kind,
                supported: self.is_supported(&d.uri),
                allowed: predicate.is_allowed(&d.uri),
            })
            .collect()
    }

    /// Number of registered algorithms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
