//! Signature signing parameters
//!
//! Picks the credential, signature algorithm, reference digest method and
//! canonicalization algorithm for producing a signature. Every algorithm
//! candidate must pass the chain's whitelist/blacklist predicate and be
//! runnable according to the injected [`AlgorithmRegistry`].

use samlsec_policy::{
    normalize_identifier, resolve_and_populate, AlgorithmPredicate, CriteriaSet, ResolveError,
    WhitelistBlacklistParameters,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::config::SigningConfiguration;
use crate::credential::Credential;
use crate::registry::{AlgorithmKind, AlgorithmRegistry};

const SIGNING_KINDS: &[AlgorithmKind] = &[AlgorithmKind::Signature, AlgorithmKind::Mac];

/// Everything a signer needs to produce a signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureSigningParameters {
    /// Selected signing credential
    pub credential: Credential,

    /// Selected signature algorithm URI
    pub signature_algorithm: String,

    /// Selected reference digest method URI
    pub reference_digest_method: String,

    /// Canonicalization algorithm URI
    pub canonicalization_algorithm: String,

    /// HMAC output length (only for MAC algorithms)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hmac_output_length: Option<u32>,

    /// The whitelist/blacklist the selection was made under
    pub policy: WhitelistBlacklistParameters,
}

/// Resolves [`SignatureSigningParameters`] from a chain of signing layers.
#[derive(Debug, Clone, Copy)]
pub struct SignatureSigningParametersResolver<'a> {
    registry: &'a AlgorithmRegistry,
}

impl<'a> SignatureSigningParametersResolver<'a> {
    /// Create a resolver over the given registry.
    pub fn new(registry: &'a AlgorithmRegistry) -> Self {
        Self { registry }
    }

    /// Resolve signing parameters.
    ///
    /// Returns `Ok(None)` when no credential/algorithm pair, digest method or
    /// canonicalization algorithm can be found, and `InvalidInput` when the
    /// criteria carry no configuration chain.
    pub fn resolve(
        &self,
        criteria: &CriteriaSet<SigningConfiguration>,
    ) -> Result<Option<SignatureSigningParameters>, ResolveError> {
        let chain = criteria.require_configurations()?;

        let mut policy = WhitelistBlacklistParameters::default();
        resolve_and_populate(&mut policy, chain);
        let predicate = policy.predicate();

        let algorithms = self.effective_signature_algorithms(chain, &predicate);
        let (credential, signature_algorithm) =
            match self.select_credential_and_algorithm(chain, &algorithms) {
                Some(selected) => selected,
                None => {
                    tracing::debug!(
                        candidates = algorithms.len(),
                        "no signing credential compatible with an admitted algorithm"
                    );
                    return Ok(None);
                }
            };

        let reference_digest_method = match self.resolve_reference_digest_method(chain, &predicate)
        {
            Some(digest) => digest,
            None => {
                tracing::debug!("no admitted reference digest method");
                return Ok(None);
            }
        };

        let canonicalization_algorithm = match resolve_canonicalization_algorithm(chain) {
            Some(c14n) => c14n,
            None => {
                tracing::debug!("no canonicalization algorithm configured");
                return Ok(None);
            }
        };

        let hmac_output_length = if self.is_mac(&signature_algorithm) {
            chain.iter().find_map(|layer| layer.hmac_output_length)
        } else {
            None
        };

        tracing::debug!(
            credential = %credential.name,
            algorithm = %signature_algorithm,
            digest = %reference_digest_method,
            "resolved signing parameters"
        );

        Ok(Some(SignatureSigningParameters {
            credential,
            signature_algorithm,
            reference_digest_method,
            canonicalization_algorithm,
            hmac_output_length,
            policy,
        }))
    }

    /// Preferred signature algorithms of all layers, in chain order, that are
    /// admitted by the predicate and runnable.
    pub fn effective_signature_algorithms(
        &self,
        chain: &[SigningConfiguration],
        predicate: &AlgorithmPredicate,
    ) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut algorithms = Vec::new();
        for uri in chain
            .iter()
            .flat_map(|layer| &layer.signature_algorithms)
            .filter_map(|uri| normalize_identifier(uri))
        {
            if !seen.insert(uri.clone()) {
                continue;
            }
            if !predicate.is_allowed(&uri) {
                tracing::debug!(algorithm = %uri, "signature algorithm refused by policy");
                continue;
            }
            if !self.registry.is_supported_as(&uri, SIGNING_KINDS) {
                if self.registry.get(&uri).is_none() {
                    tracing::warn!(algorithm = %uri, "unknown signature algorithm");
                } else {
                    tracing::debug!(algorithm = %uri, "signature algorithm not supported");
                }
                continue;
            }
            algorithms.push(uri);
        }
        algorithms
    }

    /// First credential, in chain order, with a key-compatible algorithm.
    fn select_credential_and_algorithm(
        &self,
        chain: &[SigningConfiguration],
        algorithms: &[String],
    ) -> Option<(Credential, String)> {
        chain
            .iter()
            .flat_map(|layer| &layer.credentials)
            .find_map(|credential| {
                algorithms
                    .iter()
                    .find(|uri| self.registry.is_key_compatible(uri, credential))
                    .map(|uri| (credential.clone(), uri.clone()))
            })
    }

    /// First admitted and runnable digest method, in chain order.
    fn resolve_reference_digest_method(
        &self,
        chain: &[SigningConfiguration],
        predicate: &AlgorithmPredicate,
    ) -> Option<String> {
        chain
            .iter()
            .flat_map(|layer| &layer.reference_digest_methods)
            .filter_map(|uri| normalize_identifier(uri))
            .find(|uri| {
                predicate.is_allowed(uri)
                    && self.registry.is_supported_as(uri, &[AlgorithmKind::Digest])
            })
    }

    fn is_mac(&self, uri: &str) -> bool {
        self.registry
            .get(uri)
            .map(|d| d.kind == AlgorithmKind::Mac)
            .unwrap_or(false)
    }
}

/// First canonicalization algorithm configured, in chain order.
fn resolve_canonicalization_algorithm(chain: &[SigningConfiguration]) -> Option<String> {
    chain
        .iter()
        .filter_map(|layer| layer.canonicalization_algorithm.as_deref())
        .find_map(normalize_identifier)
}
