//! Signature validation parameters
//!
//! Inbound signatures are checked against the chain's whitelist/blacklist and
//! against what the registry can execute.

use samlsec_policy::{
    resolve_and_populate, AlgorithmPredicate, CriteriaSet, Decision, DenialReason, ResolveError,
    SecurityConfiguration, WhitelistBlacklistParameters,
};
use serde::{Deserialize, Serialize};

use crate::registry::{AlgorithmKind, AlgorithmRegistry};

/// Policy applied to the algorithms declared by an inbound signature.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureValidationParameters {
    /// Effective whitelist/blacklist
    pub policy: WhitelistBlacklistParameters,
}

impl SignatureValidationParameters {
    /// The admission predicate of these parameters.
    pub fn predicate(&self) -> AlgorithmPredicate {
        self.policy.predicate()
    }
}

/// Resolves [`SignatureValidationParameters`] and vets declared algorithms.
#[derive(Debug, Clone, Copy)]
pub struct SignatureValidationParametersResolver<'a> {
    registry: &'a AlgorithmRegistry,
}

impl<'a> SignatureValidationParametersResolver<'a> {
    /// Create a resolver over the given registry.
    pub fn new(registry: &'a AlgorithmRegistry) -> Self {
        Self { registry }
    }

    /// Resolve validation parameters for the criteria.
    pub fn resolve<C>(
        &self,
        criteria: &CriteriaSet<C>,
    ) -> Result<SignatureValidationParameters, ResolveError>
    where
        C: AsRef<SecurityConfiguration>,
    {
        let chain = criteria.require_configurations()?;
        let mut params = SignatureValidationParameters::default();
        resolve_and_populate(&mut params.policy, chain);
        Ok(params)
    }

    /// Decide whether an algorithm declared by a signature may be accepted.
    ///
    /// The whitelist/blacklist is consulted first; an admitted algorithm is
    /// still refused if the registry does not know it or cannot run it.
    pub fn validate_algorithm(&self, params: &SignatureValidationParameters, uri: &str) -> Decision {
        let decision = params.predicate().decide(uri);
        if !decision.allowed {
            return decision;
        }

        let kinds = [
            AlgorithmKind::Signature,
            AlgorithmKind::Mac,
            AlgorithmKind::Digest,
        ];
        if !self.registry.is_supported_as(uri, &kinds) {
            tracing::debug!(algorithm = %uri, "algorithm admitted by policy but not supported");
            return Decision::denied(uri, DenialReason::Unsupported(uri.to_string()));
        }

        decision
    }
}
