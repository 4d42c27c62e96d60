//! samlsec - Security parameter resolution for SAML/XML-Security
//!
//! This crate layers configuration loading, an algorithm registry and the
//! signing/validation parameters resolvers on top of the whitelist/blacklist
//! chain resolution in `samlsec-policy`.

pub mod config;
pub mod credential;
pub mod params;
pub mod registry;

pub use config::{BuiltinDefaults, ConfigError, EffectiveChain, SigningConfiguration};
pub use credential::{Credential, KeyFamily};
pub use params::{
    SignatureSigningParameters, SignatureSigningParametersResolver, SignatureValidationParameters,
    SignatureValidationParametersResolver,
};
pub use registry::{AlgorithmDescriptor, AlgorithmKind, AlgorithmRegistry, AlgorithmStatus};
pub use samlsec_policy::{
    normalize_identifiers, resolve_and_populate, resolve_effective_blacklist,
    resolve_effective_whitelist, resolve_precedence, resolve_predicate, AlgorithmPredicate,
    ChainResolver, ConfigurationCriterion, CriteriaSet, Decision, DenialReason, Precedence,
    ResolveError, SecurityConfiguration, WhitelistBlacklistParameters,
};
