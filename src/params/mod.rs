//! Security parameters resolvers
//!
//! Higher-level resolvers layered on the whitelist/blacklist chain resolution:
//! the chain's predicate is their admission filter, the injected algorithm
//! registry decides what can actually run.

mod signing;
mod validation;

pub use signing::{SignatureSigningParameters, SignatureSigningParametersResolver};
pub use validation::{SignatureValidationParameters, SignatureValidationParametersResolver};
