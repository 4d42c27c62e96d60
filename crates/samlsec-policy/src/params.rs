//! Resolved whitelist/blacklist parameters.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::config::Precedence;
use crate::predicate::AlgorithmPredicate;

/// Output slot for [`resolve_and_populate`](crate::resolve_and_populate).
///
/// Higher-level parameter sets (signing, validation) embed one of these and let
/// the resolver fill it in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhitelistBlacklistParameters {
    /// Effective whitelist (empty means no whitelist filtering).
    #[serde(default)]
    pub whitelist: BTreeSet<String>,

    /// Effective blacklist (empty means no blacklist filtering).
    #[serde(default)]
    pub blacklist: BTreeSet<String>,

    /// Effective precedence.
    #[serde(default)]
    pub precedence: Precedence,
}

impl WhitelistBlacklistParameters {
    /// Rebuild the admission predicate these parameters describe.
    pub fn predicate(&self) -> AlgorithmPredicate {
        AlgorithmPredicate::from_lists(&self.whitelist, &self.blacklist, self.precedence)
    }

    /// True when neither list restricts anything.
    pub fn is_unrestricted(&self) -> bool {
        self.whitelist.is_empty() && self.blacklist.is_empty()
    }
}
