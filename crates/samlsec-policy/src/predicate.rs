//! Algorithm admission predicate.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::config::Precedence;
use crate::result::{Decision, DenialReason};

/// Pure admission test over a resolved whitelist/blacklist pair.
///
/// At most one list is consulted: which one is fixed when the predicate is
/// built from the effective lists and precedence. The captured set is an
/// immutable `Arc` snapshot, so clones are cheap and the predicate can be
/// shared across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlgorithmPredicate {
    /// Both effective lists were empty; everything is admitted.
    Unrestricted,
    /// Admit only identifiers on the list.
    Whitelist(Arc<BTreeSet<String>>),
    /// Admit everything not on the list.
    Blacklist(Arc<BTreeSet<String>>),
}

impl Default for AlgorithmPredicate {
    fn default() -> Self {
        Self::Unrestricted
    }
}

impl AlgorithmPredicate {
    /// Build the predicate for an effective whitelist, blacklist and precedence.
    ///
    /// | whitelist | blacklist | result                   |
    /// |-----------|-----------|--------------------------|
    /// | empty     | empty     | `Unrestricted`           |
    /// | non-empty | empty     | `Whitelist`              |
    /// | empty     | non-empty | `Blacklist`              |
    /// | non-empty | non-empty | chosen by `precedence`   |
    pub fn from_lists(
        whitelist: &BTreeSet<String>,
        blacklist: &BTreeSet<String>,
        precedence: Precedence,
    ) -> Self {
        match (whitelist.is_empty(), blacklist.is_empty()) {
            (true, true) => Self::Unrestricted,
            (false, true) => Self::Whitelist(Arc::new(whitelist.clone())),
            (true, false) => Self::Blacklist(Arc::new(blacklist.clone())),
            (false, false) => match precedence {
                Precedence::Whitelist => Self::Whitelist(Arc::new(whitelist.clone())),
                Precedence::Blacklist => Self::Blacklist(Arc::new(blacklist.clone())),
            },
        }
    }

    /// Test an identifier.
    pub fn is_allowed(&self, id: &str) -> bool {
        match self {
            Self::Unrestricted => true,
            Self::Whitelist(list) => list.contains(id),
            Self::Blacklist(list) => !list.contains(id),
        }
    }

    /// Test an identifier and report why it was refused.
    pub fn decide(&self, id: &str) -> Decision {
        match self {
            Self::Whitelist(list) if !list.contains(id) => {
                Decision::denied(id, DenialReason::NotWhitelisted(id.to_string()))
            }
            Self::Blacklist(list) if list.contains(id) => {
                Decision::denied(id, DenialReason::Blacklisted(id.to_string()))
            }
            _ => Decision::allowed(id),
        }
    }

    /// Keep only the admitted identifiers, preserving input order.
    pub fn filter<'a, I>(&self, ids: I) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        ids.into_iter().filter(|id| self.is_allowed(id)).collect()
    }

    /// Turn the predicate into a plain closure.
    pub fn into_fn(self) -> impl Fn(&str) -> bool + Send + Sync + 'static {
        move |id| self.is_allowed(id)
    }

    /// Short stable name of the active mode.
    pub fn mode(&self) -> &'static str {
        match self {
            Self::Unrestricted => "unrestricted",
            Self::Whitelist(_) => "whitelist",
            Self::Blacklist(_) => "blacklist",
        }
    }
}
