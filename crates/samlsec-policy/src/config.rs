//! Security configuration types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::normalize::normalize_identifiers;

/// Which list decides an identifier when both lists are in effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precedence {
    /// Only the whitelist is consulted.
    #[default]
    Whitelist,
    /// Only the blacklist is consulted.
    Blacklist,
}

impl Precedence {
    /// Short stable name for logs and CLI output.
    pub fn name(&self) -> &'static str {
        match self {
            Precedence::Whitelist => "whitelist",
            Precedence::Blacklist => "blacklist",
        }
    }
}

/// One element of a configuration chain.
///
/// Lists are normalized on the way in (see
/// [`normalize_identifiers`](crate::normalize_identifiers)) and only handed
/// out as shared borrows, so resolution never observes a half-edited list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawSecurityConfiguration")]
pub struct SecurityConfiguration {
    whitelist: BTreeSet<String>,
    whitelist_merge: bool,
    blacklist: BTreeSet<String>,
    blacklist_merge: bool,
    precedence: Precedence,
}

/// Wire form of [`SecurityConfiguration`], normalized on conversion.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSecurityConfiguration {
    whitelist: Vec<String>,
    whitelist_merge: bool,
    blacklist: Vec<String>,
    blacklist_merge: bool,
    precedence: Precedence,
}

impl From<RawSecurityConfiguration> for SecurityConfiguration {
    fn from(raw: RawSecurityConfiguration) -> Self {
        Self {
            whitelist: normalize_identifiers(raw.whitelist),
            whitelist_merge: raw.whitelist_merge,
            blacklist: normalize_identifiers(raw.blacklist),
            blacklist_merge: raw.blacklist_merge,
            precedence: raw.precedence,
        }
    }
}

impl AsRef<SecurityConfiguration> for SecurityConfiguration {
    fn as_ref(&self) -> &SecurityConfiguration {
        self
    }
}

impl SecurityConfiguration {
    /// Create an empty configuration: no lists, no merging, whitelist precedence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whitelisted algorithm identifiers.
    pub fn whitelist(&self) -> &BTreeSet<String> {
        &self.whitelist
    }

    /// Replace the whitelist. Identifiers are normalized.
    pub fn set_whitelist<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.whitelist = normalize_identifiers(ids);
    }

    /// Builder form of [`set_whitelist`](Self::set_whitelist).
    pub fn with_whitelist<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.set_whitelist(ids);
        self
    }

    /// Whether lower-priority whitelists are merged into this one.
    pub fn is_whitelist_merge(&self) -> bool {
        self.whitelist_merge
    }

    /// Set the whitelist merge flag.
    pub fn set_whitelist_merge(&mut self, merge: bool) {
        self.whitelist_merge = merge;
    }

    /// Builder form of [`set_whitelist_merge`](Self::set_whitelist_merge).
    pub fn with_whitelist_merge(mut self, merge: bool) -> Self {
        self.whitelist_merge = merge;
        self
    }

    /// Blacklisted algorithm identifiers.
    pub fn blacklist(&self) -> &BTreeSet<String> {
        &self.blacklist
    }

    /// Replace the blacklist. Identifiers are normalized.
    pub fn set_blacklist<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.blacklist = normalize_identifiers(ids);
    }

    /// Builder form of [`set_blacklist`](Self::set_blacklist).
    pub fn with_blacklist<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.set_blacklist(ids);
        self
    }

    /// Whether lower-priority blacklists are merged into this one.
    pub fn is_blacklist_merge(&self) -> bool {
        self.blacklist_merge
    }

    /// Set the blacklist merge flag.
    pub fn set_blacklist_merge(&mut self, merge: bool) {
        self.blacklist_merge = merge;
    }

    /// Builder form of [`set_blacklist_merge`](Self::set_blacklist_merge).
    pub fn with_blacklist_merge(mut self, merge: bool) -> Self {
        self.blacklist_merge = merge;
        self
    }

    /// Precedence used when both effective lists are non-empty.
    pub fn precedence(&self) -> Precedence {
        self.precedence
    }

    /// Set the precedence.
    pub fn set_precedence(&mut self, precedence: Precedence) {
        self.precedence = precedence;
    }

    /// Builder form of [`set_precedence`](Self::set_precedence).
    pub fn with_precedence(mut self, precedence: Precedence) -> Self {
        self.precedence = precedence;
        self
    }
}
