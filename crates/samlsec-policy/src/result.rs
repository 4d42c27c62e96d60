//! Decision types produced by an [`AlgorithmPredicate`](crate::AlgorithmPredicate).

use serde::{Deserialize, Serialize};

/// Machine-readable reason an identifier was refused.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "detail")]
pub enum DenialReason {
    /// A whitelist is in effect and the identifier is not on it.
    #[serde(rename = "NOT_WHITELISTED")]
    NotWhitelisted(String),

    /// The identifier is on the effective blacklist.
    #[serde(rename = "BLACKLISTED")]
    Blacklisted(String),

    /// Admitted by the lists but not usable here (unknown or unsupported).
    #[serde(rename = "UNSUPPORTED")]
    Unsupported(String),
}

impl DenialReason {
    /// Get a machine-readable string representation.
    pub fn to_code(&self) -> String {
        match self {
            DenialReason::NotWhitelisted(id) => format!("NOT_WHITELISTED:{}", id),
            DenialReason::Blacklisted(id) => format!("BLACKLISTED:{}", id),
            DenialReason::Unsupported(id) => format!("UNSUPPORTED:{}", id),
        }
    }
}

/// Outcome of testing one identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Decision {
    /// The identifier that was tested.
    pub identifier: String,

    /// Whether it is admitted.
    pub allowed: bool,

    /// Why it was refused (None when allowed).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<DenialReason>,
}

impl Decision {
    /// Create an allowed decision.
    pub fn allowed(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            allowed: true,
            reason: None,
        }
    }

    /// Create a denied decision.
    pub fn denied(identifier: impl Into<String>, reason: DenialReason) -> Self {
        Self {
            identifier: identifier.into(),
            allowed: false,
            reason: Some(reason),
        }
    }

    /// Reason code, or `ALLOWED`.
    pub fn to_code(&self) -> String {
        match &self.reason {
            Some(reason) => reason.to_code(),
            None => "ALLOWED".to_string(),
        }
    }
}
