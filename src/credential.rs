//! Signing credential descriptors.
//!
//! A credential here is only what algorithm selection needs to know: a name
//! for logs, the family of its key and, when known, its size. Key material
//! lives with whatever performs the actual signing.

use serde::{Deserialize, Serialize};

/// Family of the key held by a credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyFamily {
    /// RSA key pair.
    Rsa,
    /// Elliptic-curve key pair.
    Ec,
    /// DSA key pair.
    Dsa,
    /// Shared secret for HMAC.
    Hmac,
    /// AES secret key.
    Aes,
}

impl KeyFamily {
    /// Short stable name.
    pub fn name(&self) -> &'static str {
        match self {
            KeyFamily::Rsa => "rsa",
            KeyFamily::Ec => "ec",
            KeyFamily::Dsa => "dsa",
            KeyFamily::Hmac => "hmac",
            KeyFamily::Aes => "aes",
        }
    }
}

/// A candidate signing credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// Credential name (e.g. the entity ID or key alias).
    pub name: String,

    /// Key family.
    pub key_family: KeyFamily,

    /// Key length in bits, if known. Checked against the algorithm's minimum.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_length: Option<u32>,
}

impl Credential {
    /// Create a credential descriptor.
    pub fn new(name: impl Into<String>, key_family: KeyFamily) -> Self {
        Self {
            name: name.into(),
            key_family,
            key_length: None,
        }
    }

    /// Set the key length.
    pub fn with_key_length(mut self, bits: u32) -> Self {
        self.key_length = Some(bits);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_toml() {
        let credential: Credential = toml::from_str(
            r#"
            name = "idp-signing"
            key_family = "rsa"
            key_length = 2048
            "#,
        )
        .unwrap();
        assert_eq!(credential.key_family, KeyFamily::Rsa);
        assert_eq!(credential.key_length, Some(2048));
    }

    #[test]
    fn test_builder() {
        let credential = Credential::new("sp", KeyFamily::Ec).with_key_length(384);
        assert_eq!(credential.name, "sp");
        assert_eq!(credential.key_length, Some(384));
        assert_eq!(credential.key_family.name(), "ec");
    }
}
