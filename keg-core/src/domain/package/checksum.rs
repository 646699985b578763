// keg-core/src/domain/package/checksum.rs

use crate::domain::error::DomainError;
use crate::domain::package::field;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

/// Length of a hex-encoded 256-bit digest.
pub const SHA256_HEX_LEN: usize = 64;

fn re_hex_digest() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[0-9a-fA-F]{64}$")
            .unwrap_or_else(|_| Regex::new("$^").unwrap_or_else(|_| unreachable!()))
    })
}

/// A SHA-256 digest as declared by a manifest, normalized to lowercase hex.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Checksum(String);

impl Checksum {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let found = raw.chars().count();
        if found != SHA256_HEX_LEN {
            return Err(DomainError::MalformedChecksum {
                field: field::CHECKSUM.to_string(),
                reason: format!("expected {SHA256_HEX_LEN} hex characters, found {found}"),
            });
        }
        if !re_hex_digest().is_match(raw) {
            return Err(DomainError::MalformedChecksum {
                field: field::CHECKSUM.to_string(),
                reason: "contains non-hexadecimal characters".to_string(),
            });
        }
        Ok(Self(raw.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against a hex digest.
    pub fn matches(&self, digest_hex: &str) -> bool {
        self.0.eq_ignore_ascii_case(digest_hex.trim())
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
