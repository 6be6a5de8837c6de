//! Content hashing for run artifacts.
//!
//! Every digest is SHA-256 over a null-terminated domain prefix followed by
//! the artifact bytes, rendered as `"sha256:<hex>"`. Domains keep a report
//! digest from ever colliding with a policy digest over the same bytes.

use sha2::{Digest, Sha256};

/// A digest string of the form `"sha256:<hex>"`.
///
/// Only [`ContentHash::parse`] and [`canonical_hash`] construct one, so the
/// single `:` separator is always present with text on both sides.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    full: String,
    colon: usize,
}

impl ContentHash {
    /// Parse a stored digest string, such as the contents of a digest file.
    ///
    /// Returns `None` unless there is exactly one `:` with text on both sides.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let colon = s.find(':')?;
        if colon == 0 || colon == s.len() - 1 || s[colon + 1..].contains(':') {
            return None;
        }
        Some(Self {
            full: s.to_string(),
            colon,
        })
    }

    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.full[..self.colon]
    }

    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.full[self.colon + 1..]
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full)
    }
}

/// Domain separator for [`canonical_hash`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashDomain {
    /// Effective run policy snapshot.
    PolicySnapshot,
    /// Canonical run report.
    RunReport,
}

impl HashDomain {
    /// All domains in declaration order.
    pub const ALL: &'static [HashDomain] = &[Self::PolicySnapshot, Self::RunReport];

    /// The raw prefix bytes (null-terminated).
    #[must_use]
    pub const fn as_bytes(&self) -> &'static [u8] {
        match self {
            Self::PolicySnapshot => b"STRIDE::POLICY_SNAPSHOT::V1\0",
            Self::RunReport => b"STRIDE::RUN_REPORT::V1\0",
        }
    }
}

/// Hash `data` under `domain`.
#[must_use]
pub fn canonical_hash(domain: HashDomain, data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain.as_bytes());
    hasher.update(data);
    let full = format!("sha256:{}", hex::encode(hasher.finalize()));
    ContentHash { full, colon: 6 }
}
