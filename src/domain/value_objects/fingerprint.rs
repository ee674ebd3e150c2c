//! Fingerprint Value Object
//!
//! A content digest used for change detection between a stylesheet and the
//! declaration file generated from it.

use std::fmt;

/// Content fingerprint value object
///
/// Wraps a lowercase hexadecimal SHA-256 digest. Identical content always
/// produces an identical fingerprint; there is no salt and no timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Prefix of the marker embedded in generated files
    pub const MARKER_PREFIX: &'static str = "hash:";

    /// Length of the hex digest
    pub const HEX_LEN: usize = 64;

    /// Compute the fingerprint of raw content
    pub fn from_bytes(content: &[u8]) -> Self {
        use sha2::{Digest, Sha256};
        let hash = Sha256::digest(content);
        Self(format!("{:x}", hash))
    }

    /// Compute the fingerprint of text content
    pub fn from_content(content: &str) -> Self {
        Self::from_bytes(content.as_bytes())
    }

    /// Wrap an already computed hex digest
    pub fn from_hex(hex: &str) -> Self {
        Self(hex.to_ascii_lowercase())
    }

    /// Hex digest
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Marker string as it appears in a generated file (`hash:<hex>`)
    pub fn marker(&self) -> String {
        format!("{}{}", Self::MARKER_PREFIX, self.0)
    }

    /// Check whether `text` carries this fingerprint's marker
    pub fn is_marked_in(&self, text: &str) -> bool {
        text.contains(&self.marker())
    }

    /// Recover the first marker digest embedded in `text`, if any
    pub fn find_in(text: &str) -> Option<Self> {
        let start = text.find(Self::MARKER_PREFIX)? + Self::MARKER_PREFIX.len();
        let hex: String = text[start..]
            .chars()
            .take_while(|c| c.is_ascii_hexdigit())
            .collect();
        if hex.is_empty() {
            None
        } else {
            Some(Self::from_hex(&hex))
        }
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Fingerprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
