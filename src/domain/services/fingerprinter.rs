//! Content Fingerprinter Domain Service

use crate::domain::value_objects::Fingerprint;

/// Computes the change-detection digest of a stylesheet
pub trait Fingerprinter {
    fn fingerprint(&self, content: &[u8]) -> Fingerprint;
}

/// SHA-256 fingerprinter
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Fingerprinter;

impl Sha256Fingerprinter {
    pub fn new() -> Self {
        Self
    }
}

impl Fingerprinter for Sha256Fingerprinter {
    fn fingerprint(&self, content: &[u8]) -> Fingerprint {
        Fingerprint::from_bytes(content)
    }
}
