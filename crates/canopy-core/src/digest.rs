//! # Content Digest — Content-Addressed Identifiers
//!
//! Defines `ContentDigest`, the identifier a stored record is addressed by.
//!
//! ## Security Invariant
//!
//! `ContentDigest` can only be computed from `CanonicalBytes`, ensuring
//! that every digest in the system was produced through the canonicalization
//! pipeline. This is enforced by the signature of [`sha256_digest()`].

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::canonical::CanonicalBytes;

/// A SHA-256 content digest.
///
/// Produced exclusively from `CanonicalBytes` via [`sha256_digest()`].
/// Two deeply equal records always carry the same digest; records that
/// differ in any leaf or in structure differ in digest barring a hash
/// collision, which is treated as cryptographically negligible.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentDigest([u8; 32]);

impl ContentDigest {
    /// Access the raw 32-byte digest value.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Render the digest as a lowercase hex string (64 characters).
    ///
    /// This is the identifier handed to clients and used as the store key.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl std::fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Compute a SHA-256 content digest from canonical bytes.
///
/// The signature accepts only `&CanonicalBytes`, not raw `&[u8]`. This
/// compile-time constraint prevents any code path from computing a digest
/// over non-canonical bytes.
pub fn sha256_digest(data: &CanonicalBytes) -> ContentDigest {
    let hash = Sha256::digest(data.as_bytes());
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&hash);
    ContentDigest(bytes)
}

/// Compute a SHA-256 hex string from canonical bytes.
///
/// Convenience wrapper around [`sha256_digest()`] for contexts that need
/// the digest directly in its store-key form.
pub fn sha256_hex(data: &CanonicalBytes) -> String {
    sha256_digest(data).to_hex()
}
