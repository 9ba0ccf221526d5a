//! # Canonical Serialization — JCS Byte Production
//!
//! This module defines `CanonicalBytes`, the sole construction path for
//! bytes used in digest computation.
//!
//! ## Security Invariant
//!
//! The `CanonicalBytes` newtype has a private inner field. The only way to
//! construct it is through `CanonicalBytes::new()`, which validates the
//! value against the structured-value domain (JSON representability,
//! bounded depth) before RFC 8785 serialization. Any function requiring canonical bytes
//! for digest computation must accept `&CanonicalBytes`, so no code path
//! can hash non-canonical bytes.
//!
//! ## Canonical Form
//!
//! Serialization uses `serde_jcs` for RFC 8785 (JSON Canonicalization
//! Scheme) compliant output: lexicographically sorted object keys, compact
//! separators, canonical string escaping, and a single canonical rendering
//! for every number. The encoding is injective over the JSON value domain —
//! no two distinct structures share a byte sequence. Array element order is
//! preserved; only mapping key order is normalized.

use serde::Serialize;
use serde_json::Value;

use crate::error::EncodingError;

/// Maximum nesting depth accepted by the canonicalizer.
///
/// Kept below serde_json's parser recursion limit (128) so an over-deep
/// but parseable payload is rejected here, as an [`EncodingError`], rather
/// than upstream as a transport parse failure.
pub const MAX_DEPTH: usize = 64;

/// Bytes produced exclusively by RFC 8785 canonicalization.
///
/// # Invariants
///
/// - The only constructor is `CanonicalBytes::new()`.
/// - Object keys are sorted lexicographically; array order is preserved.
/// - Nesting never exceeds [`MAX_DEPTH`].
/// - The bytes are valid UTF-8 and valid JSON.
///
/// These invariants are enforced by the constructor and cannot be violated
/// by downstream code because the inner `Vec<u8>` is private.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalBytes(Vec<u8>);

impl CanonicalBytes {
    /// Construct canonical bytes from any serializable value.
    ///
    /// This is the ONLY way to construct `CanonicalBytes`. All digest
    /// computation in the workspace must flow through this constructor.
    /// Pure function of its input; no side effects.
    ///
    /// # Errors
    ///
    /// Returns [`EncodingError::DepthExceeded`] if the value nests deeper
    /// than [`MAX_DEPTH`]. Returns [`EncodingError::Serialization`] if the
    /// value falls outside the JSON domain (e.g. a map with non-string
    /// keys) or JCS serialization fails.
    pub fn new(obj: &impl Serialize) -> Result<Self, EncodingError> {
        let value = serde_json::to_value(obj)?;
        check_depth(&value, 1)?;
        let s = serde_jcs::to_string(&value)?;
        Ok(Self(s.into_bytes()))
    }

    /// Access the canonical bytes for digest computation.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the length of the canonical byte sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the canonical byte sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for CanonicalBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Reject values nesting deeper than [`MAX_DEPTH`].
///
/// The root value counts as depth 1 and every container level adds one.
/// The limit is checked on entry, so this function recurses at most
/// `MAX_DEPTH` frames regardless of input.
fn check_depth(value: &Value, depth: usize) -> Result<(), EncodingError> {
    if depth > MAX_DEPTH {
        return Err(EncodingError::DepthExceeded { limit: MAX_DEPTH });
    }
    match value {
        Value::Array(items) => {
            for item in items {
                check_depth(item, depth + 1)?;
            }
        }
        Value::Object(map) => {
            for v in map.values() {
                check_depth(v, depth + 1)?;
            }
        }
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {}
    }
    Ok(())
}
