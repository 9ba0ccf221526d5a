//! # Encoding Error Taxonomy
//!
//! The single failure mode of the canonicalization pipeline. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! Lookup misses are deliberately NOT an error: the store expresses absence
//! through its `Option` return contract, and only the boundary layer decides
//! how to surface it.

use thiserror::Error;

/// Error during canonical serialization of a record.
///
/// Surfaced to the caller as a request failure with an explanatory message,
/// never silently dropped. There are no other failure modes in the core:
/// digest computation and map insertion cannot partially fail.
#[derive(Error, Debug)]
pub enum EncodingError {
    /// Nesting exceeded the configured maximum depth. Guards against
    /// unbounded recursive input reaching the serializer.
    #[error("record nesting exceeds the maximum depth of {limit}")]
    DepthExceeded {
        /// The depth limit that was exceeded.
        limit: usize,
    },

    /// The input is outside the structured-value domain (e.g. a non-finite
    /// float or a map with non-string keys), or JCS serialization failed.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
