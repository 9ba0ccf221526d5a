//! # canopy-core — Foundational Types for the Canopy Record Vault
//!
//! This crate defines the primitives that make content addressing
//! trustworthy: canonical byte production and digest computation.
//! It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **`CanonicalBytes` newtype.** ALL digest computation flows through
//!    `CanonicalBytes::new()`. No raw `serde_json::to_vec()` for digests.
//!    Ever. Two structurally equal records always canonicalize to the same
//!    bytes, regardless of mapping key order.
//!
//! 2. **`sha256_digest()` accepts only `&CanonicalBytes`.** Compile-time
//!    enforcement that every digest in the system was computed over
//!    canonical bytes.
//!
//! 3. **Closed value domain.** Records are `serde_json::Value` — a closed
//!    tagged union (null, bool, number, string, array, object) matched
//!    exhaustively. Anything outside that domain fails with
//!    [`EncodingError`] before a digest is ever produced.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `canopy-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod canonical;
pub mod digest;
pub mod error;

// Re-export primary types for ergonomic imports.
pub use canonical::{CanonicalBytes, MAX_DEPTH};
pub use digest::{sha256_digest, sha256_hex, ContentDigest};
pub use error::EncodingError;
