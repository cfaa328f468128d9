//! Error type shared by the codec, the hash backends and the generator.

use thiserror::Error;

use crate::hash::HashMethod;

/// Failures surfaced by the generator and its helpers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CsprngError {
    #[error("invalid hash method selector {0} (expected 0=sha256, 1=blake2s, 2=keccak256)")]
    /// A raw selector did not name one of the supported primitives.
    InvalidHashMethod(u8),
    #[error("unknown hash method `{0}`")]
    /// A textual method name did not match any supported primitive.
    UnknownHashName(String),
    #[error("{method} primitive failed: {reason}")]
    /// A hash backend refused or failed to produce a digest.
    Primitive {
        /// Primitive that failed.
        method: HashMethod,
        /// Backend-supplied description of the failure.
        reason: String,
    },
    #[error("requested {requested} outputs in one batch, limit is {limit}")]
    /// A batched draw asked for more outputs than a single call may return.
    CountLimit {
        /// Number of outputs requested.
        requested: usize,
        /// Largest batch accepted.
        limit: usize,
    },
    #[error("seed must be 32 bytes, got {0}")]
    /// Decoded seed material had the wrong width.
    SeedLength(usize),
    #[error("seed decode error: {0}")]
    /// Seed material was not valid hexadecimal.
    SeedDecode(String),
    #[error("plan decode error: {0}")]
    /// A replay plan could not be parsed or serialized.
    PlanDecode(String),
}
