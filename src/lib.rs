#![deny(missing_docs)]

//! The design philosophy underlying `hashchain_csprng` is small, explicit and reproducible.
//! Each module isolates one step of the hash-chain construction so that the
//! byte-level and field-level halves can be reasoned about separately.
//! # hashchain_csprng
//!
//! **hashchain_csprng** is a deterministic, seeded generator of prime-field
//! scalars.  A [`Generator`] owns a 32-byte seed; every call to
//! [`generate`](SeededGenerator::generate) hashes the seed with SHA-256,
//! BLAKE2s or Keccak-256, installs the digest as the new seed and returns the
//! digest read as a big-endian integer modulo the field prime.  Given the same
//! seed and the same sequence of methods, the outputs are always identical.
//!
//! ## Features
//!
//! * **Field codec**: [`encode_digest`] maps a digest into any
//!   [`ark_ff::PrimeField`]; [`decode_to_digest`] is its lossy 64-bit inverse.
//! * **Hash capability interface**: [`HashBackend`] abstracts the three
//!   primitives, with [`StandardHashes`] built on the RustCrypto crates.
//! * **Seeded generator**: [`SeededGenerator`] with `generate`, `reseed` and
//!   batched draws.  [`HashMethod`] is a closed enum, so a call can never
//!   silently skip the state advance.
//! * **Replay plans**: [`GenerationPlan`] replays a JSON-described chain.
//!
//! ## Usage
//!
//! ```rust
//! use hashchain_csprng::{Generator, HashMethod};
//!
//! let mut a = Generator::new([11u8; 32]);
//! let mut b = Generator::new([11u8; 32]);
//! assert_eq!(a.generate(HashMethod::Sha256)?, b.generate(HashMethod::Sha256)?);
//!
//! // Reseeding restarts the chain from a known point.
//! a.reseed([2u8; 32]);
//! let mut fresh = Generator::new([2u8; 32]);
//! assert_eq!(a.generate(HashMethod::Blake2s)?, fresh.generate(HashMethod::Blake2s)?);
//! # Ok::<(), hashchain_csprng::CsprngError>(())
//! ```
//!
//! The generator is not thread-safe by construction: every transition takes
//! `&mut self`, and callers that share one across threads must serialize
//! access themselves.

mod error;
mod field;
mod hash;
mod plan;
mod prng;

pub use error::CsprngError;
pub use field::{decode_to_digest, encode_digest, modulus_bits, FieldElement};
pub use hash::{
    seed_from_hex, seed_to_hex, Digest, HashBackend, HashMethod, Seed, StandardHashes, SEED_LEN,
};
pub use plan::{GenerationPlan, PlanOutput, PlanStep};
pub use prng::{Generator, SeededGenerator, MAX_BATCH};
