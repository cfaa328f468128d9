//! The design philosophy underlying `hashchain_csprng` is small, explicit and reproducible.
//! Each module isolates one step of the hash-chain construction so that the
//! byte-level and field-level halves can be reasoned about separately.
//! Seeded hash-chain generator.
//!
//! The generator owns a single 32-byte seed.  Every call to
//! [`SeededGenerator::generate`] hashes the seed with the selected primitive,
//! installs the digest as the new seed and returns its field encoding.  The
//! previous seed is discarded, so the chain cannot be walked backwards from
//! the current state.  [`SeededGenerator::reseed`] restarts the chain from a
//! caller-supplied seed.
//!
//! The generator is a sequential state machine: it takes `&mut self` for
//! every transition and provides no internal synchronization.

use std::marker::PhantomData;

use ark_ff::PrimeField;
use tracing::{debug, trace};

use crate::error::CsprngError;
use crate::field::{encode_digest, FieldElement};
use crate::hash::{HashBackend, HashMethod, Seed, StandardHashes};

/// Largest number of outputs [`SeededGenerator::generate_many`] returns in one call.
pub const MAX_BATCH: usize = 1 << 20;

/// Generator over the BN254 scalar field using the RustCrypto primitives.
pub type Generator = SeededGenerator<FieldElement, StandardHashes>;

/// A deterministic generator of field elements driven by a hash chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededGenerator<F, H = StandardHashes> {
    seed: Seed,
    backend: H,
    _field: PhantomData<F>,
}

impl<F: PrimeField> SeededGenerator<F, StandardHashes> {
    /// Creates a generator seeded with `seed` using [`StandardHashes`].
    pub fn new(seed: Seed) -> Self {
        Self::with_backend(seed, StandardHashes)
    }
}

impl<F: PrimeField, H: HashBackend> SeededGenerator<F, H> {
    /// Creates a generator that hashes through `backend`.
    pub fn with_backend(seed: Seed, backend: H) -> Self {
        Self {
            seed,
            backend,
            _field: PhantomData,
        }
    }

    /// Returns the current seed.
    #[inline]
    pub fn seed(&self) -> &Seed {
        &self.seed
    }

    /// Returns the injected hash backend.
    #[inline]
    pub fn backend(&self) -> &H {
        &self.backend
    }

    /// Consumes the generator and returns its current seed.
    pub fn into_seed(self) -> Seed {
        self.seed
    }

    /// Advances the chain with `method` and returns the next field element.
    ///
    /// On success the seed is replaced by `H(seed)`.  If the backend fails,
    /// the error is returned and the seed is left untouched.
    pub fn generate(&mut self, method: HashMethod) -> Result<F, CsprngError> {
        let digest = self.backend.digest(method, &self.seed)?;
        self.seed = digest;
        trace!(%method, "advanced generator seed");
        Ok(encode_digest(&digest))
    }

    /// Advances the chain using a raw numeric selector.
    ///
    /// Selectors outside `0..=2` fail with
    /// [`CsprngError::InvalidHashMethod`] and leave the seed unchanged.
    pub fn generate_selector(&mut self, selector: u8) -> Result<F, CsprngError> {
        let method = HashMethod::try_from(selector)?;
        self.generate(method)
    }

    /// Advances the chain `count` times with the same method.
    ///
    /// Counts above [`MAX_BATCH`] fail with [`CsprngError::CountLimit`]
    /// before the seed is touched.  If a step fails, the seed reflects every
    /// step that succeeded before it.
    pub fn generate_many(
        &mut self,
        method: HashMethod,
        count: usize,
    ) -> Result<Vec<F>, CsprngError> {
        if count > MAX_BATCH {
            return Err(CsprngError::CountLimit {
                requested: count,
                limit: MAX_BATCH,
            });
        }
        let mut out = Vec::with_capacity(count);
        for _ in 0..count {
            out.push(self.generate(method)?);
        }
        Ok(out)
    }

    /// Replaces the seed with `new_seed`, discarding the accumulated chain.
    pub fn reseed(&mut self, new_seed: Seed) {
        self.seed = new_seed;
        debug!("generator reseeded");
    }
}
