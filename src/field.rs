//! The design philosophy underlying `hashchain_csprng` is small, explicit and reproducible.
//! Each module isolates one step of the hash-chain construction so that the
//! byte-level and field-level halves can be reasoned about separately.
//! Digest-to-field canonicalization.
//!
//! A 32-byte digest is read as a big-endian integer and reduced into a prime
//! field.  The reduction happens implicitly through field arithmetic: the
//! digest is accumulated by Horner's rule in base 256, so every partial sum
//! already lives in `[0, p)`.  When `p < 2^256` the mapping is slightly
//! biased towards small residues; the encoding is kept exact rather than
//! resampled so that downstream consumers see the canonical value.

use ark_ff::{BigInteger, PrimeField, Zero};

use crate::hash::{Digest, SEED_LEN};

/// Default field for generator outputs: the BN254 scalar field.
pub type FieldElement = ark_bn254::Fr;

const RADIX: u64 = 256;

/// Encodes a digest as a field element.
///
/// `digest[0]` carries weight `256^31` and `digest[31]` weight `1`.  The
/// all-zero digest maps to the additive identity.
///
/// # Examples
///
/// ```
/// use hashchain_csprng::{encode_digest, FieldElement};
///
/// let mut digest = [0u8; 32];
/// digest[30] = 1;
/// digest[31] = 2;
/// assert_eq!(encode_digest::<FieldElement>(&digest), FieldElement::from(258u64));
/// ```
pub fn encode_digest<F: PrimeField>(digest: &Digest) -> F {
    let radix = F::from(RADIX);
    digest
        .iter()
        .fold(F::zero(), |acc, &byte| acc * radix + F::from(byte))
}

/// Expands a field element back into a 32-byte buffer.
///
/// This is lossy: only the low 64 bits of the canonical representative are
/// kept, written big-endian into the last eight bytes.  The first 24 bytes
/// are always zero.  `encode_digest(&decode_to_digest(&x)) == x` holds only
/// for `x < 2^64`.
pub fn decode_to_digest<F: PrimeField>(value: &F) -> Digest {
    let low = value.into_bigint().as_ref().first().copied().unwrap_or(0);
    let mut out = [0u8; SEED_LEN];
    out[SEED_LEN - 8..].copy_from_slice(&low.to_be_bytes());
    out
}

/// Returns the number of bits of the field modulus.
///
/// Digests wider than this are reduced; callers can compare it against
/// `8 * SEED_LEN` to judge the encoding bias.
pub fn modulus_bits<F: PrimeField>() -> u32 {
    F::MODULUS.num_bits()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bn254::Fq;
    use ark_ff::{Field, One};

    #[test]
    fn test_zero_digest_is_zero() {
        let zero: FieldElement = encode_digest(&[0u8; SEED_LEN]);
        assert!(zero.is_zero());
    }

    #[test]
    fn test_byte_weights_are_big_endian() {
        let mut digest = [0u8; SEED_LEN];
        digest[SEED_LEN - 1] = 1;
        assert_eq!(encode_digest::<FieldElement>(&digest), FieldElement::one());

        let mut digest = [0u8; SEED_LEN];
        digest[0] = 1;
        let expected = FieldElement::from(256u64).pow([31u64]);
        assert_eq!(encode_digest::<FieldElement>(&digest), expected);
    }

    #[test]
    fn test_matches_ark_reduction() {
        let mut digest = [0u8; SEED_LEN];
        for (i, byte) in digest.iter_mut().enumerate() {
            *byte = (i as u8).wrapping_mul(37).wrapping_add(11);
        }
        assert_eq!(
            encode_digest::<FieldElement>(&digest),
            FieldElement::from_be_bytes_mod_order(&digest)
        );
        assert_eq!(
            encode_digest::<Fq>(&digest),
            Fq::from_be_bytes_mod_order(&digest)
        );
    }

    #[test]
    fn test_all_ones_reduces_mod_p() {
        let digest = [0xffu8; SEED_LEN];
        let expected = FieldElement::from(2u64).pow([256u64]) - FieldElement::one();
        assert_eq!(encode_digest::<FieldElement>(&digest), expected);
        assert!(modulus_bits::<FieldElement>() < 8 * SEED_LEN as u32);
    }

    #[test]
    fn test_decode_small_values() {
        let value = FieldElement::from(0x0102_0304_0506_0708u64);
        let digest = decode_to_digest(&value);
        assert_eq!(&digest[..24], &[0u8; 24]);
        assert_eq!(&digest[24..], &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(encode_digest::<FieldElement>(&digest), value);
    }

    #[test]
    fn test_decode_truncates_to_low_word() {
        let mut digest = [0u8; SEED_LEN];
        digest[0] = 0x0a;
        digest[31] = 0x05;
        let value: FieldElement = encode_digest(&digest);
        let narrowed = decode_to_digest(&value);
        assert_eq!(narrowed[31], 0x05);
        assert_eq!(&narrowed[..31], &[0u8; 31]);
        assert_ne!(encode_digest::<FieldElement>(&narrowed), value);
    }
}
