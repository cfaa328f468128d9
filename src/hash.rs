//! Hash primitives that advance the generator state.
//!
//! The generator never hashes directly; it asks a [`HashBackend`] for a
//! 32-byte digest of the current seed.  [`StandardHashes`] wires the three
//! supported primitives to the RustCrypto implementations, while tests and
//! embedding environments may inject their own backend.

use std::fmt;
use std::str::FromStr;

use blake2::Blake2s256;
use serde::{Deserialize, Serialize};
use sha2::{Digest as _, Sha256};
use sha3::Keccak256;

use crate::error::CsprngError;

/// Width in bytes of every seed and digest handled by the crate.
pub const SEED_LEN: usize = 32;

/// Mutable generator state.
pub type Seed = [u8; SEED_LEN];

/// Output of a hash primitive; becomes the next seed.
pub type Digest = [u8; SEED_LEN];

/// Selector for the primitive used to advance the generator.
///
/// The discriminants match the numeric selectors used by callers that
/// pass a raw code (`0`, `1`, `2`).  Any other code is rejected by
/// [`HashMethod::try_from`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum HashMethod {
    /// SHA-256.
    Sha256 = 0,
    /// BLAKE2s with a 256-bit output.
    Blake2s = 1,
    /// Keccak-256 (pre-standard padding, as used by Ethereum).
    Keccak256 = 2,
}

impl HashMethod {
    /// Every supported method, ordered by selector.
    pub const ALL: [HashMethod; 3] = [
        HashMethod::Sha256,
        HashMethod::Blake2s,
        HashMethod::Keccak256,
    ];

    /// Returns the numeric selector of this method.
    #[inline]
    pub fn selector(self) -> u8 {
        self as u8
    }

    /// Returns the canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            HashMethod::Sha256 => "sha256",
            HashMethod::Blake2s => "blake2s",
            HashMethod::Keccak256 => "keccak256",
        }
    }
}

impl TryFrom<u8> for HashMethod {
    type Error = CsprngError;

    fn try_from(selector: u8) -> Result<Self, Self::Error> {
        match selector {
            0 => Ok(HashMethod::Sha256),
            1 => Ok(HashMethod::Blake2s),
            2 => Ok(HashMethod::Keccak256),
            other => Err(CsprngError::InvalidHashMethod(other)),
        }
    }
}

impl fmt::Display for HashMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for HashMethod {
    type Err = CsprngError;

    /// Accepts the canonical names (case-insensitive, `-` ignored) or a
    /// numeric selector written as plain decimal digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return match trimmed.parse::<u8>() {
                Ok(selector) => HashMethod::try_from(selector),
                Err(_) => Err(CsprngError::UnknownHashName(s.to_string())),
            };
        }
        match trimmed.to_ascii_lowercase().replace('-', "").as_str() {
            "sha256" => Ok(HashMethod::Sha256),
            "blake2s" => Ok(HashMethod::Blake2s),
            "keccak256" | "keccak" => Ok(HashMethod::Keccak256),
            _ => Err(CsprngError::UnknownHashName(s.to_string())),
        }
    }
}

/// Capability interface over the three hash primitives.
///
/// `len` is the declared message length: the number of leading bytes of
/// `input` the primitive absorbs.  The generator always declares
/// [`SEED_LEN`].
pub trait HashBackend {
    /// SHA-256 over the first `len` bytes of `input`.
    fn sha256(&self, input: &[u8], len: usize) -> Result<Digest, CsprngError>;

    /// BLAKE2s-256 over a full 32-byte block.
    fn blake2s(&self, input: &Seed) -> Result<Digest, CsprngError>;

    /// Keccak-256 over the first `len` bytes of `input`.
    fn keccak256(&self, input: &[u8], len: usize) -> Result<Digest, CsprngError>;

    /// Dispatches `seed` to the primitive selected by `method`.
    fn digest(&self, method: HashMethod, seed: &Seed) -> Result<Digest, CsprngError> {
        match method {
            HashMethod::Sha256 => self.sha256(seed, SEED_LEN),
            HashMethod::Blake2s => self.blake2s(seed),
            HashMethod::Keccak256 => self.keccak256(seed, SEED_LEN),
        }
    }
}

/// Backend built on the `sha2`, `blake2` and `sha3` crates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardHashes;

fn message(method: HashMethod, input: &[u8], len: usize) -> Result<&[u8], CsprngError> {
    input.get(..len).ok_or_else(|| CsprngError::Primitive {
        method,
        reason: format!("declared length {len} exceeds input of {} bytes", input.len()),
    })
}

impl HashBackend for StandardHashes {
    fn sha256(&self, input: &[u8], len: usize) -> Result<Digest, CsprngError> {
        let msg = message(HashMethod::Sha256, input, len)?;
        Ok(Sha256::digest(msg).into())
    }

    fn blake2s(&self, input: &Seed) -> Result<Digest, CsprngError> {
        Ok(Blake2s256::digest(input).into())
    }

    fn keccak256(&self, input: &[u8], len: usize) -> Result<Digest, CsprngError> {
        let msg = message(HashMethod::Keccak256, input, len)?;
        Ok(Keccak256::digest(msg).into())
    }
}

/// Parses a 32-byte seed from hex, with or without a `0x` prefix.
pub fn seed_from_hex(text: &str) -> Result<Seed, CsprngError> {
    let trimmed = text.trim();
    let body = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let bytes = hex::decode(body).map_err(|e| CsprngError::SeedDecode(e.to_string()))?;
    Seed::try_from(bytes.as_slice()).map_err(|_| CsprngError::SeedLength(bytes.len()))
}

/// Renders a seed or digest as lowercase hex without a prefix.
pub fn seed_to_hex(seed: &Seed) -> String {
    hex::encode(seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sha2::Digest as _;

    const SHA256_ZERO32: &str = "66687aadf862bd776c8fc18b8e9f8e20089714856ee233b3902a591d0d5f2925";
    const BLAKE2S_ZERO32: &str = "320b5ea99e653bc2b593db4130d10a4efd3a0b4cc2e1a6672b678d71dfbd33ad";
    const KECCAK256_ZERO32: &str =
        "290decd9548b62a8d60345a988386fc84ba6bc95484008f6362f93160ef3e563";

    #[test]
    fn test_selector_round_trip() {
        for method in HashMethod::ALL {
            assert_eq!(HashMethod::try_from(method.selector()).unwrap(), method);
        }
        assert_eq!(HashMethod::Sha256.selector(), 0);
        assert_eq!(HashMethod::Blake2s.selector(), 1);
        assert_eq!(HashMethod::Keccak256.selector(), 2);
    }

    #[test]
    fn test_invalid_selector_rejected() {
        assert_eq!(
            HashMethod::try_from(3u8),
            Err(CsprngError::InvalidHashMethod(3))
        );
        assert_eq!(
            HashMethod::try_from(u8::MAX),
            Err(CsprngError::InvalidHashMethod(u8::MAX))
        );
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("sha256".parse::<HashMethod>().unwrap(), HashMethod::Sha256);
        assert_eq!("SHA-256".parse::<HashMethod>().unwrap(), HashMethod::Sha256);
        assert_eq!("Blake2s".parse::<HashMethod>().unwrap(), HashMethod::Blake2s);
        assert_eq!("keccak".parse::<HashMethod>().unwrap(), HashMethod::Keccak256);
        assert_eq!("2".parse::<HashMethod>().unwrap(), HashMethod::Keccak256);
        assert_eq!(
            "7".parse::<HashMethod>(),
            Err(CsprngError::InvalidHashMethod(7))
        );
        assert_eq!(
            "md5".parse::<HashMethod>(),
            Err(CsprngError::UnknownHashName("md5".into()))
        );
    }

    #[test]
    fn test_signed_or_split_selectors_rejected() {
        for text in ["-1", "+1", "0-2", "-0", "1-"] {
            assert_eq!(
                text.parse::<HashMethod>(),
                Err(CsprngError::UnknownHashName(text.into())),
                "{text} must not parse"
            );
        }
        assert_eq!(
            "300".parse::<HashMethod>(),
            Err(CsprngError::UnknownHashName("300".into()))
        );
        assert_eq!(" 1 ".parse::<HashMethod>().unwrap(), HashMethod::Blake2s);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&HashMethod::Keccak256).unwrap();
        assert_eq!(json, "\"keccak256\"");
        let back: HashMethod = serde_json::from_str("\"blake2s\"").unwrap();
        assert_eq!(back, HashMethod::Blake2s);
    }

    #[test]
    fn test_known_answers() {
        let zero = [0u8; SEED_LEN];
        let backend = StandardHashes;
        assert_eq!(
            seed_to_hex(&backend.digest(HashMethod::Sha256, &zero).unwrap()),
            SHA256_ZERO32
        );
        assert_eq!(
            seed_to_hex(&backend.digest(HashMethod::Keccak256, &zero).unwrap()),
            KECCAK256_ZERO32
        );
        assert_eq!(
            seed_to_hex(&backend.digest(HashMethod::Blake2s, &zero).unwrap()),
            BLAKE2S_ZERO32
        );
    }

    #[test]
    fn test_declared_length_is_checked() {
        let backend = StandardHashes;
        let input = [7u8; 16];
        let err = backend.sha256(&input, SEED_LEN).unwrap_err();
        assert!(matches!(
            err,
            CsprngError::Primitive {
                method: HashMethod::Sha256,
                ..
            }
        ));
        assert!(backend.keccak256(&input, SEED_LEN).is_err());
        let short: Digest = Sha256::digest(&input[..8]).into();
        assert_eq!(backend.sha256(&input, 8).unwrap(), short);
    }

    #[test]
    fn test_seed_hex() {
        let seed = [0xabu8; SEED_LEN];
        let text = seed_to_hex(&seed);
        assert_eq!(seed_from_hex(&text).unwrap(), seed);
        assert_eq!(seed_from_hex(&format!("0x{text}")).unwrap(), seed);
        assert_eq!(seed_from_hex("abcd"), Err(CsprngError::SeedLength(2)));
        assert!(matches!(
            seed_from_hex("zz"),
            Err(CsprngError::SeedDecode(_))
        ));
    }
}
