//! Symmetric key and nonce types for the AEAD engine.

use crate::error::{CryptoError, CryptoResult};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Size of a symmetric key in bytes (AES-256).
pub const KEY_SIZE: usize = 32;

/// Size of an AES-GCM nonce in bytes.
pub const NONCE_SIZE: usize = 12;

/// A 256-bit symmetric key.
///
/// Zeroized on drop. There is no way to build one with a length other than
/// [`KEY_SIZE`]; [`SymmetricKey::from_slice`] rejects anything else.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SymmetricKey([u8; KEY_SIZE]);

impl SymmetricKey {
    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self(bytes)
    }

    /// Builds a key from a byte slice of exactly [`KEY_SIZE`] bytes.
    pub fn from_slice(bytes: &[u8]) -> CryptoResult<Self> {
        let array: [u8; KEY_SIZE] =
            bytes.try_into().map_err(|_| CryptoError::InvalidKeyLength {
                expected: KEY_SIZE,
                actual: bytes.len(),
            })?;
        Ok(Self(array))
    }

    /// Parses a key from 64 hex characters.
    pub fn from_hex(encoded: &str) -> CryptoResult<Self> {
        let bytes = Zeroizing::new(
            hex::decode(encoded.trim())
                .map_err(|e| CryptoError::InvalidKey(format!("invalid key hex: {e}")))?,
        );
        Self::from_slice(&bytes)
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }

    /// Generates a key from the operating system RNG.
    pub fn random() -> Self {
        generate_key(&mut OsRng)
    }
}

impl fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SymmetricKey([REDACTED])")
    }
}

/// Generates a random symmetric key from the given source.
pub fn generate_key<R: RngCore + CryptoRng>(rng: &mut R) -> SymmetricKey {
    let mut bytes = [0u8; KEY_SIZE];
    rng.fill_bytes(&mut bytes);
    let key = SymmetricKey(bytes);
    bytes.zeroize();
    key
}

/// A 96-bit AES-GCM nonce.
///
/// Must never repeat under the same key. Use [`Nonce::generate`] for every
/// encryption; [`Nonce::from_slice`] exists for reading one back off the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Nonce([u8; NONCE_SIZE]);

impl Nonce {
    /// Draws a fresh nonce from the given source.
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut bytes = [0u8; NONCE_SIZE];
        rng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    pub const fn from_bytes(bytes: [u8; NONCE_SIZE]) -> Self {
        Self(bytes)
    }

    /// Builds a nonce from a byte slice of exactly [`NONCE_SIZE`] bytes.
    pub fn from_slice(bytes: &[u8]) -> CryptoResult<Self> {
        bytes
            .try_into()
            .map(Self)
            .map_err(|_| CryptoError::InvalidNonceLength {
                expected: NONCE_SIZE,
                actual: bytes.len(),
            })
    }

    pub const fn as_bytes(&self) -> &[u8; NONCE_SIZE] {
        &self.0
    }
}

impl AsRef<[u8]> for Nonce {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
