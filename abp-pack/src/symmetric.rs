//! AES-256-GCM keyed packets.
//!
//! Wire format: `[version:1][nonce:12][ciphertext][tag:16]`

use crate::error::{PackError, PackResult};
use abp_crypto::{Nonce, SymmetricKey, NONCE_SIZE, TAG_SIZE};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use std::fmt;
use tracing::debug;

/// Size of the version prefix.
pub const VERSION_SIZE: usize = 1;
/// Version byte plus nonce.
pub const HEADER_SIZE: usize = VERSION_SIZE + NONCE_SIZE;
/// Smallest valid packet: header plus tag, empty payload.
pub const MIN_PACKED_LEN: usize = HEADER_SIZE + TAG_SIZE;

/// A version-tagged payload sealed under a 256-bit symmetric key.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SymmetricEnvelope {
    /// Caller-defined version tag; carried in the clear.
    pub version: u8,
    pub data: Vec<u8>,
}

impl SymmetricEnvelope {
    pub fn new(version: u8, data: impl Into<Vec<u8>>) -> Self {
        Self {
            version,
            data: data.into(),
        }
    }

    /// Seals the envelope with a fresh nonce from the OS RNG.
    pub fn pack(&self, key: &SymmetricKey) -> PackResult<Vec<u8>> {
        self.pack_with_rng(key, &mut OsRng)
    }

    /// Seals the envelope, drawing the nonce from `rng`.
    ///
    /// The nonce is the only non-deterministic input, so packing the same
    /// envelope twice yields different bytes.
    pub fn pack_with_rng<R: RngCore + CryptoRng>(
        &self,
        key: &SymmetricKey,
        rng: &mut R,
    ) -> PackResult<Vec<u8>> {
        let nonce = Nonce::generate(rng);
        let ciphertext = abp_crypto::encrypt(key, &nonce, &self.data)?;

        let mut packed = Vec::with_capacity(HEADER_SIZE + ciphertext.len());
        packed.push(self.version);
        packed.extend_from_slice(nonce.as_bytes());
        packed.extend_from_slice(&ciphertext);

        debug!(
            "packed symmetric envelope v{} ({} -> {} bytes)",
            self.version,
            self.data.len(),
            packed.len()
        );
        Ok(packed)
    }

    /// Parses and opens a packet produced by [`SymmetricEnvelope::pack`].
    pub fn unpack(packed: &[u8], key: &SymmetricKey) -> PackResult<Self> {
        if packed.len() < MIN_PACKED_LEN {
            return Err(PackError::TooShort {
                minimum: MIN_PACKED_LEN,
                actual: packed.len(),
            });
        }

        let version = packed[0];
        let nonce = Nonce::from_slice(&packed[VERSION_SIZE..HEADER_SIZE])?;
        let data = abp_crypto::decrypt(key, &nonce, &packed[HEADER_SIZE..]).map_err(|e| {
            debug!("symmetric envelope v{version} rejected: {:?}", e.kind());
            PackError::from(e)
        })?;

        Ok(Self { version, data })
    }

    /// Reads the version byte of a packet without opening it.
    pub fn peek_version(packed: &[u8]) -> Option<u8> {
        packed.first().copied()
    }
}

impl fmt::Debug for SymmetricEnvelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymmetricEnvelope")
            .field("version", &self.version)
            .field("data_len", &self.data.len())
            .finish()
    }
}
