//! RSA keyed packets.
//!
//! Wire format: `[version:1][rsa block:k]...`, with at least one block.
//!
//! Each block carries at most `k - 11` payload bytes. Prefer this path for
//! short secrets only; see [`abp_crypto::pkcs1`] for why.

use crate::config::PackConfig;
use crate::error::{PackError, PackResult};
use crate::symmetric::VERSION_SIZE;
use abp_crypto::pkcs1;
use abp_crypto::{RsaPrivateKey, RsaPublicKey, MIN_KEY_BITS};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use std::fmt;
use tracing::{debug, warn};

/// A version-tagged payload encrypted to an RSA public key.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AsymmetricEnvelope {
    /// Caller-defined version tag; carried in the clear.
    pub version: u8,
    pub data: Vec<u8>,
}

impl AsymmetricEnvelope {
    pub fn new(version: u8, data: impl Into<Vec<u8>>) -> Self {
        Self {
            version,
            data: data.into(),
        }
    }

    /// Encrypts the envelope with default settings and the OS RNG.
    pub fn pack(&self, public_key: &RsaPublicKey) -> PackResult<Vec<u8>> {
        self.pack_with(public_key, &PackConfig::default(), &mut OsRng)
    }

    /// Encrypts the envelope under `config`, drawing padding bytes from `rng`.
    ///
    /// An empty payload still produces one block so the packet always has
    /// the `1 + m * k` shape with `m >= 1`.
    pub fn pack_with<R: RngCore + CryptoRng>(
        &self,
        public_key: &RsaPublicKey,
        config: &PackConfig,
        rng: &mut R,
    ) -> PackResult<Vec<u8>> {
        config.validate_packing()?;

        let modulus_bits = pkcs1::output_block_size(public_key) * 8;
        if modulus_bits < MIN_KEY_BITS {
            return Err(PackError::Config(format!(
                "{modulus_bits}-bit RSA modulus is below the {MIN_KEY_BITS}-bit minimum"
            )));
        }

        let blocks = pkcs1::block_count(public_key, self.data.len()).max(1);
        if let Some(limit) = config.max_rsa_blocks {
            if blocks > limit {
                return Err(PackError::PayloadTooLarge { blocks, limit });
            }
        }
        if blocks > 1 && config.warn_on_multi_block {
            warn!(
                "asymmetric envelope v{} spans {blocks} RSA blocks; wrap a symmetric key instead of bulk data",
                self.version
            );
        }

        let ciphertext = if self.data.is_empty() {
            pkcs1::encrypt_block(public_key, &[], rng)?
        } else {
            pkcs1::encrypt(public_key, &self.data, rng)?
        };

        let mut packed = Vec::with_capacity(VERSION_SIZE + ciphertext.len());
        packed.push(self.version);
        packed.extend_from_slice(&ciphertext);

        debug!(
            "packed asymmetric envelope v{} ({} -> {} bytes)",
            self.version,
            self.data.len(),
            packed.len()
        );
        Ok(packed)
    }

    /// Parses and decrypts a packet produced by [`AsymmetricEnvelope::pack`].
    pub fn unpack(packed: &[u8], private_key: &RsaPrivateKey) -> PackResult<Self> {
        let block_size = pkcs1::output_block_size(private_key);
        let Some((&version, body)) = packed.split_first() else {
            return Err(PackError::TooShort {
                minimum: VERSION_SIZE + block_size,
                actual: 0,
            });
        };

        if body.is_empty() || body.len() % block_size != 0 {
            return Err(PackError::Misaligned {
                block_size,
                actual: body.len(),
            });
        }

        let data = pkcs1::decrypt(private_key, body).map_err(|e| {
            debug!("asymmetric envelope v{version} rejected: {:?}", e.kind());
            PackError::from(e)
        })?;

        Ok(Self { version, data })
    }

    /// Reads the version byte of a packet without decrypting it.
    pub fn peek_version(packed: &[u8]) -> Option<u8> {
        packed.first().copied()
    }
}

impl fmt::Debug for AsymmetricEnvelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsymmetricEnvelope")
            .field("version", &self.version)
            .field("data_len", &self.data.len())
            .finish()
    }
}
