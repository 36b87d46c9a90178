//! Packet configuration.

use crate::error::{PackError, PackResult};
use abp_crypto::{RsaKeyPair, MIN_KEY_BITS};
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

/// Settings for the asymmetric packet path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackConfig {
    /// Modulus size for keys generated through [`PackConfig::generate_keypair`].
    pub rsa_key_bits: usize,

    /// Maximum number of RSA blocks one asymmetric packet may span.
    /// `None` leaves payload size unbounded.
    pub max_rsa_blocks: Option<usize>,

    /// Log a warning whenever an asymmetric packet spans more than one block.
    pub warn_on_multi_block: bool,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            rsa_key_bits: 2048,
            max_rsa_blocks: None,
            warn_on_multi_block: true,
        }
    }
}

impl PackConfig {
    /// Only allows single-block asymmetric packets, i.e. short secrets.
    pub fn single_block() -> Self {
        Self {
            max_rsa_blocks: Some(1),
            ..Self::default()
        }
    }

    /// Checks every setting.
    pub fn validate(&self) -> PackResult<()> {
        self.validate_key_generation()?;
        self.validate_packing()
    }

    /// Checks the settings that apply when packing with an existing key.
    /// `rsa_key_bits` is not one of them.
    pub fn validate_packing(&self) -> PackResult<()> {
        if self.max_rsa_blocks == Some(0) {
            return Err(PackError::Config(
                "max_rsa_blocks must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    fn validate_key_generation(&self) -> PackResult<()> {
        if self.rsa_key_bits < MIN_KEY_BITS {
            return Err(PackError::Config(format!(
                "rsa_key_bits must be at least {MIN_KEY_BITS}, got {}",
                self.rsa_key_bits
            )));
        }
        Ok(())
    }

    /// Generates an RSA key pair of the configured size.
    pub fn generate_keypair<R: RngCore + CryptoRng>(&self, rng: &mut R) -> PackResult<RsaKeyPair> {
        self.validate_key_generation()?;
        Ok(RsaKeyPair::generate(rng, self.rsa_key_bits)?)
    }
}
