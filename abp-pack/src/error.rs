//! Packet error types.

use abp_crypto::{CryptoError, ErrorKind};
use thiserror::Error;

/// Result type for packet operations.
pub type PackResult<T> = Result<T, PackError>;

/// Errors that can occur while packing or unpacking an envelope.
#[derive(Debug, Error)]
pub enum PackError {
    #[error("packet too short: {actual} bytes (minimum {minimum})")]
    TooShort { minimum: usize, actual: usize },

    #[error("RSA payload of {actual} bytes is not a positive multiple of the {block_size}-byte block size")]
    Misaligned { block_size: usize, actual: usize },

    #[error("payload needs {blocks} RSA blocks, limit is {limit}")]
    PayloadTooLarge { blocks: usize, limit: usize },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("crypto error: {0}")]
    Crypto(#[from] CryptoError),
}

impl PackError {
    /// Classifies this error; crypto failures keep the engine's classification.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::TooShort { .. } | Self::Misaligned { .. } => ErrorKind::Format,
            Self::PayloadTooLarge { .. } | Self::Config(_) => ErrorKind::Configuration,
            Self::Crypto(e) => e.kind(),
        }
    }
}
