//! Error types for the packet primitives.

use thiserror::Error;

/// Result type for primitive operations.
pub type CryptoResult<T> = Result<T, CryptoError>;

/// Coarse classification of a failure.
///
/// Callers that only need to decide "caller bug, bad input, or attack" can
/// match on this instead of on individual variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Wrong key or nonce length, or an unusable setting. A caller bug.
    Configuration,
    /// Malformed bytes: truncated, misaligned, or badly encoded.
    Format,
    /// AEAD tag verification failed.
    Authentication,
    /// RSA PKCS#1 v1.5 unpadding failed.
    Padding,
    /// The underlying primitive failed for some other reason.
    Internal,
}

/// Errors raised by the AEAD and RSA engines.
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("invalid nonce length: expected {expected} bytes, got {actual}")]
    InvalidNonceLength { expected: usize, actual: usize },

    #[error("malformed input: {0}")]
    Format(String),

    #[error("authentication failed (wrong key, wrong nonce or tampered data)")]
    Authentication,

    #[error("padding check failed (wrong key or tampered data)")]
    Padding,

    #[error("invalid key material: {0}")]
    InvalidKey(String),

    #[error("encryption failed: {0}")]
    Encryption(String),

    #[error("signing failed: {0}")]
    Signing(String),

    #[error("key generation failed: {0}")]
    KeyGeneration(String),

    #[error("self-test failed: {0}")]
    SelfTestFailed(String),
}

impl CryptoError {
    /// Classifies this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidKeyLength { .. } | Self::InvalidNonceLength { .. } => {
                ErrorKind::Configuration
            }
            Self::Format(_) | Self::InvalidKey(_) => ErrorKind::Format,
            Self::Authentication => ErrorKind::Authentication,
            Self::Padding => ErrorKind::Padding,
            Self::Encryption(_)
            | Self::Signing(_)
            | Self::KeyGeneration(_)
            | Self::SelfTestFailed(_) => ErrorKind::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_errors_are_configuration() {
        let err = CryptoError::InvalidKeyLength {
            expected: 32,
            actual: 16,
        };
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert_eq!(
            err.to_string(),
            "invalid key length: expected 32 bytes, got 16"
        );

        let err = CryptoError::InvalidNonceLength {
            expected: 12,
            actual: 24,
        };
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn opaque_failures_keep_their_kind() {
        assert_eq!(CryptoError::Authentication.kind(), ErrorKind::Authentication);
        assert_eq!(CryptoError::Padding.kind(), ErrorKind::Padding);
        assert_eq!(
            CryptoError::InvalidKey("bad hex".into()).kind(),
            ErrorKind::Format
        );
    }
}
