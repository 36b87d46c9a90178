//! AES-256-GCM authenticated encryption.
//!
//! Every call builds a fresh cipher context from the key; nothing is cached
//! between calls.

use crate::error::{CryptoError, CryptoResult};
use crate::key::{Nonce, SymmetricKey, KEY_SIZE};
use aes_gcm::aead::Aead;
use aes_gcm::{Aes256Gcm, KeyInit};

/// Size of the GCM authentication tag appended to every ciphertext.
pub const TAG_SIZE: usize = 16;

fn cipher_for(key: &SymmetricKey) -> CryptoResult<Aes256Gcm> {
    Aes256Gcm::new_from_slice(key.as_bytes()).map_err(|_| CryptoError::InvalidKeyLength {
        expected: KEY_SIZE,
        actual: key.as_bytes().len(),
    })
}

/// Encrypts `plaintext`, returning `ciphertext || tag`.
///
/// The output is always `plaintext.len() + TAG_SIZE` bytes.
pub fn encrypt(key: &SymmetricKey, nonce: &Nonce, plaintext: &[u8]) -> CryptoResult<Vec<u8>> {
    let cipher = cipher_for(key)?;
    cipher
        .encrypt(aes_gcm::Nonce::from_slice(nonce.as_bytes()), plaintext)
        .map_err(|e| CryptoError::Encryption(format!("AES-GCM seal failed: {e}")))
}

/// Decrypts `ciphertext || tag`.
///
/// Fails with [`CryptoError::Authentication`] if the tag does not verify; no
/// plaintext is released in that case.
pub fn decrypt(key: &SymmetricKey, nonce: &Nonce, ciphertext: &[u8]) -> CryptoResult<Vec<u8>> {
    if ciphertext.len() < TAG_SIZE {
        return Err(CryptoError::Format(format!(
            "ciphertext too short: {} bytes (minimum {TAG_SIZE})",
            ciphertext.len()
        )));
    }

    let cipher = cipher_for(key)?;
    cipher
        .decrypt(aes_gcm::Nonce::from_slice(nonce.as_bytes()), ciphertext)
        .map_err(|_| CryptoError::Authentication)
}
