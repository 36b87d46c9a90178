//! RSA PKCS#1 v1.5 encryption and SHA-512 signatures.
//!
//! RSA only encrypts one modulus-sized block at a time, so [`encrypt`] splits
//! longer payloads into `k - 11` byte chunks (`k` being the modulus length in
//! bytes) and concatenates the `k`-byte ciphertext blocks. Each block is
//! padded with fresh random bytes.
//!
//! Chunked RSA is kept for wire compatibility. It is slow and offers none of
//! the integrity guarantees of the AEAD path, so it should only carry short
//! secrets such as symmetric keys. Bulk data belongs in
//! [`crate::cipher`].
//!
//! # Side channels
//!
//! Every unpadding failure collapses to [`CryptoError::Padding`] with no
//! detail, but the `rsa` crate's decryption is not guaranteed to run in
//! constant time. Do not expose [`decrypt`] as an oracle to remote peers.

use crate::error::{CryptoError, CryptoResult};
use rand::{CryptoRng, RngCore};
use rsa::traits::PublicKeyParts;
use rsa::{Pkcs1v15Encrypt, Pkcs1v15Sign, RsaPrivateKey, RsaPublicKey};
use sha2::{Digest, Sha512};
use tracing::debug;
use zeroize::Zeroize;

/// Bytes of every block consumed by PKCS#1 v1.5 encryption padding.
pub const PKCS1_OVERHEAD: usize = 11;

/// Largest plaintext chunk that fits in one block under `key`.
pub fn input_block_size(key: &impl PublicKeyParts) -> usize {
    key.size().saturating_sub(PKCS1_OVERHEAD)
}

/// Size of one ciphertext block under `key` (the modulus length in bytes).
pub fn output_block_size(key: &impl PublicKeyParts) -> usize {
    key.size()
}

/// Number of ciphertext blocks a plaintext of `plaintext_len` bytes needs.
pub fn block_count(key: &impl PublicKeyParts, plaintext_len: usize) -> usize {
    match input_block_size(key) {
        0 => 0,
        chunk => plaintext_len.div_ceil(chunk),
    }
}

/// Encrypts `plaintext` block by block.
///
/// The result is `block_count * k` bytes. An empty plaintext yields an empty
/// ciphertext.
pub fn encrypt<R: RngCore + CryptoRng>(
    public_key: &RsaPublicKey,
    plaintext: &[u8],
    rng: &mut R,
) -> CryptoResult<Vec<u8>> {
    let chunk = input_block_size(public_key);
    if chunk == 0 {
        return Err(CryptoError::InvalidKey(format!(
            "{}-byte modulus leaves no room for PKCS#1 v1.5 padding",
            public_key.size()
        )));
    }

    let k = output_block_size(public_key);
    let blocks = block_count(public_key, plaintext.len());
    let mut out = Vec::with_capacity(blocks * k);

    for piece in plaintext.chunks(chunk) {
        out.extend_from_slice(&encrypt_block(public_key, piece, rng)?);
    }

    debug!("RSA encrypted {} bytes into {blocks} block(s) of {k}", plaintext.len());
    Ok(out)
}

/// Encrypts a single chunk of at most `k - 11` bytes into exactly one block.
///
/// An empty chunk is valid and produces a block carrying only padding.
pub fn encrypt_block<R: RngCore + CryptoRng>(
    public_key: &RsaPublicKey,
    chunk: &[u8],
    rng: &mut R,
) -> CryptoResult<Vec<u8>> {
    let limit = input_block_size(public_key);
    if chunk.len() > limit {
        return Err(CryptoError::Encryption(format!(
            "{}-byte chunk exceeds the {limit}-byte RSA block capacity",
            chunk.len()
        )));
    }

    let k = output_block_size(public_key);
    let block = public_key
        .encrypt(rng, Pkcs1v15Encrypt, chunk)
        .map_err(|e| CryptoError::Encryption(format!("RSA encryption failed: {e}")))?;
    if block.len() != k {
        return Err(CryptoError::Encryption(format!(
            "RSA block is {} bytes, expected {k}",
            block.len()
        )));
    }
    Ok(block)
}

/// Decrypts a sequence of `k`-byte blocks and concatenates the plaintexts.
///
/// The ciphertext length must be a multiple of `k`. If any block fails to
/// unpad, the whole call fails with [`CryptoError::Padding`] and the plaintext
/// recovered so far is wiped.
pub fn decrypt(private_key: &RsaPrivateKey, ciphertext: &[u8]) -> CryptoResult<Vec<u8>> {
    let k = output_block_size(private_key);
    if k == 0 || ciphertext.len() % k != 0 {
        return Err(CryptoError::Format(format!(
            "RSA ciphertext of {} bytes is not a multiple of the {k}-byte block size",
            ciphertext.len()
        )));
    }

    let mut out = Vec::with_capacity(ciphertext.len());
    for block in ciphertext.chunks(k) {
        match private_key.decrypt(Pkcs1v15Encrypt, block) {
            Ok(mut piece) => {
                out.extend_from_slice(&piece);
                piece.zeroize();
            }
            Err(_) => {
                out.zeroize();
                return Err(CryptoError::Padding);
            }
        }
    }
    Ok(out)
}

/// Signs `data` with SHA-512 and PKCS#1 v1.5 signature padding.
pub fn sign(private_key: &RsaPrivateKey, data: &[u8]) -> CryptoResult<Vec<u8>> {
    let digest = Sha512::digest(data);
    private_key
        .sign(Pkcs1v15Sign::new::<Sha512>(), &digest)
        .map_err(|e| CryptoError::Signing(e.to_string()))
}

/// Checks a SHA-512 PKCS#1 v1.5 signature.
///
/// Returns `false` for a digest mismatch and for a malformed signature alike.
pub fn verify(public_key: &RsaPublicKey, data: &[u8], signature: &[u8]) -> bool {
    let digest = Sha512::digest(data);
    public_key
        .verify(Pkcs1v15Sign::new::<Sha512>(), &digest, signature)
        .is_ok()
}
