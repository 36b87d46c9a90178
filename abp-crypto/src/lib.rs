//! Cryptographic primitives for ABP packets.
//!
//! Provides the two engines the packet layer is built on:
//! - AES-256-GCM with a 12-byte nonce and 16-byte tag ([`cipher`])
//! - RSA PKCS#1 v1.5 block-chunked encryption and SHA-512 signatures
//!   ([`pkcs1`])
//!
//! plus key types, key loading, and self-tests.
//!
//! # Randomness
//!
//! Anything that needs randomness takes an `RngCore + CryptoRng` argument.
//! Production callers pass `rand::rngs::OsRng`; tests can pass a seeded
//! generator. No function keeps state between calls.

pub mod cipher;
mod error;
mod key;
pub mod pkcs1;
mod rsa_key;
pub mod selftest;

pub use cipher::{decrypt, encrypt, TAG_SIZE};
pub use error::{CryptoError, CryptoResult, ErrorKind};
pub use key::{generate_key, Nonce, SymmetricKey, KEY_SIZE, NONCE_SIZE};
pub use rsa_key::{
    private_key_from_hex, private_key_from_modulus_hex, public_key_from_hex, RsaKeyPair,
    DEFAULT_PUBLIC_EXPONENT, MIN_KEY_BITS,
};

pub use rsa::{RsaPrivateKey, RsaPublicKey};
