//! Versioned encrypted packets.
//!
//! Two envelope shapes share a one-byte, caller-defined version prefix:
//!
//! - [`SymmetricEnvelope`]: `[version][nonce:12][AES-256-GCM ciphertext][tag:16]`
//! - [`AsymmetricEnvelope`]: `[version][RSA PKCS#1 v1.5 blocks]`
//!
//! Both are plain in-memory transforms. Build an envelope from a version and
//! payload, call `pack` with the encryption key, and recover it with
//! `unpack` and the matching decryption key. Keys are only borrowed.

pub mod asymmetric;
pub mod config;
pub mod error;
pub mod selftest;
pub mod symmetric;

pub use asymmetric::AsymmetricEnvelope;
pub use config::PackConfig;
pub use error::{PackError, PackResult};
pub use symmetric::{SymmetricEnvelope, HEADER_SIZE, MIN_PACKED_LEN, VERSION_SIZE};
