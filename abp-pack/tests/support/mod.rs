//! Shared fixtures for envelope integration tests.

#![allow(dead_code)]

use abp_crypto::RsaKeyPair;

/// The sample message carried over from the primitive self-tests.
pub const SAMPLE: &[u8] = b"Testing Testing 123!!!";

/// 2048-bit PKCS#1 fixture key.
pub fn rsa_key_a() -> RsaKeyPair {
    RsaKeyPair::from_pem(include_str!("../../../abp-crypto/tests/fixtures/rsa2048_a.pem"))
        .expect("fixture key A parses")
}

/// 2048-bit PKCS#8 fixture key, unrelated to key A.
pub fn rsa_key_b() -> RsaKeyPair {
    RsaKeyPair::from_pem(include_str!("../../../abp-crypto/tests/fixtures/rsa2048_b.pem"))
        .expect("fixture key B parses")
}
