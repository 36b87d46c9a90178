//! Known-input round trips for checking a key before putting it into service.

use crate::error::{CryptoError, CryptoResult};
use crate::key::{Nonce, SymmetricKey};
use crate::rsa_key::RsaKeyPair;
use crate::{cipher, pkcs1};
use rand::rngs::OsRng;

/// Fixed sample message used by every self-test.
pub const SELF_TEST_INPUT: &[u8] = b"Testing Testing 123!!!";

/// Encrypts and decrypts [`SELF_TEST_INPUT`] under `key`.
pub fn aead_self_test(key: &SymmetricKey) -> CryptoResult<()> {
    let nonce = Nonce::generate(&mut OsRng);
    let sealed = cipher::encrypt(key, &nonce, SELF_TEST_INPUT)?;
    let opened = cipher::decrypt(key, &nonce, &sealed)?;

    if opened != SELF_TEST_INPUT {
        return Err(CryptoError::SelfTestFailed(
            "AES-GCM output does not match input".into(),
        ));
    }
    Ok(())
}

/// Signs, encrypts, decrypts and verifies [`SELF_TEST_INPUT`] with `keypair`.
pub fn rsa_self_test(keypair: &RsaKeyPair) -> CryptoResult<()> {
    let signature = pkcs1::sign(&keypair.private, SELF_TEST_INPUT)?;
    let encrypted = pkcs1::encrypt(&keypair.public, SELF_TEST_INPUT, &mut OsRng)?;
    let decrypted = pkcs1::decrypt(&keypair.private, &encrypted)?;

    if decrypted != SELF_TEST_INPUT {
        return Err(CryptoError::SelfTestFailed(
            "RSA output does not match input".into(),
        ));
    }
    if !pkcs1::verify(&keypair.public, &decrypted, &signature) {
        return Err(CryptoError::SelfTestFailed(
            "RSA signature does not verify".into(),
        ));
    }
    Ok(())
}
