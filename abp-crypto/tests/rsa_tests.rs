//! RSA engine tests against fixed 2048-bit fixture keys.
//!
//! `rsa2048_a.pem` is a PKCS#1 key, `rsa2048_b.pem` a PKCS#8 key.
//! `rsa2048_a.hex` holds the modulus, public exponent and private exponent of
//! key A as big-endian hex, one per line.

use abp_crypto::pkcs1::{self, block_count, input_block_size, output_block_size};
use abp_crypto::selftest::{rsa_self_test, SELF_TEST_INPUT};
use abp_crypto::{
    private_key_from_hex, private_key_from_modulus_hex, public_key_from_hex, CryptoError,
    ErrorKind, RsaKeyPair,
};
use pretty_assertions::assert_eq;
use rand::rngs::OsRng;

const KEY_A_PEM: &str = include_str!("fixtures/rsa2048_a.pem");
const KEY_B_PEM: &str = include_str!("fixtures/rsa2048_b.pem");
const KEY_A_HEX: &str = include_str!("fixtures/rsa2048_a.hex");

fn key_a() -> RsaKeyPair {
    RsaKeyPair::from_pem(KEY_A_PEM).unwrap()
}

fn key_b() -> RsaKeyPair {
    RsaKeyPair::from_pem(KEY_B_PEM).unwrap()
}

fn key_a_hex_parts() -> (String, String, String) {
    let mut lines = KEY_A_HEX.lines().map(str::to_owned);
    (
        lines.next().unwrap(),
        lines.next().unwrap(),
        lines.next().unwrap(),
    )
}

// ── Key loading ──

#[test]
fn loads_pkcs1_and_pkcs8_pem() {
    let a = key_a();
    let b = key_b();
    assert_eq!(a.modulus_len(), 256);
    assert_eq!(b.modulus_len(), 256);
    assert_ne!(a.public, b.public);
}

#[test]
fn hex_components_match_pem_key() {
    let (n, e, d) = key_a_hex_parts();
    let pem = key_a();

    let public = public_key_from_hex(&n, &e).unwrap();
    assert_eq!(public, pem.public);

    let private = private_key_from_hex(&n, &e, &d).unwrap();
    let ciphertext = pkcs1::encrypt(&pem.public, b"hex-loaded key", &mut OsRng).unwrap();
    assert_eq!(pkcs1::decrypt(&private, &ciphertext).unwrap(), b"hex-loaded key");
}

#[test]
fn bad_hex_components_are_format_errors() {
    let err = public_key_from_hex("xyz", "10001").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);

    let (n, e, _) = key_a_hex_parts();
    let err = private_key_from_hex(&n, &e, "1234").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
}

#[test]
fn modulus_and_private_exponent_alone_load_key() {
    let (n, e, d) = key_a_hex_parts();
    assert_eq!(e.trim(), "10001");
    let pem = key_a();

    let private = private_key_from_modulus_hex(&n, &d).unwrap();
    assert_eq!(private.to_public_key(), pem.public);

    let ciphertext = pkcs1::encrypt(&pem.public, b"n and d only", &mut OsRng).unwrap();
    assert_eq!(pkcs1::decrypt(&private, &ciphertext).unwrap(), b"n and d only");
}

#[test]
fn modulus_with_unrelated_private_exponent_is_rejected() {
    let (n, _, _) = key_a_hex_parts();
    let err = private_key_from_modulus_hex(&n, "abcdef0123456789").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
}

// ── Block arithmetic ──

#[test]
fn block_sizes_for_2048_bit_key() {
    let kp = key_a();
    assert_eq!(input_block_size(&kp.public), 245);
    assert_eq!(output_block_size(&kp.public), 256);
    assert_eq!(block_count(&kp.public, 0), 0);
    assert_eq!(block_count(&kp.public, 1), 1);
    assert_eq!(block_count(&kp.public, 245), 1);
    assert_eq!(block_count(&kp.public, 246), 2);
    assert_eq!(block_count(&kp.public, 735), 3);
}

#[test]
fn ciphertext_length_is_block_aligned() {
    let kp = key_a();
    for (len, blocks) in [(0usize, 0usize), (22, 1), (245, 1), (246, 2), (600, 3)] {
        let ct = pkcs1::encrypt(&kp.public, &vec![0x42; len], &mut OsRng).unwrap();
        assert_eq!(ct.len(), blocks * 256, "plaintext of {len} bytes");
    }
}

// ── Encrypt / decrypt ──

#[test]
fn literal_sample_roundtrips_in_one_block() {
    let kp = key_a();
    let ct = pkcs1::encrypt(&kp.public, SELF_TEST_INPUT, &mut OsRng).unwrap();
    assert_eq!(ct.len(), 256);
    assert_eq!(pkcs1::decrypt(&kp.private, &ct).unwrap(), SELF_TEST_INPUT);
}

#[test]
fn multi_block_payload_roundtrips_in_order() {
    let kp = key_a();
    let plaintext: Vec<u8> = (0..1000u32).map(|i| (i % 251) as u8).collect();

    let ct = pkcs1::encrypt(&kp.public, &plaintext, &mut OsRng).unwrap();
    assert_eq!(ct.len(), 5 * 256);
    assert_eq!(pkcs1::decrypt(&kp.private, &ct).unwrap(), plaintext);
}

#[test]
fn repeated_encryption_is_randomized() {
    let kp = key_a();
    let c1 = pkcs1::encrypt(&kp.public, b"same input", &mut OsRng).unwrap();
    let c2 = pkcs1::encrypt(&kp.public, b"same input", &mut OsRng).unwrap();
    assert_ne!(c1, c2);
}

#[test]
fn misaligned_ciphertext_is_format_error() {
    let kp = key_a();
    let ct = pkcs1::encrypt(&kp.public, b"data", &mut OsRng).unwrap();

    let err = pkcs1::decrypt(&kp.private, &ct[..255]).unwrap_err();
    assert!(matches!(err, CryptoError::Format(_)), "got {err:?}");

    let mut longer = ct.clone();
    longer.push(0);
    assert_eq!(
        pkcs1::decrypt(&kp.private, &longer).unwrap_err().kind(),
        ErrorKind::Format
    );
}

#[test]
fn wrong_private_key_never_recovers_plaintext() {
    let a = key_a();
    let b = key_b();
    let secret = b"symmetric key material 32 bytes!";

    let ct = pkcs1::encrypt(&a.public, secret, &mut OsRng).unwrap();
    match pkcs1::decrypt(&b.private, &ct) {
        Err(err) => assert!(matches!(err, CryptoError::Padding), "got {err:?}"),
        Ok(garbage) => assert_ne!(garbage, secret),
    }
}

#[test]
fn tampered_block_never_recovers_plaintext() {
    let kp = key_a();
    let secret = b"do not leak me";

    let mut ct = pkcs1::encrypt(&kp.public, secret, &mut OsRng).unwrap();
    ct[100] ^= 0x01;
    match pkcs1::decrypt(&kp.private, &ct) {
        Err(err) => assert_eq!(err.kind(), ErrorKind::Padding),
        Ok(garbage) => assert_ne!(garbage, secret),
    }
}

#[test]
fn corrupt_second_block_fails_whole_message() {
    let kp = key_a();
    let plaintext = vec![7u8; 400];

    let mut ct = pkcs1::encrypt(&kp.public, &plaintext, &mut OsRng).unwrap();
    // An all-zero block can never carry valid 00 02 padding.
    ct[256..].fill(0);
    let err = pkcs1::decrypt(&kp.private, &ct).unwrap_err();
    assert!(matches!(err, CryptoError::Padding));
}

// ── Sign / verify ──

#[test]
fn sign_verify_roundtrip() {
    let kp = key_a();
    let sig = pkcs1::sign(&kp.private, b"authentic message").unwrap();
    assert_eq!(sig.len(), 256);
    assert!(pkcs1::verify(&kp.public, b"authentic message", &sig));
}

#[test]
fn signing_is_deterministic() {
    let kp = key_a();
    let s1 = pkcs1::sign(&kp.private, b"m").unwrap();
    let s2 = pkcs1::sign(&kp.private, b"m").unwrap();
    assert_eq!(s1, s2);
}

#[test]
fn altered_message_fails_verification() {
    let kp = key_a();
    let sig = pkcs1::sign(&kp.private, b"pay alice 10").unwrap();
    assert!(!pkcs1::verify(&kp.public, b"pay alice 11", &sig));
}

#[test]
fn malformed_signature_returns_false() {
    let kp = key_a();
    let sig = pkcs1::sign(&kp.private, b"message").unwrap();

    assert!(!pkcs1::verify(&kp.public, b"message", &[]));
    assert!(!pkcs1::verify(&kp.public, b"message", &sig[..128]));
    assert!(!pkcs1::verify(&kp.public, b"message", &[0xFF; 256]));

    let mut flipped = sig.clone();
    flipped[0] ^= 0x80;
    assert!(!pkcs1::verify(&kp.public, b"message", &flipped));
}

#[test]
fn signature_from_other_key_fails() {
    let a = key_a();
    let b = key_b();
    let sig = pkcs1::sign(&b.private, b"message").unwrap();
    assert!(!pkcs1::verify(&a.public, b"message", &sig));
}

#[test]
fn self_test_passes_for_fixture_keys() {
    rsa_self_test(&key_a()).unwrap();
    rsa_self_test(&key_b()).unwrap();
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn encrypt_decrypt_always_roundtrips(data in proptest::collection::vec(any::<u8>(), 0..800)) {
            let kp = key_a();
            let ct = pkcs1::encrypt(&kp.public, &data, &mut OsRng).unwrap();
            prop_assert_eq!(ct.len(), block_count(&kp.public, data.len()) * 256);
            prop_assert_eq!(pkcs1::decrypt(&kp.private, &ct).unwrap(), data);
        }

        #[test]
        fn signatures_verify(data in proptest::collection::vec(any::<u8>(), 0..512)) {
            let kp = key_a();
            let sig = pkcs1::sign(&kp.private, &data).unwrap();
            prop_assert!(pkcs1::verify(&kp.public, &data, &sig));
        }
    }
}
