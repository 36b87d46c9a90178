//! Envelope-level self-tests with the fixed sample message.

use crate::asymmetric::AsymmetricEnvelope;
use crate::error::PackResult;
use crate::symmetric::SymmetricEnvelope;
use abp_crypto::selftest::SELF_TEST_INPUT;
use abp_crypto::{CryptoError, RsaKeyPair, SymmetricKey};

/// Packs and unpacks the sample message through a [`SymmetricEnvelope`].
pub fn symmetric_self_test(key: &SymmetricKey) -> PackResult<()> {
    let packed = SymmetricEnvelope::new(0, SELF_TEST_INPUT).pack(key)?;
    let opened = SymmetricEnvelope::unpack(&packed, key)?;

    if opened.version != 0 || opened.data != SELF_TEST_INPUT {
        return Err(CryptoError::SelfTestFailed(
            "symmetric envelope does not round-trip".into(),
        )
        .into());
    }
    Ok(())
}

/// Packs and unpacks the sample message through an [`AsymmetricEnvelope`].
pub fn asymmetric_self_test(keypair: &RsaKeyPair) -> PackResult<()> {
    let packed = AsymmetricEnvelope::new(0, SELF_TEST_INPUT).pack(&keypair.public)?;
    let opened = AsymmetricEnvelope::unpack(&packed, &keypair.private)?;

    if opened.version != 0 || opened.data != SELF_TEST_INPUT {
        return Err(CryptoError::SelfTestFailed(
            "asymmetric envelope does not round-trip".into(),
        )
        .into());
    }
    Ok(())
}
