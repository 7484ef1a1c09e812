//! Public key models and the tagged key encoding

use crate::{
    error::{MigrateError, MigrateResult},
    serialization::{hex_bytes, Any, TypedMessage},
    validation::ValidationUtils,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Compressed secp256k1 public key size in bytes
pub const SECP256K1_PUBKEY_SIZE: usize = 33;
/// Ed25519 public key size in bytes
pub const ED25519_PUBKEY_SIZE: usize = 32;
/// Sr25519 public key size in bytes
pub const SR25519_PUBKEY_SIZE: usize = 32;

pub const SECP256K1_TYPE_URL: &str = "/cosmos.crypto.secp256k1.PubKey";
pub const ED25519_TYPE_URL: &str = "/cosmos.crypto.ed25519.PubKey";
pub const MULTISIG_TYPE_URL: &str = "/cosmos.crypto.multisig.LegacyAminoPubKey";

/// Signature algorithms a legacy public key may use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAlgorithm {
    Secp256k1,
    Ed25519,
    Sr25519,
    MultisigThreshold,
}

impl KeyAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyAlgorithm::Secp256k1 => "secp256k1",
            KeyAlgorithm::Ed25519 => "ed25519",
            KeyAlgorithm::Sr25519 => "sr25519",
            KeyAlgorithm::MultisigThreshold => "multisig-threshold",
        }
    }
}

impl fmt::Display for KeyAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Amino-encoded public key as found in legacy genesis exports.
///
/// Key bytes are read and written as hex strings. The base64 form of raw
/// amino JSON is not accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum LegacyPubKey {
    #[serde(rename = "tendermint/PubKeySecp256k1", with = "hex_bytes")]
    Secp256k1(Vec<u8>),
    #[serde(rename = "tendermint/PubKeyEd25519", with = "hex_bytes")]
    Ed25519(Vec<u8>),
    #[serde(rename = "tendermint/PubKeySr25519", with = "hex_bytes")]
    Sr25519(Vec<u8>),
    #[serde(rename = "tendermint/PubKeyMultisigThreshold")]
    MultisigThreshold {
        threshold: u32,
        pubkeys: Vec<LegacyPubKey>,
    },
}

impl LegacyPubKey {
    pub fn algorithm(&self) -> KeyAlgorithm {
        match self {
            LegacyPubKey::Secp256k1(_) => KeyAlgorithm::Secp256k1,
            LegacyPubKey::Ed25519(_) => KeyAlgorithm::Ed25519,
            LegacyPubKey::Sr25519(_) => KeyAlgorithm::Sr25519,
            LegacyPubKey::MultisigThreshold { .. } => KeyAlgorithm::MultisigThreshold,
        }
    }

    /// Check key sizes and multisig thresholds, recursing into member keys
    pub fn validate(&self) -> MigrateResult<()> {
        match self {
            LegacyPubKey::Secp256k1(key) => {
                ValidationUtils::validate_bytes_length(key, SECP256K1_PUBKEY_SIZE, "secp256k1 key")
            }
            LegacyPubKey::Ed25519(key) => {
                ValidationUtils::validate_bytes_length(key, ED25519_PUBKEY_SIZE, "ed25519 key")
            }
            LegacyPubKey::Sr25519(key) => {
                ValidationUtils::validate_bytes_length(key, SR25519_PUBKEY_SIZE, "sr25519 key")
            }
            LegacyPubKey::MultisigThreshold { threshold, pubkeys } => {
                if pubkeys.is_empty() {
                    return Err(MigrateError::validation("Multisig key has no member keys"));
                }
                ValidationUtils::validate_range(
                    *threshold as usize,
                    1,
                    pubkeys.len(),
                    "Multisig threshold",
                )?;
                ValidationUtils::validate_batch(pubkeys, |k| k.validate(), "Multisig member")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Secp256k1PubKey {
    #[serde(with = "hex_bytes")]
    pub key: Vec<u8>,
}

impl TypedMessage for Secp256k1PubKey {
    const TYPE_URL: &'static str = SECP256K1_TYPE_URL;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ed25519PubKey {
    #[serde(with = "hex_bytes")]
    pub key: Vec<u8>,
}

impl TypedMessage for Ed25519PubKey {
    const TYPE_URL: &'static str = ED25519_TYPE_URL;
}

/// Threshold multisig key whose members are themselves tagged containers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyAminoPubKey {
    pub threshold: u32,
    pub public_keys: Vec<Any>,
}

impl TypedMessage for LegacyAminoPubKey {
    const TYPE_URL: &'static str = MULTISIG_TYPE_URL;
}

/// Re-encode a legacy public key into a type-tagged container.
///
/// Fails with `UnsupportedKeyType` for algorithms the target schema cannot
/// represent, including when nested inside a multisig key.
pub fn encode_pub_key(key: &LegacyPubKey) -> MigrateResult<Any> {
    match key {
        LegacyPubKey::Secp256k1(bytes) => Secp256k1PubKey { key: bytes.clone() }.pack(),
        LegacyPubKey::Ed25519(bytes) => Ed25519PubKey { key: bytes.clone() }.pack(),
        LegacyPubKey::Sr25519(_) => Err(MigrateError::unsupported_key(
            KeyAlgorithm::Sr25519.as_str(),
        )),
        LegacyPubKey::MultisigThreshold { threshold, pubkeys } => {
            let public_keys = pubkeys
                .iter()
                .map(encode_pub_key)
                .collect::<MigrateResult<Vec<_>>>()?;
            LegacyAminoPubKey {
                threshold: *threshold,
                public_keys,
            }
            .pack()
        }
    }
}

/// Re-encode a key that may be absent; an absent key stays absent
pub fn encode_optional_pub_key(key: Option<&LegacyPubKey>) -> MigrateResult<Option<Any>> {
    key.map(encode_pub_key).transpose()
}

/// Recover the algorithm and raw key material from a tagged container
pub fn decode_pub_key(any: &Any) -> MigrateResult<LegacyPubKey> {
    match any.type_url.as_str() {
        SECP256K1_TYPE_URL => Ok(LegacyPubKey::Secp256k1(
            Secp256k1PubKey::decode(&any.value)?.key,
        )),
        ED25519_TYPE_URL => Ok(LegacyPubKey::Ed25519(Ed25519PubKey::decode(&any.value)?.key)),
        MULTISIG_TYPE_URL => {
            let multisig = LegacyAminoPubKey::decode(&any.value)?;
            let pubkeys = multisig
                .public_keys
                .iter()
                .map(decode_pub_key)
                .collect::<MigrateResult<Vec<_>>>()?;
            Ok(LegacyPubKey::MultisigThreshold {
                threshold: multisig.threshold,
                pubkeys,
            })
        }
        other => Err(MigrateError::unsupported_key(other)),
    }
}
