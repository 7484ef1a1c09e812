// Tagged container and payload encoding patterns for migrated state
// This module provides the self-describing `Any` wrapper used for keys and accounts

use crate::error::{MigrateError, MigrateResult};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Type-tagged opaque container pairing a type url with encoded payload bytes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Any {
    #[serde(rename = "@type")]
    pub type_url: String,
    #[serde(with = "hex_bytes")]
    pub value: Vec<u8>,
}

impl Any {
    pub fn new(type_url: impl Into<String>, value: Vec<u8>) -> Self {
        Self {
            type_url: type_url.into(),
            value,
        }
    }

    /// Check whether this container holds a message of type `T`
    pub fn is<T: TypedMessage>(&self) -> bool {
        self.type_url == T::TYPE_URL
    }
}

/// Trait for messages that can be packed into an [`Any`]
pub trait TypedMessage: Serialize + DeserializeOwned {
    /// Fully qualified type url identifying this message
    const TYPE_URL: &'static str;

    /// Serialize the message payload
    fn encode(&self) -> MigrateResult<Vec<u8>> {
        bincode::serialize(self).map_err(|e| {
            MigrateError::serialization(format!("Failed to encode {}: {}", Self::TYPE_URL, e))
        })
    }

    /// Deserialize a message payload
    fn decode(bytes: &[u8]) -> MigrateResult<Self> {
        bincode::deserialize(bytes).map_err(|e| {
            MigrateError::deserialization(format!("Failed to decode {}: {}", Self::TYPE_URL, e))
        })
    }

    /// Wrap the message in a type-tagged container
    fn pack(&self) -> MigrateResult<Any> {
        Ok(Any::new(Self::TYPE_URL, self.encode()?))
    }

    /// Recover the message from a container, checking its type url
    fn unpack(any: &Any) -> MigrateResult<Self> {
        if !any.is::<Self>() {
            return Err(MigrateError::UnexpectedTypeUrl {
                expected: Self::TYPE_URL.to_string(),
                actual: any.type_url.clone(),
            });
        }
        Self::decode(&any.value)
    }
}

/// Hash computation utilities
pub struct HashCompute;

impl HashCompute {
    /// Compute SHA-256 hash of the JSON encoding of `data`
    pub fn hash_json<T: Serialize>(data: &T) -> MigrateResult<[u8; 32]> {
        let encoded = serde_json::to_vec(data)?;
        Ok(Self::hash_bytes(&encoded))
    }

    /// Compute hash of raw bytes
    pub fn hash_bytes(data: &[u8]) -> [u8; 32] {
        Sha256::digest(data).into()
    }
}

/// Serde adapter writing byte vectors as lowercase hex strings in
/// human-readable formats and as raw bytes otherwise
pub mod hex_bytes {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_str(&hex::encode(bytes))
        } else {
            serializer.serialize_bytes(bytes)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            hex::decode(&s).map_err(serde::de::Error::custom)
        } else {
            Vec::<u8>::deserialize(deserializer)
        }
    }
}
