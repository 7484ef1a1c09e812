//! # Genesis Common
//!
//! Common errors, types and encodings shared by the genesis migration crates.
//!
//! ## Modules
//!
//! - **error**: The migration error taxonomy
//! - **types**: Scalar aliases and coin types shared by both schemas
//! - **serialization**: The type-tagged [`serialization::Any`] container and payload encoding
//! - **crypto**: Legacy public keys and their tagged re-encoding
//! - **validation**: Input validation utilities
//!
//! ## Example Usage
//!
//! ```rust
//! use genesis_common::prelude::*;
//!
//! let key = LegacyPubKey::Ed25519(vec![7u8; 32]);
//! let any = encode_pub_key(&key)?;
//! assert_eq!(any.type_url, "/cosmos.crypto.ed25519.PubKey");
//! assert_eq!(decode_pub_key(&any)?, key);
//! # Ok::<(), MigrateError>(())
//! ```

#![warn(rustdoc::missing_crate_level_docs)]

pub mod crypto;
pub mod error;
pub mod serialization;
pub mod types;
pub mod validation;

/// Re-export commonly used types and traits
pub mod prelude {
    pub use crate::crypto::{
        decode_pub_key, encode_optional_pub_key, encode_pub_key, KeyAlgorithm, LegacyPubKey,
    };
    pub use crate::error::{MigrateError, MigrateResult};
    pub use crate::serialization::{Any, HashCompute, TypedMessage};
    pub use crate::types::{
        AccountNumber, Address, Coin, Coins, CoinsExt, Duration, Sequence, Timestamp,
    };
    pub use crate::validation::ValidationUtils;
}

/// Genesis Common crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
