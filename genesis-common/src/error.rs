//genesis-common/src/error.rs
//! Standardized error types for all migration components

use thiserror::Error;

/// Standard result type used throughout the migration
pub type MigrateResult<T> = std::result::Result<T, MigrateError>;

/// Comprehensive error type for all migration operations
#[derive(Error, Debug)]
pub enum MigrateError {
    // A public key whose algorithm has no tagged encoding in the target schema
    #[error("Unsupported key type {algorithm}{}", account_suffix(.address))]
    UnsupportedKeyType {
        algorithm: String,
        address: Option<String>,
    },

    // An account envelope matching none of the known shapes
    #[error("Unknown account variant '{type_tag}' at index {index}")]
    UnknownAccountVariant { index: usize, type_tag: String },

    // Unpacking an Any into the wrong message type
    #[error("Unexpected type url: expected {expected}, got {actual}")]
    UnexpectedTypeUrl { expected: String, actual: String },

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    // Deserialization errors
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    // Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    // JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn account_suffix(address: &Option<String>) -> String {
    match address {
        Some(address) => format!(" for account {}", address),
        None => String::new(),
    }
}

impl MigrateError {
    /// Create a new unsupported key type error not yet tied to an account
    pub fn unsupported_key(algorithm: impl Into<String>) -> Self {
        Self::UnsupportedKeyType {
            algorithm: algorithm.into(),
            address: None,
        }
    }

    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a new serialization error
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Create a new deserialization error
    pub fn deserialization(msg: impl Into<String>) -> Self {
        Self::Deserialization(msg.into())
    }

    /// Attach the offending account's address to a key error.
    ///
    /// Other variants are returned unchanged, as is a key error that already
    /// names an account.
    pub fn with_address(self, account: &str) -> Self {
        match self {
            Self::UnsupportedKeyType {
                algorithm,
                address: None,
            } => Self::UnsupportedKeyType {
                algorithm,
                address: Some(account.to_string()),
            },
            other => other,
        }
    }
}

/// Convenience macro for creating MigrateError instances
#[macro_export]
macro_rules! migrate_error {
    ($variant:ident, $($arg:tt)*) => {
        $crate::error::MigrateError::$variant(format!($($arg)*))
    };
}

/// Convenience macro for returning early with a MigrateError
#[macro_export]
macro_rules! migrate_bail {
    ($variant:ident, $($arg:tt)*) => {
        return Err($crate::migrate_error!($variant, $($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bail_on_zero(value: u32) -> MigrateResult<u32> {
        if value == 0 {
            migrate_bail!(Validation, "value {} must be positive", value);
        }
        Ok(value)
    }

    #[test]
    fn test_with_address_fills_missing_account() {
        let err = MigrateError::unsupported_key("sr25519").with_address("cosmos1abc");
        match &err {
            MigrateError::UnsupportedKeyType { algorithm, address } => {
                assert_eq!(algorithm, "sr25519");
                assert_eq!(address.as_deref(), Some("cosmos1abc"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(
            err.to_string(),
            "Unsupported key type sr25519 for account cosmos1abc"
        );
    }

    #[test]
    fn test_with_address_keeps_existing_account() {
        let err = MigrateError::unsupported_key("sr25519")
            .with_address("first")
            .with_address("second");
        assert!(err.to_string().ends_with("for account first"));
    }

    #[test]
    fn test_with_address_ignores_other_variants() {
        let err = MigrateError::validation("bad").with_address("cosmos1abc");
        assert_eq!(err.to_string(), "Validation error: bad");
    }

    #[test]
    fn test_bail_macro() {
        assert_eq!(bail_on_zero(3).unwrap(), 3);
        let err = bail_on_zero(0).unwrap_err();
        assert_eq!(err.to_string(), "Validation error: value 0 must be positive");
    }
}
