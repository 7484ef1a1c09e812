//! Input validation utilities and patterns

use crate::error::{MigrateError, MigrateResult};

/// Validation utilities for decoded legacy input
pub struct ValidationUtils;

impl ValidationUtils {
    /// Validate byte array length
    pub fn validate_bytes_length(
        bytes: &[u8],
        expected_len: usize,
        field_name: &str,
    ) -> MigrateResult<()> {
        if bytes.len() != expected_len {
            return Err(MigrateError::validation(format!(
                "{} invalid length: {} bytes (expected {})",
                field_name,
                bytes.len(),
                expected_len
            )));
        }
        Ok(())
    }

    /// Validate range for numeric values
    pub fn validate_range<T: PartialOrd + Copy + std::fmt::Debug>(
        value: T,
        min: T,
        max: T,
        field_name: &str,
    ) -> MigrateResult<T> {
        if value < min || value > max {
            return Err(MigrateError::validation(format!(
                "{} out of range (min: {:?}, max: {:?})",
                field_name, min, max
            )));
        }
        Ok(value)
    }

    /// Validate that a string field is present
    pub fn validate_non_empty(s: &str, field_name: &str) -> MigrateResult<()> {
        if s.trim().is_empty() {
            return Err(MigrateError::validation(format!(
                "{} cannot be empty",
                field_name
            )));
        }
        Ok(())
    }

    /// Batch validation for multiple values
    pub fn validate_batch<T, F>(items: &[T], validator: F, field_name: &str) -> MigrateResult<()>
    where
        F: Fn(&T) -> MigrateResult<()>,
    {
        for (i, item) in items.iter().enumerate() {
            validator(item)
                .map_err(|e| MigrateError::validation(format!("{}[{}]: {}", field_name, i, e)))?;
        }
        Ok(())
    }
}
