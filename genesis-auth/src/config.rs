// config.rs - Configuration for the auth genesis migration
use genesis_common::{migrate_bail, migrate_error};
use genesis_common::prelude::*;
use serde::{Deserialize, Serialize};

/// Which legacy field seeds a continuous vesting account's start time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartTimeSource {
    /// Carry the legacy start time over unchanged
    #[default]
    Start,
    /// Copy the legacy end time, as the upstream v0.40 migration did.
    /// Only useful to reproduce a genesis produced by that tool.
    LegacyEndTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MigrationConfig {
    /// Start time derivation for continuous vesting accounts
    pub continuous_start_time: StartTimeSource,

    /// Attach a SHA-256 digest of the migrated state to the report
    pub compute_digest: bool,

    /// Abort unless the input holds exactly this many accounts
    pub expected_accounts: Option<usize>,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            continuous_start_time: StartTimeSource::Start,
            compute_digest: true,
            expected_accounts: None,
        }
    }
}

impl MigrationConfig {
    /// Validate configuration
    pub fn validate(&self) -> MigrateResult<()> {
        if self.expected_accounts == Some(0) {
            migrate_bail!(Config, "expected_accounts must be greater than 0 when set");
        }
        Ok(())
    }

    /// Parse and validate a TOML configuration
    pub fn from_toml_str(s: &str) -> MigrateResult<Self> {
        let config: Self =
            toml::from_str(s).map_err(|e| migrate_error!(Config, "Invalid TOML: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the input account count against `expected_accounts`
    pub fn check_account_count(&self, actual: usize) -> MigrateResult<()> {
        if let Some(expected) = self.expected_accounts {
            if expected != actual {
                migrate_bail!(Validation, "expected {} accounts, found {}", expected, actual);
            }
        }
        Ok(())
    }
}
