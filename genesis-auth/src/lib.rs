//! # Genesis Auth
//!
//! Migration of the auth section of an exported genesis from the v0.39
//! schema to the v0.40 schema.
//!
//! ## Architecture Overview
//!
//! ### [`LegacyGenesisState`] - Input
//! - Six account shapes, each embedding a coin balance
//! - Amino-encoded public keys (secp256k1, ed25519, sr25519, threshold multisig)
//! - Decoded from `{"type", "value"}` envelopes; unknown shapes are rejected
//!
//! ### [`GenesisState`] - Output
//! - The same six shapes without any balance field
//! - Public keys re-encoded as type-tagged [`Any`](genesis_common::serialization::Any) containers
//! - Every account packed into an `Any` at its original position
//!
//! ### Conversion
//! - [`migrate`] walks the accounts in order, clearing each legacy balance
//!   before converting it
//! - Parameters are copied field for field by [`convert_params`]
//! - The first unsupported key aborts the whole batch
//!
//! ## Example Usage
//!
//! ```rust
//! use genesis_auth::{migrate, Account, LegacyGenesisState};
//! use serde_json::json;
//!
//! # fn example() -> genesis_common::error::MigrateResult<()> {
//! let mut legacy = LegacyGenesisState::from_json_value(json!({
//!     "params": {
//!         "max_memo_characters": 256,
//!         "tx_sig_limit": 7,
//!         "tx_size_cost_per_byte": 10,
//!         "sig_verify_cost_ed25519": 590,
//!         "sig_verify_cost_secp256k1": 1000
//!     },
//!     "accounts": [{
//!         "type": "cosmos-sdk/Account",
//!         "value": {
//!             "address": "cosmos1qypqxpq9qcrsszg2pvxq6rs0zqg3yyc5lzv7xu",
//!             "coins": [{"denom": "uatom", "amount": "100"}],
//!             "account_number": 3,
//!             "sequence": 1
//!         }
//!     }]
//! }))?;
//!
//! let migrated = migrate(&mut legacy)?;
//! let accounts = migrated.unpack_accounts()?;
//! assert!(matches!(accounts[0], Account::Base(_)));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod account;
pub mod config;
pub mod legacy;
pub mod migrate;
pub mod params;
pub mod report;

pub use account::{
    Account, AccountKind, BaseAccount, BaseVestingAccount, ContinuousVestingAccount,
    DelayedVestingAccount, GenesisState, ModuleAccount, Period, PeriodicVestingAccount,
};
pub use config::{MigrationConfig, StartTimeSource};
pub use legacy::{
    LegacyAccount, LegacyBaseAccount, LegacyBaseVestingAccount, LegacyContinuousVestingAccount,
    LegacyDelayedVestingAccount, LegacyGenesisState, LegacyModuleAccount, LegacyPeriod,
    LegacyPeriodicVestingAccount, RawAccount,
};
pub use migrate::{
    convert_account, convert_base_account, convert_base_vesting_account, migrate,
    migrate_with_config, migrate_with_report,
};
pub use params::{convert_params, LegacyParams, Params};
pub use report::MigrationReport;
