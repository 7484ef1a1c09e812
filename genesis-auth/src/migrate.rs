//! Account conversion from the legacy schema to the current one.
//!
//! Every account is converted independently and packed into an [`Any`] at
//! its original position. The first failure aborts the whole batch: no
//! partial state is returned and the input is left untouched. Legacy
//! balances are only cleared once every account has converted.

use crate::account::{
    Account, BaseAccount, BaseVestingAccount, ContinuousVestingAccount, DelayedVestingAccount,
    GenesisState, ModuleAccount, Period, PeriodicVestingAccount,
};
use crate::config::{MigrationConfig, StartTimeSource};
use crate::legacy::{
    LegacyAccount, LegacyBaseAccount, LegacyBaseVestingAccount, LegacyContinuousVestingAccount,
    LegacyGenesisState,
};
use crate::params::convert_params;
use crate::report::MigrationReport;
use genesis_common::prelude::*;

/// Convert the base identity, re-encoding the public key.
///
/// A key without a tagged encoding fails with `UnsupportedKeyType` naming
/// the account.
pub fn convert_base_account(old: &LegacyBaseAccount) -> MigrateResult<BaseAccount> {
    let pub_key = encode_optional_pub_key(old.public_key.as_ref())
        .map_err(|e| e.with_address(&old.address))?;

    Ok(BaseAccount {
        address: old.address.clone(),
        pub_key,
        account_number: old.account_number,
        sequence: old.sequence,
    })
}

/// Convert the shared vesting fields and the embedded base account
pub fn convert_base_vesting_account(
    old: &LegacyBaseVestingAccount,
) -> MigrateResult<BaseVestingAccount> {
    Ok(BaseVestingAccount {
        base_account: convert_base_account(&old.base_account)?,
        original_vesting: old.original_vesting.clone(),
        delegated_free: old.delegated_free.clone(),
        delegated_vesting: old.delegated_vesting.clone(),
        end_time: old.end_time,
    })
}

fn continuous_start_time(
    old: &LegacyContinuousVestingAccount,
    source: StartTimeSource,
) -> Timestamp {
    match source {
        StartTimeSource::Start => old.start_time,
        StartTimeSource::LegacyEndTime => old.base_vesting_account.end_time,
    }
}

/// Convert the account to its current-schema shape of the same kind, then
/// clear the legacy balance in place.
///
/// The balance is left as it was when conversion fails.
pub fn convert_account(
    account: &mut LegacyAccount,
    config: &MigrationConfig,
) -> MigrateResult<Account> {
    let converted = build_account(account, config)?;
    account.clear_coins();
    Ok(converted)
}

// Conversion never reads the balance, so it can run before any clearing
fn build_account(account: &LegacyAccount, config: &MigrationConfig) -> MigrateResult<Account> {
    let converted = match account {
        LegacyAccount::Base(old) => Account::Base(convert_base_account(old)?),
        LegacyAccount::Module(old) => Account::Module(ModuleAccount {
            base_account: convert_base_account(&old.base_account)?,
            name: old.name.clone(),
            permissions: old.permissions.clone(),
        }),
        LegacyAccount::BaseVesting(old) => {
            Account::BaseVesting(convert_base_vesting_account(old)?)
        }
        LegacyAccount::ContinuousVesting(old) => {
            Account::ContinuousVesting(ContinuousVestingAccount {
                base_vesting_account: convert_base_vesting_account(&old.base_vesting_account)?,
                start_time: continuous_start_time(old, config.continuous_start_time),
            })
        }
        LegacyAccount::DelayedVesting(old) => Account::DelayedVesting(DelayedVestingAccount {
            base_vesting_account: convert_base_vesting_account(&old.base_vesting_account)?,
        }),
        LegacyAccount::PeriodicVesting(old) => {
            let vesting_periods = old
                .vesting_periods
                .iter()
                .map(|period| Period {
                    length: period.length,
                    amount: period.amount.clone(),
                })
                .collect();

            Account::PeriodicVesting(PeriodicVestingAccount {
                base_vesting_account: convert_base_vesting_account(&old.base_vesting_account)?,
                start_time: old.start_time,
                vesting_periods,
            })
        }
    };

    Ok(converted)
}

/// Migrate a legacy auth genesis state with the default configuration
pub fn migrate(state: &mut LegacyGenesisState) -> MigrateResult<GenesisState> {
    migrate_with_config(state, &MigrationConfig::default())
}

pub fn migrate_with_config(
    state: &mut LegacyGenesisState,
    config: &MigrationConfig,
) -> MigrateResult<GenesisState> {
    migrate_with_report(state, config).map(|(migrated, _)| migrated)
}

/// Migrate a legacy auth genesis state and summarise the run.
///
/// All accounts are converted into a staging list first. The input balances
/// are cleared only after the whole batch has succeeded, so a failed run
/// leaves `state` exactly as it was.
pub fn migrate_with_report(
    state: &mut LegacyGenesisState,
    config: &MigrationConfig,
) -> MigrateResult<(GenesisState, MigrationReport)> {
    config.validate()?;
    config.check_account_count(state.accounts.len())?;

    if config.continuous_start_time == StartTimeSource::LegacyEndTime {
        tracing::warn!(
            "Continuous vesting start times will be copied from the legacy end time"
        );
    }

    let mut report = MigrationReport::new();
    let mut accounts = Vec::with_capacity(state.accounts.len());

    for (index, account) in state.accounts.iter().enumerate() {
        let had_balance = !account.coins().is_zero();
        let converted = build_account(account, config)?;

        tracing::debug!(
            "Converted account {} ({}) at index {}, balance dropped: {}",
            converted.address(),
            converted.kind(),
            index,
            had_balance
        );

        report.record(converted.kind());
        accounts.push(converted.pack()?);
    }

    let migrated = GenesisState {
        params: convert_params(&state.params),
        accounts,
    };

    if config.compute_digest {
        report.digest = Some(hex::encode(HashCompute::hash_json(&migrated)?));
    }

    for account in &mut state.accounts {
        account.clear_coins();
    }

    tracing::info!("{}", report.get_summary());

    Ok((migrated, report))
}
