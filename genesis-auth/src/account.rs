//! Current (v0.40) auth account model.
//!
//! Balances are gone from every shape. Public keys and whole accounts are
//! stored as type-tagged [`Any`] containers.

use crate::params::Params;
use genesis_common::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const BASE_ACCOUNT_TYPE_URL: &str = "/cosmos.auth.v1beta1.BaseAccount";
pub const MODULE_ACCOUNT_TYPE_URL: &str = "/cosmos.auth.v1beta1.ModuleAccount";
pub const BASE_VESTING_ACCOUNT_TYPE_URL: &str = "/cosmos.vesting.v1beta1.BaseVestingAccount";
pub const CONTINUOUS_VESTING_ACCOUNT_TYPE_URL: &str =
    "/cosmos.vesting.v1beta1.ContinuousVestingAccount";
pub const DELAYED_VESTING_ACCOUNT_TYPE_URL: &str = "/cosmos.vesting.v1beta1.DelayedVestingAccount";
pub const PERIODIC_VESTING_ACCOUNT_TYPE_URL: &str =
    "/cosmos.vesting.v1beta1.PeriodicVestingAccount";

/// Variant tag shared by the legacy and current account shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountKind {
    Base,
    Module,
    BaseVesting,
    ContinuousVesting,
    DelayedVesting,
    PeriodicVesting,
}

impl AccountKind {
    pub const ALL: [AccountKind; 6] = [
        AccountKind::Base,
        AccountKind::Module,
        AccountKind::BaseVesting,
        AccountKind::ContinuousVesting,
        AccountKind::DelayedVesting,
        AccountKind::PeriodicVesting,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Base => "base",
            AccountKind::Module => "module",
            AccountKind::BaseVesting => "base_vesting",
            AccountKind::ContinuousVesting => "continuous_vesting",
            AccountKind::DelayedVesting => "delayed_vesting",
            AccountKind::PeriodicVesting => "periodic_vesting",
        }
    }

    /// Amino type name used by legacy exports
    pub fn legacy_name(&self) -> &'static str {
        match self {
            AccountKind::Base => "cosmos-sdk/Account",
            AccountKind::Module => "cosmos-sdk/ModuleAccount",
            AccountKind::BaseVesting => "cosmos-sdk/BaseVestingAccount",
            AccountKind::ContinuousVesting => "cosmos-sdk/ContinuousVestingAccount",
            AccountKind::DelayedVesting => "cosmos-sdk/DelayedVestingAccount",
            AccountKind::PeriodicVesting => "cosmos-sdk/PeriodicVestingAccount",
        }
    }

    pub fn type_url(&self) -> &'static str {
        match self {
            AccountKind::Base => BASE_ACCOUNT_TYPE_URL,
            AccountKind::Module => MODULE_ACCOUNT_TYPE_URL,
            AccountKind::BaseVesting => BASE_VESTING_ACCOUNT_TYPE_URL,
            AccountKind::ContinuousVesting => CONTINUOUS_VESTING_ACCOUNT_TYPE_URL,
            AccountKind::DelayedVesting => DELAYED_VESTING_ACCOUNT_TYPE_URL,
            AccountKind::PeriodicVesting => PERIODIC_VESTING_ACCOUNT_TYPE_URL,
        }
    }

    pub fn from_legacy_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.legacy_name() == name)
    }

    pub fn from_type_url(type_url: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.type_url() == type_url)
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseAccount {
    pub address: Address,
    pub pub_key: Option<Any>,
    pub account_number: AccountNumber,
    pub sequence: Sequence,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleAccount {
    pub base_account: BaseAccount,
    pub name: String,
    pub permissions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseVestingAccount {
    pub base_account: BaseAccount,
    pub original_vesting: Coins,
    pub delegated_free: Coins,
    pub delegated_vesting: Coins,
    pub end_time: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContinuousVestingAccount {
    pub base_vesting_account: BaseVestingAccount,
    pub start_time: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayedVestingAccount {
    pub base_vesting_account: BaseVestingAccount,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub length: Duration,
    pub amount: Coins,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodicVestingAccount {
    pub base_vesting_account: BaseVestingAccount,
    pub start_time: Timestamp,
    pub vesting_periods: Vec<Period>,
}

impl TypedMessage for BaseAccount {
    const TYPE_URL: &'static str = BASE_ACCOUNT_TYPE_URL;
}

impl TypedMessage for ModuleAccount {
    const TYPE_URL: &'static str = MODULE_ACCOUNT_TYPE_URL;
}

impl TypedMessage for BaseVestingAccount {
    const TYPE_URL: &'static str = BASE_VESTING_ACCOUNT_TYPE_URL;
}

impl TypedMessage for ContinuousVestingAccount {
    const TYPE_URL: &'static str = CONTINUOUS_VESTING_ACCOUNT_TYPE_URL;
}

impl TypedMessage for DelayedVestingAccount {
    const TYPE_URL: &'static str = DELAYED_VESTING_ACCOUNT_TYPE_URL;
}

impl TypedMessage for PeriodicVestingAccount {
    const TYPE_URL: &'static str = PERIODIC_VESTING_ACCOUNT_TYPE_URL;
}

/// One of the six account shapes of the current schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Account {
    Base(BaseAccount),
    Module(ModuleAccount),
    BaseVesting(BaseVestingAccount),
    ContinuousVesting(ContinuousVestingAccount),
    DelayedVesting(DelayedVestingAccount),
    PeriodicVesting(PeriodicVestingAccount),
}

impl Account {
    pub fn kind(&self) -> AccountKind {
        match self {
            Account::Base(_) => AccountKind::Base,
            Account::Module(_) => AccountKind::Module,
            Account::BaseVesting(_) => AccountKind::BaseVesting,
            Account::ContinuousVesting(_) => AccountKind::ContinuousVesting,
            Account::DelayedVesting(_) => AccountKind::DelayedVesting,
            Account::PeriodicVesting(_) => AccountKind::PeriodicVesting,
        }
    }

    pub fn base_account(&self) -> &BaseAccount {
        match self {
            Account::Base(a) => a,
            Account::Module(a) => &a.base_account,
            Account::BaseVesting(a) => &a.base_account,
            Account::ContinuousVesting(a) => &a.base_vesting_account.base_account,
            Account::DelayedVesting(a) => &a.base_vesting_account.base_account,
            Account::PeriodicVesting(a) => &a.base_vesting_account.base_account,
        }
    }

    pub fn address(&self) -> &str {
        &self.base_account().address
    }

    /// Wrap the account in a container tagged with its type url
    pub fn pack(&self) -> MigrateResult<Any> {
        match self {
            Account::Base(a) => a.pack(),
            Account::Module(a) => a.pack(),
            Account::BaseVesting(a) => a.pack(),
            Account::ContinuousVesting(a) => a.pack(),
            Account::DelayedVesting(a) => a.pack(),
            Account::PeriodicVesting(a) => a.pack(),
        }
    }

    /// Recover a typed account from its container
    pub fn unpack(any: &Any) -> MigrateResult<Self> {
        let kind = AccountKind::from_type_url(&any.type_url).ok_or_else(|| {
            MigrateError::deserialization(format!("Unknown account type url {}", any.type_url))
        })?;

        Ok(match kind {
            AccountKind::Base => Account::Base(BaseAccount::decode(&any.value)?),
            AccountKind::Module => Account::Module(ModuleAccount::decode(&any.value)?),
            AccountKind::BaseVesting => {
                Account::BaseVesting(BaseVestingAccount::decode(&any.value)?)
            }
            AccountKind::ContinuousVesting => {
                Account::ContinuousVesting(ContinuousVestingAccount::decode(&any.value)?)
            }
            AccountKind::DelayedVesting => {
                Account::DelayedVesting(DelayedVestingAccount::decode(&any.value)?)
            }
            AccountKind::PeriodicVesting => {
                Account::PeriodicVesting(PeriodicVestingAccount::decode(&any.value)?)
            }
        })
    }
}

/// Current auth genesis state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisState {
    pub params: Params,
    pub accounts: Vec<Any>,
}

impl GenesisState {
    /// Unpack every account container, preserving order
    pub fn unpack_accounts(&self) -> MigrateResult<Vec<Account>> {
        self.accounts.iter().map(Account::unpack).collect()
    }
}
