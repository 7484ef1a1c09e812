//! Legacy (v0.39) auth genesis model.
//!
//! Accounts embed their coin balance and carry amino-encoded public keys.
//! They are exported as `{"type": <amino name>, "value": {...}}` envelopes
//! with embedded accounts flattened into their parent's JSON object.
//!
//! The envelope read here is the normalised form of such an export: key
//! bytes are hex strings, and account numbers, sequences, thresholds and
//! times are JSON integers. Raw amino-JSON dumps write key bytes as base64
//! and integers as decimal strings. Normalise them first, because those
//! forms are rejected.

use crate::account::AccountKind;
use crate::params::LegacyParams;
use genesis_common::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyBaseAccount {
    pub address: Address,
    #[serde(default)]
    pub coins: Coins,
    #[serde(default)]
    pub public_key: Option<LegacyPubKey>,
    pub account_number: AccountNumber,
    pub sequence: Sequence,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyModuleAccount {
    #[serde(flatten)]
    pub base_account: LegacyBaseAccount,
    pub name: String,
    #[serde(default)]
    pub permissions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyBaseVestingAccount {
    #[serde(flatten)]
    pub base_account: LegacyBaseAccount,
    #[serde(default)]
    pub original_vesting: Coins,
    #[serde(default)]
    pub delegated_free: Coins,
    #[serde(default)]
    pub delegated_vesting: Coins,
    pub end_time: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyContinuousVestingAccount {
    #[serde(flatten)]
    pub base_vesting_account: LegacyBaseVestingAccount,
    pub start_time: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyDelayedVestingAccount {
    #[serde(flatten)]
    pub base_vesting_account: LegacyBaseVestingAccount,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyPeriod {
    pub length: Duration,
    #[serde(default)]
    pub amount: Coins,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyPeriodicVestingAccount {
    #[serde(flatten)]
    pub base_vesting_account: LegacyBaseVestingAccount,
    pub start_time: Timestamp,
    #[serde(default)]
    pub vesting_periods: Vec<LegacyPeriod>,
}

/// One of the six account shapes of the legacy schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value")]
pub enum LegacyAccount {
    #[serde(rename = "cosmos-sdk/Account")]
    Base(LegacyBaseAccount),
    #[serde(rename = "cosmos-sdk/ModuleAccount")]
    Module(LegacyModuleAccount),
    #[serde(rename = "cosmos-sdk/BaseVestingAccount")]
    BaseVesting(LegacyBaseVestingAccount),
    #[serde(rename = "cosmos-sdk/ContinuousVestingAccount")]
    ContinuousVesting(LegacyContinuousVestingAccount),
    #[serde(rename = "cosmos-sdk/DelayedVestingAccount")]
    DelayedVesting(LegacyDelayedVestingAccount),
    #[serde(rename = "cosmos-sdk/PeriodicVestingAccount")]
    PeriodicVesting(LegacyPeriodicVestingAccount),
}

impl LegacyAccount {
    pub fn kind(&self) -> AccountKind {
        match self {
            LegacyAccount::Base(_) => AccountKind::Base,
            LegacyAccount::Module(_) => AccountKind::Module,
            LegacyAccount::BaseVesting(_) => AccountKind::BaseVesting,
            LegacyAccount::ContinuousVesting(_) => AccountKind::ContinuousVesting,
            LegacyAccount::DelayedVesting(_) => AccountKind::DelayedVesting,
            LegacyAccount::PeriodicVesting(_) => AccountKind::PeriodicVesting,
        }
    }

    pub fn base_account(&self) -> &LegacyBaseAccount {
        match self {
            LegacyAccount::Base(a) => a,
            LegacyAccount::Module(a) => &a.base_account,
            LegacyAccount::BaseVesting(a) => &a.base_account,
            LegacyAccount::ContinuousVesting(a) => &a.base_vesting_account.base_account,
            LegacyAccount::DelayedVesting(a) => &a.base_vesting_account.base_account,
            LegacyAccount::PeriodicVesting(a) => &a.base_vesting_account.base_account,
        }
    }

    fn base_account_mut(&mut self) -> &mut LegacyBaseAccount {
        match self {
            LegacyAccount::Base(a) => a,
            LegacyAccount::Module(a) => &mut a.base_account,
            LegacyAccount::BaseVesting(a) => &mut a.base_account,
            LegacyAccount::ContinuousVesting(a) => &mut a.base_vesting_account.base_account,
            LegacyAccount::DelayedVesting(a) => &mut a.base_vesting_account.base_account,
            LegacyAccount::PeriodicVesting(a) => &mut a.base_vesting_account.base_account,
        }
    }

    pub fn address(&self) -> &str {
        &self.base_account().address
    }

    pub fn coins(&self) -> &[Coin] {
        &self.base_account().coins
    }

    pub fn set_coins(&mut self, coins: Coins) {
        self.base_account_mut().coins = coins;
    }

    /// Drop the embedded balance so it cannot be carried through if the
    /// legacy record is encoded again
    pub fn clear_coins(&mut self) {
        self.set_coins(Vec::new());
    }

    /// Check the address is present and the public key is well formed
    pub fn validate(&self) -> MigrateResult<()> {
        let base = self.base_account();
        ValidationUtils::validate_non_empty(&base.address, "Address")?;
        if let Some(key) = &base.public_key {
            key.validate()?;
        }
        Ok(())
    }
}

/// Undecoded account envelope as it appears in an exported genesis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawAccount {
    #[serde(rename = "type")]
    pub type_tag: String,
    pub value: serde_json::Value,
}

impl RawAccount {
    /// Decode the envelope at position `index` into one of the known shapes.
    ///
    /// An unrecognised type tag is fatal rather than skipped.
    pub fn into_account(self, index: usize) -> MigrateResult<LegacyAccount> {
        let kind = AccountKind::from_legacy_name(&self.type_tag).ok_or_else(|| {
            MigrateError::UnknownAccountVariant {
                index,
                type_tag: self.type_tag.clone(),
            }
        })?;

        let account = match kind {
            AccountKind::Base => LegacyAccount::Base(serde_json::from_value(self.value)?),
            AccountKind::Module => LegacyAccount::Module(serde_json::from_value(self.value)?),
            AccountKind::BaseVesting => {
                LegacyAccount::BaseVesting(serde_json::from_value(self.value)?)
            }
            AccountKind::ContinuousVesting => {
                LegacyAccount::ContinuousVesting(serde_json::from_value(self.value)?)
            }
            AccountKind::DelayedVesting => {
                LegacyAccount::DelayedVesting(serde_json::from_value(self.value)?)
            }
            AccountKind::PeriodicVesting => {
                LegacyAccount::PeriodicVesting(serde_json::from_value(self.value)?)
            }
        };

        account.validate().map_err(|e| {
            MigrateError::validation(format!(
                "account {} at index {}: {}",
                account.address(),
                index,
                e
            ))
        })?;

        Ok(account)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawLegacyGenesisState {
    pub params: LegacyParams,
    #[serde(default)]
    pub accounts: Vec<RawAccount>,
}

/// Legacy auth genesis state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLegacyGenesisState")]
pub struct LegacyGenesisState {
    pub params: LegacyParams,
    pub accounts: Vec<LegacyAccount>,
}

impl TryFrom<RawLegacyGenesisState> for LegacyGenesisState {
    type Error = MigrateError;

    fn try_from(raw: RawLegacyGenesisState) -> MigrateResult<Self> {
        let accounts = raw
            .accounts
            .into_iter()
            .enumerate()
            .map(|(index, account)| account.into_account(index))
            .collect::<MigrateResult<Vec<_>>>()?;

        Ok(Self {
            params: raw.params,
            accounts,
        })
    }
}

impl LegacyGenesisState {
    /// Decode an already-parsed auth genesis section, keeping the typed error
    /// for unknown account variants
    pub fn from_json_value(value: serde_json::Value) -> MigrateResult<Self> {
        let raw: RawLegacyGenesisState = serde_json::from_value(value)?;
        raw.try_into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base_json(address: &str) -> serde_json::Value {
        json!({
            "address": address,
            "coins": [{"denom": "uatom", "amount": "100"}],
            "public_key": {
                "type": "tendermint/PubKeyEd25519",
                "value": "01".repeat(32),
            },
            "account_number": 3,
            "sequence": 1,
        })
    }

    fn params_json() -> serde_json::Value {
        json!({
            "max_memo_characters": 256,
            "tx_sig_limit": 7,
            "tx_size_cost_per_byte": 10,
            "sig_verify_cost_ed25519": 590,
            "sig_verify_cost_secp256k1": 1000,
        })
    }

    #[test]
    fn test_decode_base_account() {
        let raw = RawAccount {
            type_tag: "cosmos-sdk/Account".to_string(),
            value: base_json("cosmos1base"),
        };
        let account = raw.into_account(0).unwrap();
        assert_eq!(account.kind(), AccountKind::Base);
        assert_eq!(account.address(), "cosmos1base");
        assert_eq!(account.coins(), &[Coin::new("uatom", "100")]);
        assert_eq!(
            account.base_account().public_key,
            Some(LegacyPubKey::Ed25519(vec![1u8; 32]))
        );
    }

    #[test]
    fn test_decode_rejects_raw_amino_encodings() {
        let mut value = base_json("cosmos1base");
        value["account_number"] = json!("3");
        let raw = RawAccount {
            type_tag: "cosmos-sdk/Account".to_string(),
            value,
        };
        assert!(matches!(raw.into_account(0), Err(MigrateError::Json(_))));

        let mut value = base_json("cosmos1base");
        value["public_key"]["value"] = json!("AQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQE=");
        let raw = RawAccount {
            type_tag: "cosmos-sdk/Account".to_string(),
            value,
        };
        assert!(matches!(raw.into_account(0), Err(MigrateError::Json(_))));
    }

    #[test]
    fn test_decode_flattened_periodic_account() {
        let mut value = base_json("cosmos1periodic");
        let obj = value.as_object_mut().unwrap();
        obj.insert("original_vesting".into(), json!([{"denom": "uatom", "amount": "500"}]));
        obj.insert("end_time".into(), json!(2000));
        obj.insert("start_time".into(), json!(1000));
        obj.insert(
            "vesting_periods".into(),
            json!([
                {"length": 500, "amount": [{"denom": "uatom", "amount": "250"}]},
                {"length": 500, "amount": [{"denom": "uatom", "amount": "250"}]},
            ]),
        );

        let raw = RawAccount {
            type_tag: "cosmos-sdk/PeriodicVestingAccount".to_string(),
            value,
        };
        match raw.into_account(4).unwrap() {
            LegacyAccount::PeriodicVesting(a) => {
                assert_eq!(a.start_time, 1000);
                assert_eq!(a.base_vesting_account.end_time, 2000);
                assert_eq!(a.vesting_periods.len(), 2);
                assert!(a.base_vesting_account.delegated_free.is_empty());
                assert_eq!(a.base_vesting_account.base_account.account_number, 3);
            }
            other => panic!("unexpected account: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_variant_is_fatal() {
        let raw = RawAccount {
            type_tag: "cosmos-sdk/PermanentLockedAccount".to_string(),
            value: base_json("cosmos1locked"),
        };
        match raw.into_account(5) {
            Err(MigrateError::UnknownAccountVariant { index, type_tag }) => {
                assert_eq!(index, 5);
                assert_eq!(type_tag, "cosmos-sdk/PermanentLockedAccount");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_malformed_key_names_account() {
        let mut value = base_json("cosmos1badkey");
        value["public_key"]["value"] = json!("01".repeat(31));
        let raw = RawAccount {
            type_tag: "cosmos-sdk/Account".to_string(),
            value,
        };
        let err = raw.into_account(2).unwrap_err();
        assert!(matches!(err, MigrateError::Validation(_)));
        assert!(err.to_string().contains("cosmos1badkey"));
        assert!(err.to_string().contains("index 2"));
    }

    #[test]
    fn test_clear_coins() {
        let raw = RawAccount {
            type_tag: "cosmos-sdk/ModuleAccount".to_string(),
            value: {
                let mut v = base_json("cosmos1module");
                v["name"] = json!("distribution");
                v
            },
        };
        let mut account = raw.into_account(0).unwrap();
        assert!(!account.coins().is_zero());
        account.clear_coins();
        assert!(account.coins().is_empty());
    }

    #[test]
    fn test_genesis_state_from_json_value() {
        let genesis = json!({
            "params": params_json(),
            "accounts": [
                {"type": "cosmos-sdk/Account", "value": base_json("cosmos1a")},
                {"type": "cosmos-sdk/Account", "value": base_json("cosmos1b")},
            ],
        });
        let state = LegacyGenesisState::from_json_value(genesis).unwrap();
        assert_eq!(state.accounts.len(), 2);
        assert_eq!(state.accounts[1].address(), "cosmos1b");
        assert_eq!(state.params.tx_sig_limit, 7);
    }

    #[test]
    fn test_genesis_state_rejects_unknown_variant() {
        let genesis = json!({
            "params": params_json(),
            "accounts": [
                {"type": "cosmos-sdk/Account", "value": base_json("cosmos1a")},
                {"type": "cosmos-sdk/Mystery", "value": {}},
            ],
        });
        assert!(matches!(
            LegacyGenesisState::from_json_value(genesis.clone()),
            Err(MigrateError::UnknownAccountVariant { index: 1, .. })
        ));

        // The serde path reports the same failure as a message
        let err = serde_json::from_value::<LegacyGenesisState>(genesis).unwrap_err();
        assert!(err.to_string().contains("cosmos-sdk/Mystery"));
    }

    #[test]
    fn test_serialize_matches_envelope_shape() {
        let raw = RawAccount {
            type_tag: "cosmos-sdk/Account".to_string(),
            value: base_json("cosmos1a"),
        };
        let account = raw.clone().into_account(0).unwrap();
        let encoded: RawAccount =
            serde_json::from_value(serde_json::to_value(&account).unwrap()).unwrap();
        assert_eq!(encoded.type_tag, raw.type_tag);
        assert_eq!(encoded.into_account(0).unwrap(), account);
    }
}
