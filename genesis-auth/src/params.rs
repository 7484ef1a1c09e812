//! Auth module parameters in both schemas

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyParams {
    pub max_memo_characters: u64,
    pub tx_sig_limit: u64,
    pub tx_size_cost_per_byte: u64,
    pub sig_verify_cost_ed25519: u64,
    pub sig_verify_cost_secp256k1: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    pub max_memo_characters: u64,
    pub tx_sig_limit: u64,
    pub tx_size_cost_per_byte: u64,
    pub sig_verify_cost_ed25519: u64,
    pub sig_verify_cost_secp256k1: u64,
}

/// Re-declare the parameter block under the current schema, field for field
pub fn convert_params(old: &LegacyParams) -> Params {
    Params {
        max_memo_characters: old.max_memo_characters,
        tx_sig_limit: old.tx_sig_limit,
        tx_size_cost_per_byte: old.tx_size_cost_per_byte,
        sig_verify_cost_ed25519: old.sig_verify_cost_ed25519,
        sig_verify_cost_secp256k1: old.sig_verify_cost_secp256k1,
    }
}

impl From<LegacyParams> for Params {
    fn from(old: LegacyParams) -> Self {
        convert_params(&old)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_params_copies_every_field() {
        let old = LegacyParams {
            max_memo_characters: 256,
            tx_sig_limit: 7,
            tx_size_cost_per_byte: 10,
            sig_verify_cost_ed25519: 590,
            sig_verify_cost_secp256k1: 1000,
        };

        let new = convert_params(&old);
        assert_eq!(new.max_memo_characters, 256);
        assert_eq!(new.tx_sig_limit, 7);
        assert_eq!(new.tx_size_cost_per_byte, 10);
        assert_eq!(new.sig_verify_cost_ed25519, 590);
        assert_eq!(new.sig_verify_cost_secp256k1, 1000);
        assert_eq!(Params::from(old), new);
    }

    #[test]
    fn test_convert_params_keeps_extreme_values() {
        let old = LegacyParams {
            max_memo_characters: 0,
            tx_sig_limit: u64::MAX,
            tx_size_cost_per_byte: 1,
            sig_verify_cost_ed25519: u64::MAX - 1,
            sig_verify_cost_secp256k1: 0,
        };
        let new = convert_params(&old);
        assert_eq!(new.tx_sig_limit, u64::MAX);
        assert_eq!(new.sig_verify_cost_ed25519, u64::MAX - 1);
        assert_eq!(new.max_memo_characters, 0);
    }
}
