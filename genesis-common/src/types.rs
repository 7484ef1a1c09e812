//genesis-common/src/types.rs
//! Common type definitions shared by the legacy and current schemas

use serde::{Deserialize, Serialize};

/// Bech32 account address, carried verbatim
pub type Address = String;

/// Account number assigned at account creation
pub type AccountNumber = u64;

/// Account sequence (signed transaction count)
pub type Sequence = u64;

/// Timestamp in seconds since Unix epoch
pub type Timestamp = i64;

/// Vesting period length in seconds
pub type Duration = i64;

/// A single denomination amount.
///
/// The amount is kept as its decimal string so arbitrary precision values
/// pass through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    pub amount: String,
}

impl Coin {
    pub fn new(denom: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            denom: denom.into(),
            amount: amount.into(),
        }
    }
}

/// Ordered set of coins
pub type Coins = Vec<Coin>;

/// Extension helpers for coin sets
pub trait CoinsExt {
    /// True when no denomination carries a non-zero amount
    fn is_zero(&self) -> bool;
}

impl CoinsExt for [Coin] {
    fn is_zero(&self) -> bool {
        self.iter()
            .all(|coin| coin.amount.trim_start_matches('0').is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coins_is_zero() {
        let empty: Coins = Vec::new();
        assert!(empty.is_zero());

        let zeros = vec![Coin::new("uatom", "0"), Coin::new("stake", "000")];
        assert!(zeros.is_zero());

        let funded = vec![Coin::new("uatom", "0"), Coin::new("stake", "100")];
        assert!(!funded.is_zero());
    }
}
