//! Summary of a completed migration run

use crate::account::AccountKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct MigrationReport {
    pub tool_version: String,
    pub total: usize,
    pub by_kind: BTreeMap<AccountKind, usize>,
    /// Hex SHA-256 of the JSON-encoded migrated state
    pub digest: Option<String>,
}

impl MigrationReport {
    pub fn new() -> Self {
        Self {
            tool_version: genesis_common::VERSION.to_string(),
            total: 0,
            by_kind: BTreeMap::new(),
            digest: None,
        }
    }

    pub fn record(&mut self, kind: AccountKind) {
        self.total += 1;
        *self.by_kind.entry(kind).or_insert(0) += 1;
    }

    pub fn count(&self, kind: AccountKind) -> usize {
        self.by_kind.get(&kind).copied().unwrap_or(0)
    }

    pub fn get_summary(&self) -> String {
        let kinds = self
            .by_kind
            .iter()
            .map(|(kind, count)| format!("{}={}", kind, count))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "Migrated {} accounts [{}] digest: {}",
            self.total,
            kinds,
            self.digest.as_deref().unwrap_or("none")
        )
    }
}

impl Default for MigrationReport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_summary() {
        let mut report = MigrationReport::new();
        report.record(AccountKind::Base);
        report.record(AccountKind::PeriodicVesting);
        report.record(AccountKind::Base);

        assert_eq!(report.total, 3);
        assert_eq!(report.count(AccountKind::Base), 2);
        assert_eq!(report.count(AccountKind::Module), 0);
        assert_eq!(
            report.get_summary(),
            "Migrated 3 accounts [base=2, periodic_vesting=1] digest: none"
        );
    }

    #[test]
    fn test_report_json_keys() {
        let mut report = MigrationReport::new();
        report.record(AccountKind::ContinuousVesting);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["by_kind"]["continuous_vesting"], 1);
        assert_eq!(json["tool_version"], genesis_common::VERSION);
    }
}
