use crate::codec::WireCode;
use crate::{KindReport, TransactionKind};

use std::collections::BTreeMap;

/// Counts classified transactions, keyed by wire code so reports come out in code order.
/// Codes are unambiguous here because `Unknown` never carries a declared code.
#[derive(Debug, Default)]
pub struct KindTally {
    counts: BTreeMap<WireCode, usize>,
}

impl KindTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, kind: TransactionKind) -> usize {
        let count = self.counts.entry(kind.code()).or_insert(0);
        *count += 1;

        *count
    }

    pub fn count(&self, kind: TransactionKind) -> usize {
        return self.counts.get(&kind.code()).copied().unwrap_or(0);
    }

    pub fn total(&self) -> usize {
        return self.counts.values().sum();
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn build_report(&self) -> Vec<KindReport> {
        self.counts
            .iter()
            .map(|(code, count)| {
                let transaction_type = match TransactionKind::classify(*code) {
                    TransactionKind::Known(tx_type) => tx_type.to_string(),
                    TransactionKind::Unknown(_) => "Unknown".to_string(),
                };

                KindReport {
                    transaction_type,
                    code: code.0,
                    count: *count,
                }
            })
            .collect()
    }
}
