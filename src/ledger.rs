// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::TransactionRecord;
use serde::Serialize;

/// Append-only list of transactions for the running session.
///
/// Insertion order is display order. Records are never removed, sorted or
/// deduplicated, so ids stay `1..=len` in order.
#[derive(Debug, Default, Clone)]
pub struct Ledger {
    records: Vec<TransactionRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id the next appended record must carry.
    ///
    /// Saturates at `u32::MAX`; a ledger that large is out of reach for one
    /// session.
    pub fn next_id(&self) -> u32 {
        u32::try_from(self.records.len()).map_or(u32::MAX, |n| n.saturating_add(1))
    }

    /// Appends a record built against [`Ledger::next_id`].
    pub fn append(&mut self, record: TransactionRecord) -> &TransactionRecord {
        debug_assert_eq!(record.transaction_id, self.next_id());
        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, transaction_id: u32) -> Option<&TransactionRecord> {
        let idx = usize::try_from(transaction_id.checked_sub(1)?).ok()?;
        self.records.get(idx)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TransactionRecord> {
        self.records.iter()
    }

    /// Table rows: id, date, amount, category, type, description.
    pub fn rows(&self) -> Vec<LedgerRow> {
        self.records.iter().map(LedgerRow::from).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerRow {
    pub id: u32,
    pub date: String,
    pub amount: String,
    pub category: String,
    pub r#type: String,
    pub description: String,
}

impl From<&TransactionRecord> for LedgerRow {
    fn from(r: &TransactionRecord) -> Self {
        LedgerRow {
            id: r.transaction_id,
            date: r.date.to_string(),
            amount: format!("{:.2}", r.amount),
            category: r.category.clone(),
            r#type: r.kind.to_string(),
            description: r.description.clone(),
        }
    }
}

impl LedgerRow {
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.date.clone(),
            self.amount.clone(),
            self.category.clone(),
            self.r#type.clone(),
            self.description.clone(),
        ]
    }
}
