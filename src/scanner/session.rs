//! Session aggregation.
//!
//! Scattered single-attribute log lines are merged into one record per
//! session key. The key is the raw (user, address, timestamp-fragment)
//! triple; equality is exact string equality on all three components, so
//! lines whose timestamp fragments differ land in different records.

use std::collections::HashMap;

use super::fields;

/// Identifies one aggregated session record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionKey {
    pub user: String,
    pub addr: String,
    pub timestamp: String,
}

/// One session's accumulated fields, keyed by canonical column name.
///
/// A column not yet observed is genuinely unset, not empty. Later writes to
/// the same column overwrite earlier ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionRecord {
    fields: HashMap<&'static str, String>,
}

impl SessionRecord {
    /// Set a column, overwriting any prior value.
    pub fn set(&mut self, column: &'static str, value: String) {
        self.fields.insert(column, value);
    }

    /// Get a column's value, or `None` if it was never observed.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Number of columns observed so far.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when no column has been observed.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Insertion-ordered mapping from session key to record.
///
/// Iteration yields records in the order their keys were first observed,
/// which keeps report output deterministic and reproducible.
#[derive(Debug, Clone, Default)]
pub struct SessionTable {
    index: HashMap<SessionKey, usize>,
    entries: Vec<(SessionKey, SessionRecord)>,
}

impl SessionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one matched line into the table.
    ///
    /// The record for `key` is created on first sight. Every observation
    /// re-asserts the three key-derived columns from the key tuple itself,
    /// then applies the attribute assignment if the attribute is in the
    /// canonical table (unmapped attributes only contribute the key-derived
    /// columns).
    pub fn observe(&mut self, key: SessionKey, attribute: &str, value: String) {
        let idx = self.upsert(key);
        let (key, record) = &mut self.entries[idx];
        record.set(fields::USER_NAME, key.user.clone());
        record.set(fields::IP_ADDRESS, key.addr.clone());
        record.set(fields::TIMESTAMP, key.timestamp.clone());
        if let Some(column) = fields::canonical(attribute) {
            record.set(column, value);
        }
    }

    /// Records in first-seen key order.
    pub fn iter(&self) -> impl Iterator<Item = (&SessionKey, &SessionRecord)> {
        self.entries.iter().map(|(key, record)| (key, record))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fold another table into this one.
    ///
    /// Keys unseen here are appended in the other table's order; keys seen
    /// in both take the other table's field values (last write wins). Column
    /// names are distinct per record, so the per-record application order
    /// does not affect the result.
    pub fn merge(&mut self, other: SessionTable) {
        for (key, record) in other.entries {
            let idx = self.upsert(key);
            let (_, target) = &mut self.entries[idx];
            for (column, value) in record.fields {
                target.set(column, value);
            }
        }
    }

    fn upsert(&mut self, key: SessionKey) -> usize {
        if let Some(&idx) = self.index.get(&key) {
            return idx;
        }
        let idx = self.entries.len();
        self.index.insert(key.clone(), idx);
        self.entries.push((key, SessionRecord::default()));
        idx
    }
}
