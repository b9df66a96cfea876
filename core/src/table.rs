//! Table and record contracts.
//!
//! RULE: A table is built once by its generator and never mutated.
//! Dependent generators only read finished tables, and only through
//! `sample_key`, so every foreign key points at an existing row.

use serde::Serialize;
use std::{fmt, hash::Hash};

use crate::{
    error::{GenError, GenResult},
    rng::TableRng,
};

/// Every table in the dataset.
///
/// The discriminant doubles as the table's RNG slot.
/// NEVER reorder or remove entries — only append.
/// Reordering changes every table's seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u64)]
pub enum TableKind {
    Users = 0,
    Portfolios = 1,
    Assets = 2,
    Transactions = 3,
    PerformanceMetrics = 4,
    MarketData = 5,
    BehaviorPreferences = 6,
    Recommendations = 7,
    DashboardLayouts = 8,
    // Add new tables here — append only.
}

impl TableKind {
    /// Generation and write order.
    pub const ALL: [TableKind; 9] = [
        Self::Users,
        Self::Portfolios,
        Self::Assets,
        Self::Transactions,
        Self::PerformanceMetrics,
        Self::MarketData,
        Self::BehaviorPreferences,
        Self::Recommendations,
        Self::DashboardLayouts,
    ];

    pub fn slot(&self) -> u64 {
        *self as u64
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Portfolios => "portfolios",
            Self::Assets => "assets",
            Self::Transactions => "transactions",
            Self::PerformanceMetrics => "performance_metrics",
            Self::MarketData => "market_data",
            Self::BehaviorPreferences => "user_behavior_preferences",
            Self::Recommendations => "investment_recommendations",
            Self::DashboardLayouts => "dashboard_layouts",
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.json", self.name())
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One row of a table.
pub trait Record: Serialize {
    const KIND: TableKind;

    type Key: Copy + Eq + Hash + fmt::Debug;

    /// The primary key of this row.
    fn key(&self) -> Self::Key;
}

/// An ordered, immutable sequence of records.
/// Serializes as a plain JSON array.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Table<R> {
    rows: Vec<R>,
}

impl<R: Record> Table<R> {
    pub fn from_rows(rows: Vec<R>) -> Self {
        Self { rows }
    }

    pub fn empty() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn kind(&self) -> TableKind {
        R::KIND
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.rows.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = R::Key> + '_ {
        self.rows.iter().map(R::key)
    }

    pub fn contains_key(&self, key: R::Key) -> bool {
        self.keys().any(|k| k == key)
    }

    /// Uniformly sample a primary key, with replacement.
    ///
    /// Fails with `EmptyReference` rather than sampling an empty key set;
    /// `dependent` names the table asking for the key.
    pub fn sample_key(&self, dependent: TableKind, rng: &mut TableRng) -> GenResult<R::Key> {
        if self.rows.is_empty() {
            return Err(GenError::EmptyReference {
                dependent,
                referenced: R::KIND,
            });
        }
        Ok(rng.pick(&self.rows).key())
    }
}

impl<'a, R> IntoIterator for &'a Table<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::RngBank;

    #[derive(Serialize)]
    struct Row {
        id: u64,
    }

    impl Record for Row {
        const KIND: TableKind = TableKind::Assets;
        type Key = u64;

        fn key(&self) -> u64 {
            self.id
        }
    }

    #[test]
    fn sample_key_draws_from_existing_rows() {
        let table = Table::from_rows(vec![Row { id: 4 }, Row { id: 9 }]);
        let mut rng = RngBank::new(1).for_table(TableKind::Transactions);
        for _ in 0..50 {
            let k = table.sample_key(TableKind::Transactions, &mut rng).unwrap();
            assert!(k == 4 || k == 9);
        }
    }

    #[test]
    fn sample_key_on_empty_table_is_an_error() {
        let table: Table<Row> = Table::empty();
        let mut rng = RngBank::new(1).for_table(TableKind::Transactions);
        let err = table
            .sample_key(TableKind::Transactions, &mut rng)
            .unwrap_err();
        assert!(matches!(
            err,
            GenError::EmptyReference {
                dependent: TableKind::Transactions,
                referenced: TableKind::Assets,
            }
        ));
    }

    #[test]
    fn table_serializes_as_array() {
        let table = Table::from_rows(vec![Row { id: 1 }, Row { id: 2 }]);
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"[{"id":1},{"id":2}]"#);
    }

    #[test]
    fn slots_match_generation_order() {
        for (i, kind) in TableKind::ALL.iter().enumerate() {
            assert_eq!(kind.slot(), i as u64);
        }
    }
}
