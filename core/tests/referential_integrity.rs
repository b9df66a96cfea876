//! Keys and foreign keys across a full dataset.

use fakedata_core::{
    config::{GenConfig, RecordCounts},
    pipeline::Dataset,
    table::{Record, Table},
};
use std::collections::HashSet;

fn big_dataset(seed: u64) -> Dataset {
    let config = GenConfig {
        seed,
        counts: RecordCounts {
            users: 25,
            portfolios: 60,
            assets: 40,
            transactions: 400,
            performance_metrics: 300,
            market_data: 400,
            recommendations: 200,
        },
        ..GenConfig::default_test()
    };
    Dataset::generate(&config.context(), &config.counts).unwrap()
}

fn assert_dense<R: Record<Key = u64>>(table: &Table<R>) {
    let ids: Vec<u64> = table.keys().collect();
    let expected: Vec<u64> = (1..=table.len() as u64).collect();
    assert_eq!(ids, expected, "{} ids are not dense and 1-based", table.kind());
}

#[test]
fn primary_keys_are_dense_and_one_based() {
    let d = big_dataset(1);
    assert_dense(&d.users);
    assert_dense(&d.portfolios);
    assert_dense(&d.assets);
    assert_dense(&d.transactions);
    assert_dense(&d.performance_metrics);
    assert_dense(&d.market_data);
    assert_dense(&d.recommendations);
}

#[test]
fn layout_ids_are_unique() {
    let d = big_dataset(2);
    let ids: HashSet<_> = d.dashboard_layouts.keys().collect();
    assert_eq!(ids.len(), d.dashboard_layouts.len());
}

#[test]
fn one_to_one_tables_cover_every_user_once() {
    let d = big_dataset(3);
    let users: Vec<u64> = d.users.keys().collect();
    let prefs: Vec<u64> = d.behavior_preferences.keys().collect();
    let layout_users: Vec<u64> = d.dashboard_layouts.iter().map(|l| l.user_id).collect();
    assert_eq!(prefs, users);
    assert_eq!(layout_users, users);
}

#[test]
fn every_foreign_key_resolves() {
    for seed in [4, 5, 6] {
        let d = big_dataset(seed);
        for p in &d.portfolios {
            assert!(d.users.contains_key(p.user_id));
        }
        for t in &d.transactions {
            assert!(d.portfolios.contains_key(t.portfolio_id));
            assert!(d.assets.contains_key(t.asset_id));
        }
        for m in &d.performance_metrics {
            assert!(d.assets.contains_key(m.asset_id));
            assert!(d.portfolios.contains_key(m.portfolio_id));
        }
        for m in &d.market_data {
            assert!(d.assets.contains_key(m.asset_id));
        }
        for r in &d.recommendations {
            assert!(d.users.contains_key(r.user_id));
            assert!(d.portfolios.contains_key(r.portfolio_id));
            assert!(d.assets.contains_key(r.asset_id));
        }
    }
}

#[test]
fn sampling_is_with_replacement() {
    // 400 transactions over 60 portfolios must reuse portfolio ids.
    let d = big_dataset(7);
    let distinct: HashSet<u64> = d.transactions.iter().map(|t| t.portfolio_id).collect();
    assert!(distinct.len() < d.transactions.len());
}
