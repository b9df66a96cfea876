//! Cross-field numeric invariants on market data and transactions.

use fakedata_core::{
    config::{GenConfig, RecordCounts},
    pipeline::Dataset,
};

fn dataset() -> Dataset {
    let config = GenConfig {
        seed: 2024,
        counts: RecordCounts {
            transactions: 2_000,
            market_data: 2_000,
            ..RecordCounts::default()
        },
        ..GenConfig::default_test()
    };
    Dataset::generate(&config.context(), &config.counts).unwrap()
}

#[test]
fn ohlc_bars_bracket_open_and_close() {
    let d = dataset();
    for p in &d.market_data {
        assert!(
            p.high_price >= p.open_price.max(p.close_price),
            "high below body in row {}: {p:?}",
            p.market_data_id
        );
        assert!(
            p.low_price <= p.open_price.min(p.close_price),
            "low above body in row {}: {p:?}",
            p.market_data_id
        );
        assert!(p.low_price > 0.0);
    }
}

#[test]
fn close_stays_within_ten_percent_of_open() {
    let d = dataset();
    for p in &d.market_data {
        let limit = p.open_price * 0.10 + 0.005;
        assert!((p.close_price - p.open_price).abs() <= limit, "{p:?}");
    }
}

#[test]
fn units_match_amount_over_price() {
    let d = dataset();
    for t in &d.transactions {
        let expected = t.transaction_amount / t.transaction_price;
        assert!(
            (t.units - expected).abs() <= 0.005 + 1e-9,
            "transaction {}: units {} vs {expected}",
            t.transaction_id,
            t.units
        );
        assert!((t.total_transaction_value - t.transaction_amount).abs() <= 0.005 + 1e-9);
    }
}

#[test]
fn monetary_fields_have_two_decimals() {
    let d = dataset();
    let two_dp = |v: f64| ((v * 100.0).round() - v * 100.0).abs() < 1e-6;
    for t in &d.transactions {
        assert!(two_dp(t.transaction_price));
        assert!(two_dp(t.transaction_fees));
        assert!(two_dp(t.units));
    }
    for p in &d.portfolios {
        assert!(two_dp(p.total_asset_value));
    }
}
