//! The dataset pipeline — generate every table, then write every table.
//!
//! GENERATION ORDER (fixed, documented, never reordered):
//!   1. Users
//!   2. Portfolios            (users)
//!   3. Assets
//!   4. Transactions          (portfolios, assets)
//!   5. Performance metrics   (assets, portfolios)
//!   6. Market data           (assets)
//!   7. Behavior preferences  (users, one per user)
//!   8. Recommendations       (users, portfolios, assets)
//!   9. Dashboard layouts     (users, one per user)
//!
//! RULES:
//!   - A generator only reads tables that appear earlier in the list.
//!   - Counts are validated before the first table is generated.
//!   - Tables are written in the same order; the first I/O error aborts the run.
//!   - The manifest is written last.

use crate::{
    asset_generator::{generate_assets, Asset},
    behavior_generator::{generate_behavior_preferences, BehaviorPreference},
    config::RecordCounts,
    context::GenContext,
    dashboard_generator::{generate_dashboard_layouts, DashboardLayout},
    error::GenResult,
    manifest::{RunManifest, MANIFEST_FILE},
    market_data_generator::{generate_market_data, MarketDataPoint},
    performance_generator::{generate_performance_metrics, PerformanceMetric},
    portfolio_generator::{generate_portfolios, Portfolio},
    recommendation_generator::{generate_recommendations, Recommendation},
    sink::JsonSink,
    table::{Record, Table, TableKind},
    transaction_generator::{generate_transactions, Transaction},
    user_generator::{generate_users, User},
};

/// All nine tables of one run.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub users: Table<User>,
    pub portfolios: Table<Portfolio>,
    pub assets: Table<Asset>,
    pub transactions: Table<Transaction>,
    pub performance_metrics: Table<PerformanceMetric>,
    pub market_data: Table<MarketDataPoint>,
    pub behavior_preferences: Table<BehaviorPreference>,
    pub recommendations: Table<Recommendation>,
    pub dashboard_layouts: Table<DashboardLayout>,
}

/// First rows of one table, pre-rendered for the console.
#[derive(Debug, Clone)]
pub struct TablePreview {
    pub kind: TableKind,
    pub total_rows: usize,
    pub lines: Vec<String>,
}

impl Dataset {
    pub fn generate(ctx: &GenContext, counts: &RecordCounts) -> GenResult<Self> {
        counts.validate()?;
        log::info!(
            "pipeline: generating dataset seed={} as_of={}",
            ctx.seed(),
            ctx.as_of()
        );

        let users = generate_users(ctx, counts.users);
        let portfolios = generate_portfolios(ctx, &users, counts.portfolios)?;
        let assets = generate_assets(ctx, counts.assets);
        let transactions = generate_transactions(ctx, &portfolios, &assets, counts.transactions)?;
        let performance_metrics =
            generate_performance_metrics(ctx, &assets, &portfolios, counts.performance_metrics)?;
        let market_data = generate_market_data(ctx, &assets, counts.market_data)?;
        let behavior_preferences = generate_behavior_preferences(ctx, &users);
        let recommendations =
            generate_recommendations(ctx, &users, &portfolios, &assets, counts.recommendations)?;
        let dashboard_layouts = generate_dashboard_layouts(ctx, &users);

        Ok(Self {
            users,
            portfolios,
            assets,
            transactions,
            performance_metrics,
            market_data,
            behavior_preferences,
            recommendations,
            dashboard_layouts,
        })
    }

    /// Row count per table, in generation order.
    pub fn row_counts(&self) -> Vec<(TableKind, usize)> {
        vec![
            (TableKind::Users, self.users.len()),
            (TableKind::Portfolios, self.portfolios.len()),
            (TableKind::Assets, self.assets.len()),
            (TableKind::Transactions, self.transactions.len()),
            (TableKind::PerformanceMetrics, self.performance_metrics.len()),
            (TableKind::MarketData, self.market_data.len()),
            (TableKind::BehaviorPreferences, self.behavior_preferences.len()),
            (TableKind::Recommendations, self.recommendations.len()),
            (TableKind::DashboardLayouts, self.dashboard_layouts.len()),
        ]
    }

    /// Write every table, then the manifest. Stops at the first error;
    /// files already written stay in place.
    pub fn write_all(
        &self,
        sink: &JsonSink,
        ctx: &GenContext,
        counts: &RecordCounts,
    ) -> GenResult<RunManifest> {
        sink.write_table(&self.users)?;
        sink.write_table(&self.portfolios)?;
        sink.write_table(&self.assets)?;
        sink.write_table(&self.transactions)?;
        sink.write_table(&self.performance_metrics)?;
        sink.write_table(&self.market_data)?;
        sink.write_table(&self.behavior_preferences)?;
        sink.write_table(&self.recommendations)?;
        sink.write_table(&self.dashboard_layouts)?;

        let mut manifest = RunManifest::new(ctx, *counts);
        for (kind, rows) in self.row_counts() {
            manifest.record(kind, rows);
        }
        sink.write_json(MANIFEST_FILE, &manifest)?;
        log::info!("pipeline: wrote {} tables to {}", manifest.tables.len(), sink.dir().display());
        Ok(manifest)
    }

    /// Compact one-line JSON for the first `rows` rows of each table.
    pub fn preview(&self, rows: usize) -> GenResult<Vec<TablePreview>> {
        Ok(vec![
            preview_table(&self.users, rows)?,
            preview_table(&self.portfolios, rows)?,
            preview_table(&self.assets, rows)?,
            preview_table(&self.transactions, rows)?,
            preview_table(&self.performance_metrics, rows)?,
            preview_table(&self.market_data, rows)?,
            preview_table(&self.behavior_preferences, rows)?,
            preview_table(&self.recommendations, rows)?,
            preview_table(&self.dashboard_layouts, rows)?,
        ])
    }
}

fn preview_table<R: Record>(table: &Table<R>, rows: usize) -> GenResult<TablePreview> {
    let lines = table
        .iter()
        .take(rows)
        .map(serde_json::to_string)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(TablePreview {
        kind: table.kind(),
        total_rows: table.len(),
        lines,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GenConfig;

    #[test]
    fn reference_counts_produce_reference_sizes() {
        let config = GenConfig::default_test();
        let dataset = Dataset::generate(&config.context(), &config.counts).unwrap();
        let counts: Vec<usize> = dataset.row_counts().into_iter().map(|(_, n)| n).collect();
        assert_eq!(counts, vec![10, 15, 20, 30, 25, 30, 10, 15, 10]);
    }

    #[test]
    fn row_counts_follow_generation_order() {
        let config = GenConfig::default_test();
        let dataset = Dataset::generate(&config.context(), &config.counts).unwrap();
        let kinds: Vec<TableKind> = dataset.row_counts().into_iter().map(|(k, _)| k).collect();
        assert_eq!(kinds, TableKind::ALL.to_vec());
    }

    #[test]
    fn preview_truncates_each_table() {
        let config = GenConfig::default_test();
        let dataset = Dataset::generate(&config.context(), &config.counts).unwrap();
        let previews = dataset.preview(3).unwrap();
        assert_eq!(previews.len(), 9);
        for p in previews {
            assert_eq!(p.lines.len(), 3.min(p.total_rows));
            assert!(p.lines.iter().all(|l| l.starts_with('{')));
        }
    }

    #[test]
    fn invalid_counts_are_rejected_before_generation() {
        let config = GenConfig::default_test();
        let counts = RecordCounts {
            assets: 0,
            ..config.counts
        };
        assert!(Dataset::generate(&config.context(), &counts).is_err());
    }
}
