//! Performance metrics for an asset held within a portfolio.

use serde::{Deserialize, Serialize};

use crate::{
    asset_generator::Asset,
    context::GenContext,
    error::GenResult,
    portfolio_generator::Portfolio,
    rng::round2,
    table::{Record, Table, TableKind},
    types::{dense_id, AssetId, PerformanceId, PortfolioId},
    vocab::TimePeriod,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetric {
    #[serde(rename = "Performance_ID")]
    pub performance_id: PerformanceId,
    #[serde(rename = "Asset_ID")]
    pub asset_id: AssetId,
    #[serde(rename = "Portfolio_ID")]
    pub portfolio_id: PortfolioId,
    #[serde(rename = "Time_Period")]
    pub time_period: TimePeriod,
    #[serde(rename = "Return_Percentage")]
    pub return_percentage: f64,
    #[serde(rename = "Price_Change")]
    pub price_change: f64,
    #[serde(rename = "Risk_Adjusted_Return")]
    pub risk_adjusted_return: f64,
    #[serde(rename = "Benchmark_Performance")]
    pub benchmark_performance: f64,
    #[serde(rename = "Dividend_Payouts")]
    pub dividend_payouts: f64,
}

impl Record for PerformanceMetric {
    const KIND: TableKind = TableKind::PerformanceMetrics;
    type Key = PerformanceId;

    fn key(&self) -> PerformanceId {
        self.performance_id
    }
}

pub fn generate_performance_metrics(
    ctx: &GenContext,
    assets: &Table<Asset>,
    portfolios: &Table<Portfolio>,
    count: usize,
) -> GenResult<Table<PerformanceMetric>> {
    let mut rng = ctx.rng(TableKind::PerformanceMetrics);
    let mut metrics = Vec::with_capacity(count);

    for i in 0..count {
        let asset_id = assets.sample_key(TableKind::PerformanceMetrics, &mut rng)?;
        let portfolio_id = portfolios.sample_key(TableKind::PerformanceMetrics, &mut rng)?;
        metrics.push(PerformanceMetric {
            performance_id: dense_id(i),
            asset_id,
            portfolio_id,
            time_period: rng.pick_variant(),
            return_percentage: round2(rng.uniform(-10.0, 20.0)),
            price_change: round2(rng.uniform(-5.0, 10.0)),
            risk_adjusted_return: round2(rng.uniform(0.0, 15.0)),
            benchmark_performance: round2(rng.uniform(-5.0, 10.0)),
            dividend_payouts: round2(rng.uniform(0.0, 5.0)),
        });
    }

    log::info!("performance_metrics: generated {} rows", metrics.len());
    Ok(Table::from_rows(metrics))
}
