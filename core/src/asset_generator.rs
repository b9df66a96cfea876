//! Assets — the independent instrument catalog.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    calendar::DateWindow,
    context::GenContext,
    name_generator::NameGenerator,
    rng::round2,
    table::{Record, Table, TableKind},
    types::{dense_id, AssetId},
    vocab::{AssetType, EthicalFocus, Exchange, RiskLevel, Sector},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    #[serde(rename = "Asset_ID")]
    pub asset_id: AssetId,
    #[serde(rename = "Asset_Name")]
    pub asset_name: String,
    #[serde(rename = "Ticker_Symbol")]
    pub ticker_symbol: String,
    #[serde(rename = "Asset_Type")]
    pub asset_type: AssetType,
    #[serde(rename = "Sector")]
    pub sector: Sector,
    #[serde(rename = "Market")]
    pub market: Exchange,
    #[serde(rename = "Risk_Level")]
    pub risk_level: RiskLevel,
    #[serde(rename = "Expected_Return_Rate")]
    pub expected_return_rate: f64,
    #[serde(rename = "Volatility")]
    pub volatility: f64,
    #[serde(rename = "Dividend_Yield")]
    pub dividend_yield: f64,
    #[serde(rename = "ESG_Score")]
    pub esg_score: u32,
    #[serde(rename = "Ethical_Alignment")]
    pub ethical_alignment: EthicalFocus,
    #[serde(rename = "Market_Cap")]
    pub market_cap: f64,
    #[serde(rename = "Inception_Date")]
    pub inception_date: NaiveDate,
}

impl Record for Asset {
    const KIND: TableKind = TableKind::Assets;
    type Key = AssetId;

    fn key(&self) -> AssetId {
        self.asset_id
    }
}

pub fn generate_assets(ctx: &GenContext, count: usize) -> Table<Asset> {
    let mut rng = ctx.rng(TableKind::Assets);
    let mut assets = Vec::with_capacity(count);

    for i in 0..count {
        assets.push(Asset {
            asset_id: dense_id(i),
            asset_name: NameGenerator::company(&mut rng),
            ticker_symbol: NameGenerator::ticker(&mut rng),
            asset_type: rng.pick_variant(),
            sector: rng.pick_variant(),
            market: rng.pick_variant(),
            risk_level: rng.pick_variant(),
            expected_return_rate: round2(rng.uniform(2.0, 10.0)),
            volatility: round2(rng.uniform(5.0, 20.0)),
            dividend_yield: round2(rng.uniform(0.0, 5.0)),
            esg_score: rng.int_between(50, 100) as u32,
            ethical_alignment: rng.pick_variant(),
            market_cap: round2(rng.uniform(1e6, 1e10)),
            inception_date: ctx.date(DateWindow::ThisCentury, &mut rng),
        });
    }

    log::info!("assets: generated {} rows", assets.len());
    Table::from_rows(assets)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> GenContext {
        GenContext::new(3, NaiveDate::from_ymd_opt(2024, 6, 30).unwrap())
    }

    #[test]
    fn zero_assets_is_an_empty_table() {
        assert!(generate_assets(&ctx(), 0).is_empty());
    }

    #[test]
    fn numeric_fields_stay_in_range() {
        let assets = generate_assets(&ctx(), 200);
        for a in &assets {
            assert!(a.expected_return_rate >= 2.0 && a.expected_return_rate <= 10.0);
            assert!(a.volatility >= 5.0 && a.volatility <= 20.0);
            assert!(a.dividend_yield >= 0.0 && a.dividend_yield <= 5.0);
            assert!((50..=100).contains(&a.esg_score));
            assert!(a.market_cap >= 1e6 && a.market_cap <= 1e10);
            assert!(a.inception_date >= NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
            assert_eq!(a.ticker_symbol.len(), 3);
        }
    }

    #[test]
    fn ids_are_dense() {
        let assets = generate_assets(&ctx(), 20);
        let ids: Vec<_> = assets.keys().collect();
        assert_eq!(ids, (1..=20).collect::<Vec<u64>>());
    }
}
