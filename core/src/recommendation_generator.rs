//! Investment recommendations linking a user, a portfolio and an asset.
//!
//! The three keys are sampled independently: a recommendation's
//! portfolio need not belong to its user.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    asset_generator::Asset,
    calendar::DateWindow,
    context::GenContext,
    error::GenResult,
    portfolio_generator::Portfolio,
    rng::round2,
    table::{Record, Table, TableKind},
    types::{dense_id, AssetId, PortfolioId, RecommendationId, UserId},
    user_generator::User,
    vocab::{EsgPillar, InvestmentHorizon, RecommendationReason, RiskLevel},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "Recommendation_ID")]
    pub recommendation_id: RecommendationId,
    #[serde(rename = "User_ID")]
    pub user_id: UserId,
    #[serde(rename = "Portfolio_ID")]
    pub portfolio_id: PortfolioId,
    #[serde(rename = "Asset_ID")]
    pub asset_id: AssetId,
    #[serde(rename = "Recommendation_Date")]
    pub recommendation_date: NaiveDate,
    #[serde(rename = "Reason")]
    pub reason: RecommendationReason,
    #[serde(rename = "Expected_Return")]
    pub expected_return: f64,
    #[serde(rename = "Risk_Level")]
    pub risk_level: RiskLevel,
    #[serde(rename = "Ethical_Alignment")]
    pub ethical_alignment: EsgPillar,
    #[serde(rename = "Investment_Horizon")]
    pub investment_horizon: InvestmentHorizon,
}

impl Record for Recommendation {
    const KIND: TableKind = TableKind::Recommendations;
    type Key = RecommendationId;

    fn key(&self) -> RecommendationId {
        self.recommendation_id
    }
}

pub fn generate_recommendations(
    ctx: &GenContext,
    users: &Table<User>,
    portfolios: &Table<Portfolio>,
    assets: &Table<Asset>,
    count: usize,
) -> GenResult<Table<Recommendation>> {
    let mut rng = ctx.rng(TableKind::Recommendations);
    let mut recommendations = Vec::with_capacity(count);

    for i in 0..count {
        let user_id = users.sample_key(TableKind::Recommendations, &mut rng)?;
        let portfolio_id = portfolios.sample_key(TableKind::Recommendations, &mut rng)?;
        let asset_id = assets.sample_key(TableKind::Recommendations, &mut rng)?;
        recommendations.push(Recommendation {
            recommendation_id: dense_id(i),
            user_id,
            portfolio_id,
            asset_id,
            recommendation_date: ctx.date(DateWindow::ThisYear, &mut rng),
            reason: rng.pick_variant(),
            expected_return: round2(rng.uniform(2.0, 10.0)),
            risk_level: rng.pick_variant(),
            ethical_alignment: rng.pick_variant(),
            investment_horizon: rng.pick_variant(),
        });
    }

    log::info!("recommendations: generated {} rows", recommendations.len());
    Ok(Table::from_rows(recommendations))
}
