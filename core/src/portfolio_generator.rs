//! Portfolios — each owned by a user sampled from the users table.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    calendar::DateWindow,
    context::GenContext,
    error::GenResult,
    name_generator::NameGenerator,
    rng::{round2, TableRng},
    table::{Record, Table, TableKind},
    types::{dense_id, PortfolioId, UserId},
    user_generator::User,
    vocab::{GoalType, InvestmentStrategy, RiskLevel},
};

/// Target weight per asset class, in whole percentage points.
/// Weights are drawn independently and are not normalised to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetDistribution {
    #[serde(rename = "Equity")]
    pub equity: u32,
    #[serde(rename = "Bonds")]
    pub bonds: u32,
    #[serde(rename = "Cash")]
    pub cash: u32,
}

impl AssetDistribution {
    pub const EQUITY_RANGE: (i64, i64) = (40, 80);
    pub const BONDS_RANGE: (i64, i64) = (10, 40);
    pub const CASH_RANGE: (i64, i64) = (5, 20);

    fn sample(rng: &mut TableRng) -> Self {
        Self {
            equity: rng.int_between(Self::EQUITY_RANGE.0, Self::EQUITY_RANGE.1) as u32,
            bonds: rng.int_between(Self::BONDS_RANGE.0, Self::BONDS_RANGE.1) as u32,
            cash: rng.int_between(Self::CASH_RANGE.0, Self::CASH_RANGE.1) as u32,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    #[serde(rename = "Portfolio_ID")]
    pub portfolio_id: PortfolioId,
    #[serde(rename = "User_ID")]
    pub user_id: UserId,
    #[serde(rename = "Portfolio_Name")]
    pub portfolio_name: String,
    #[serde(rename = "Creation_Date")]
    pub creation_date: NaiveDate,
    #[serde(rename = "Risk_Tolerance")]
    pub risk_tolerance: RiskLevel,
    #[serde(rename = "Goal_Type")]
    pub goal_type: GoalType,
    #[serde(rename = "Investment_Strategy")]
    pub investment_strategy: InvestmentStrategy,
    #[serde(rename = "Total_Asset_Value")]
    pub total_asset_value: f64,
    #[serde(rename = "Asset_Distribution")]
    pub asset_distribution: AssetDistribution,
}

impl Record for Portfolio {
    const KIND: TableKind = TableKind::Portfolios;
    type Key = PortfolioId;

    fn key(&self) -> PortfolioId {
        self.portfolio_id
    }
}

pub const MIN_TOTAL_VALUE: f64 = 50_000.0;
pub const MAX_TOTAL_VALUE: f64 = 500_000.0;

pub fn generate_portfolios(
    ctx: &GenContext,
    users: &Table<User>,
    count: usize,
) -> GenResult<Table<Portfolio>> {
    let mut rng = ctx.rng(TableKind::Portfolios);
    let mut portfolios = Vec::with_capacity(count);

    for i in 0..count {
        let user_id = users.sample_key(TableKind::Portfolios, &mut rng)?;
        portfolios.push(Portfolio {
            portfolio_id: dense_id(i),
            user_id,
            portfolio_name: NameGenerator::fund_name(&mut rng),
            creation_date: ctx.date(DateWindow::ThisDecade, &mut rng),
            risk_tolerance: rng.pick_variant(),
            goal_type: rng.pick_variant(),
            investment_strategy: rng.pick_variant(),
            total_asset_value: round2(rng.uniform(MIN_TOTAL_VALUE, MAX_TOTAL_VALUE)),
            asset_distribution: AssetDistribution::sample(&mut rng),
        });
    }

    log::info!(
        "portfolios: generated {} rows across {} users",
        portfolios.len(),
        users.len()
    );
    Ok(Table::from_rows(portfolios))
}
