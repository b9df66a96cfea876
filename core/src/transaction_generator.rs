//! Transactions — buys and sells of an asset within a portfolio.
//!
//! `Units` and `Total_Transaction_Value` are derived, not sampled.
//! Units divide by the rounded price that is written out, so the
//! serialized row is self-consistent to two decimals.

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
    types::{dense_id, AssetId, PortfolioId, TransactionId},
    vocab::TransactionType,
};

pub const MIN_AMOUNT: f64 = 1_000.0;
pub const MAX_AMOUNT: f64 = 50_000.0;
pub const MIN_PRICE: f64 = 50.0;
pub const MAX_PRICE: f64 = 500.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "Transaction_ID")]
    pub transaction_id: TransactionId,
    #[serde(rename = "Portfolio_ID")]
    pub portfolio_id: PortfolioId,
    #[serde(rename = "Asset_ID")]
    pub asset_id: AssetId,
    #[serde(rename = "Transaction_Type")]
    pub transaction_type: TransactionType,
    #[serde(rename = "Transaction_Date")]
    pub transaction_date: NaiveDate,
    #[serde(rename = "Transaction_Amount")]
    pub transaction_amount: f64,
    #[serde(rename = "Units")]
    pub units: f64,
    #[serde(rename = "Transaction_Price")]
    pub transaction_price: f64,
    #[serde(rename = "Total_Transaction_Value")]
    pub total_transaction_value: f64,
    #[serde(rename = "Transaction_Fees")]
    pub transaction_fees: f64,
}

impl Record for Transaction {
    const KIND: TableKind = TableKind::Transactions;
    type Key = TransactionId;

    fn key(&self) -> TransactionId {
        self.transaction_id
    }
}

pub fn generate_transactions(
    ctx: &GenContext,
    portfolios: &Table<Portfolio>,
    assets: &Table<Asset>,
    count: usize,
) -> GenResult<Table<Transaction>> {
    let mut rng = ctx.rng(TableKind::Transactions);
    let mut transactions = Vec::with_capacity(count);

    for i in 0..count {
        let portfolio_id = portfolios.sample_key(TableKind::Transactions, &mut rng)?;
        let asset_id = assets.sample_key(TableKind::Transactions, &mut rng)?;
        let amount = rng.uniform(MIN_AMOUNT, MAX_AMOUNT);
        let price = round2(rng.uniform(MIN_PRICE, MAX_PRICE));

        transactions.push(Transaction {
            transaction_id: dense_id(i),
            portfolio_id,
            asset_id,
            transaction_type: rng.pick_variant(),
            transaction_date: ctx.date(DateWindow::ThisYear, &mut rng),
            transaction_amount: amount,
            units: round2(amount / price),
            transaction_price: price,
            total_transaction_value: round2(amount),
            transaction_fees: round2(rng.uniform(1.0, 100.0)),
        });
    }

    log::info!("transactions: generated {} rows", transactions.len());
    Ok(Table::from_rows(transactions))
}
