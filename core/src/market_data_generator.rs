//! Daily OHLC market data per asset.
//!
//! Only `Open_Price` is sampled freely. Close moves at most ±10% from
//! open; high and low then bracket both, so every bar is internally
//! consistent: low <= min(open, close) <= max(open, close) <= high.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    asset_generator::Asset,
    calendar::DateWindow,
    context::GenContext,
    error::GenResult,
    rng::{round2, TableRng},
    table::{Record, Table, TableKind},
    types::{dense_id, AssetId, MarketDataId},
};

pub const MIN_OPEN: f64 = 50.0;
pub const MAX_OPEN: f64 = 500.0;
pub const MAX_CLOSE_MOVE: f64 = 0.10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketDataPoint {
    #[serde(rename = "Market_Data_ID")]
    pub market_data_id: MarketDataId,
    #[serde(rename = "Asset_ID")]
    pub asset_id: AssetId,
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Open_Price")]
    pub open_price: f64,
    #[serde(rename = "Close_Price")]
    pub close_price: f64,
    #[serde(rename = "High_Price")]
    pub high_price: f64,
    #[serde(rename = "Low_Price")]
    pub low_price: f64,
    #[serde(rename = "Trading_Volume")]
    pub trading_volume: u64,
    #[serde(rename = "News_Sentiment_Score")]
    pub news_sentiment_score: f64,
    #[serde(rename = "Social_Media_Sentiment_Score")]
    pub social_media_sentiment_score: f64,
}

impl Record for MarketDataPoint {
    const KIND: TableKind = TableKind::MarketData;
    type Key = MarketDataId;

    fn key(&self) -> MarketDataId {
        self.market_data_id
    }
}

/// Rounded OHLC quadruple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    pub open: f64,
    pub close: f64,
    pub high: f64,
    pub low: f64,
}

impl Bar {
    /// Derive close/high/low from a sampled open.
    ///
    /// Rounding can only pull high below max(open, close) or push low
    /// above min(open, close) by half a cent, so both are clamped back.
    pub fn sample(rng: &mut TableRng) -> Self {
        let open = round2(rng.uniform(MIN_OPEN, MAX_OPEN));
        let close = round2(open * rng.uniform(1.0 - MAX_CLOSE_MOVE, 1.0 + MAX_CLOSE_MOVE));
        let top = open.max(close);
        let bottom = open.min(close);
        let high = round2(top * rng.uniform(1.0, 1.1)).max(top);
        let low = round2(bottom * rng.uniform(0.9, 1.0)).min(bottom);
        Self { open, close, high, low }
    }
}

pub fn generate_market_data(
    ctx: &GenContext,
    assets: &Table<Asset>,
    count: usize,
) -> GenResult<Table<MarketDataPoint>> {
    let mut rng = ctx.rng(TableKind::MarketData);
    let mut points = Vec::with_capacity(count);

    for i in 0..count {
        let asset_id = assets.sample_key(TableKind::MarketData, &mut rng)?;
        let date = ctx.date(DateWindow::ThisYear, &mut rng);
        let bar = Bar::sample(&mut rng);
        points.push(MarketDataPoint {
            market_data_id: dense_id(i),
            asset_id,
            date,
            open_price: bar.open,
            close_price: bar.close,
            high_price: bar.high,
            low_price: bar.low,
            trading_volume: rng.int_between(100_000, 1_000_000) as u64,
            news_sentiment_score: round2(rng.uniform(-1.0, 1.0)),
            social_media_sentiment_score: round2(rng.uniform(-1.0, 1.0)),
        });
    }

    log::info!("market_data: generated {} rows", points.len());
    Ok(Table::from_rows(points))
}
