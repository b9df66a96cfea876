//! fakedata-core: deterministic synthetic dataset for an
//! investment-advisory platform.
//!
//! Users, portfolios, assets, transactions, performance metrics,
//! market data, behavior preferences, recommendations and dashboard
//! layouts, generated from a single seed and written as JSON.

pub mod asset_generator;
pub mod behavior_generator;
pub mod calendar;
pub mod config;
pub mod context;
pub mod dashboard_generator;
pub mod error;
pub mod manifest;
pub mod market_data_generator;
pub mod name_generator;
pub mod performance_generator;
pub mod pipeline;
pub mod portfolio_generator;
pub mod recommendation_generator;
pub mod rng;
pub mod sink;
pub mod table;
pub mod transaction_generator;
pub mod types;
pub mod user_generator;
pub mod vocab;
