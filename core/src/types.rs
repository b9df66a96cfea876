//! Shared primitive types used across every table.

/// Dense, 1-based sequential identifier.
pub type UserId = u64;
pub type PortfolioId = u64;
pub type AssetId = u64;
pub type TransactionId = u64;
pub type PerformanceId = u64;
pub type MarketDataId = u64;
pub type RecommendationId = u64;

/// Dashboard layouts are keyed by an RNG-backed UUID rather than a counter.
pub type LayoutId = uuid::Uuid;

/// Convert a 0-based loop index into a dense 1-based id.
pub fn dense_id(index: usize) -> u64 {
    index as u64 + 1
}
