use anyhow::Context;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{
    context::GenContext,
    error::{GenError, GenResult},
    table::TableKind,
};

pub const DEFAULT_SEED: u64 = 0;
pub const DEFAULT_OUTPUT_DIR: &str = "./output";
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// Fixed anchor so a default run is reproducible on any day.
pub fn default_as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 31).unwrap_or(NaiveDate::MIN)
}

/// Row counts for the tables with a configurable size.
/// Behavior preferences and dashboard layouts always follow `users`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordCounts {
    pub users: usize,
    pub portfolios: usize,
    pub assets: usize,
    pub transactions: usize,
    pub performance_metrics: usize,
    pub market_data: usize,
    pub recommendations: usize,
}

impl Default for RecordCounts {
    fn default() -> Self {
        Self {
            users: 10,
            portfolios: 15,
            assets: 20,
            transactions: 30,
            performance_metrics: 25,
            market_data: 30,
            recommendations: 15,
        }
    }
}

impl RecordCounts {
    /// Requested row count for any table.
    pub fn count_for(&self, kind: TableKind) -> usize {
        match kind {
            TableKind::Users => self.users,
            TableKind::Portfolios => self.portfolios,
            TableKind::Assets => self.assets,
            TableKind::Transactions => self.transactions,
            TableKind::PerformanceMetrics => self.performance_metrics,
            TableKind::MarketData => self.market_data,
            TableKind::BehaviorPreferences => self.users,
            TableKind::Recommendations => self.recommendations,
            TableKind::DashboardLayouts => self.users,
        }
    }

    /// Reject any combination that would make a generator sample
    /// foreign keys from an empty table.
    pub fn validate(&self) -> GenResult<()> {
        let dependencies: [(TableKind, &[TableKind]); 5] = [
            (TableKind::Portfolios, &[TableKind::Users]),
            (TableKind::Transactions, &[TableKind::Portfolios, TableKind::Assets]),
            (TableKind::PerformanceMetrics, &[TableKind::Assets, TableKind::Portfolios]),
            (TableKind::MarketData, &[TableKind::Assets]),
            (
                TableKind::Recommendations,
                &[TableKind::Users, TableKind::Portfolios, TableKind::Assets],
            ),
        ];
        for (dependent, referenced) in dependencies {
            if self.count_for(dependent) == 0 {
                continue;
            }
            for r in referenced {
                if self.count_for(*r) == 0 {
                    return Err(GenError::config(format!(
                        "{dependent} count is {} but referenced table {r} has count 0",
                        self.count_for(dependent)
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Counts as they appear in a config file or on the command line.
/// Signed so a negative value can be reported instead of failing to parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CountOverrides {
    pub users: Option<i64>,
    pub portfolios: Option<i64>,
    pub assets: Option<i64>,
    pub transactions: Option<i64>,
    pub performance_metrics: Option<i64>,
    pub market_data: Option<i64>,
    pub recommendations: Option<i64>,
}

impl CountOverrides {
    /// Values in `other` win.
    pub fn merge(self, other: CountOverrides) -> Self {
        Self {
            users: other.users.or(self.users),
            portfolios: other.portfolios.or(self.portfolios),
            assets: other.assets.or(self.assets),
            transactions: other.transactions.or(self.transactions),
            performance_metrics: other.performance_metrics.or(self.performance_metrics),
            market_data: other.market_data.or(self.market_data),
            recommendations: other.recommendations.or(self.recommendations),
        }
    }

    pub fn resolve(&self, base: RecordCounts) -> GenResult<RecordCounts> {
        Ok(RecordCounts {
            users: non_negative("users", self.users, base.users)?,
            portfolios: non_negative("portfolios", self.portfolios, base.portfolios)?,
            assets: non_negative("assets", self.assets, base.assets)?,
            transactions: non_negative("transactions", self.transactions, base.transactions)?,
            performance_metrics: non_negative(
                "performance_metrics",
                self.performance_metrics,
                base.performance_metrics,
            )?,
            market_data: non_negative("market_data", self.market_data, base.market_data)?,
            recommendations: non_negative(
                "recommendations",
                self.recommendations,
                base.recommendations,
            )?,
        })
    }
}

fn non_negative(name: &str, value: Option<i64>, default: usize) -> GenResult<usize> {
    match value {
        None => Ok(default),
        Some(v) if v < 0 => Err(GenError::config(format!(
            "{name} count must be non-negative, got {v}"
        ))),
        Some(v) => usize::try_from(v)
            .map_err(|_| GenError::config(format!("{name} count {v} is too large"))),
    }
}

/// Partial configuration: a JSON file, command-line flags, or both merged.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub seed: Option<u64>,
    pub as_of: Option<NaiveDate>,
    pub output_dir: Option<PathBuf>,
    pub preview_rows: Option<usize>,
    #[serde(default)]
    pub counts: CountOverrides,
}

impl ConfigFile {
    /// Read a JSON config file. Failures surface as `GenError::Other`
    /// with the file path attached as context.
    pub fn load(path: impl AsRef<Path>) -> GenResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read config {}", path.display()))?;
        let file: Self = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(file)
    }

    pub fn from_json(content: &str) -> GenResult<Self> {
        serde_json::from_str(content).map_err(|e| GenError::config(e.to_string()))
    }

    /// Values in `overrides` win.
    pub fn merge(self, overrides: ConfigFile) -> Self {
        Self {
            seed: overrides.seed.or(self.seed),
            as_of: overrides.as_of.or(self.as_of),
            output_dir: overrides.output_dir.or(self.output_dir),
            preview_rows: overrides.preview_rows.or(self.preview_rows),
            counts: self.counts.merge(overrides.counts),
        }
    }

    /// Fill defaults and validate. Runs before any generation starts.
    pub fn resolve(self) -> GenResult<GenConfig> {
        let counts = self.counts.resolve(RecordCounts::default())?;
        counts.validate()?;
        Ok(GenConfig {
            seed: self.seed.unwrap_or(DEFAULT_SEED),
            as_of: self.as_of.unwrap_or_else(default_as_of),
            output_dir: self
                .output_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            preview_rows: self.preview_rows.unwrap_or(DEFAULT_PREVIEW_ROWS),
            counts,
        })
    }
}

/// Fully resolved run configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct GenConfig {
    pub seed: u64,
    pub as_of: NaiveDate,
    pub output_dir: PathBuf,
    pub preview_rows: usize,
    pub counts: RecordCounts,
}

impl GenConfig {
    pub fn context(&self) -> GenContext {
        GenContext::new(self.seed, self.as_of)
    }

    /// Config with the reference defaults for use in unit tests.
    pub fn default_test() -> Self {
        Self {
            seed: 42,
            as_of: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap_or_else(default_as_of),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            preview_rows: DEFAULT_PREVIEW_ROWS,
            counts: RecordCounts::default(),
        }
    }
}
