//! Categorical vocabularies.
//!
//! Every categorical column is a closed enum. The serialized label is
//! the exact string written to the output files.
//! NEVER rename a label — downstream consumers match on these strings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A closed set of labels that can be sampled uniformly.
pub trait Vocabulary: Copy + 'static {
    /// Every variant, in declaration order. Sampling indexes into this.
    const ALL: &'static [Self];

    fn label(&self) -> &'static str;
}

macro_rules! vocabulary {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $label)] $variant),+
        }

        impl Vocabulary for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

// ── Shared ──────────────────────────────────────────────────

vocabulary!(RiskLevel {
    Low => "Low",
    Moderate => "Moderate",
    High => "High",
});

vocabulary!(
    /// ESG pillar a user or asset leans toward.
    EthicalFocus {
        Environmental => "Environmental",
        Social => "Social",
        Governance => "Governance",
        Neutral => "Neutral",
    }
);

// ── Users ───────────────────────────────────────────────────

vocabulary!(Gender {
    Male => "M",
    Female => "F",
});

vocabulary!(IncomeBracket {
    Low => "Low",
    Medium => "Medium",
    High => "High",
});

vocabulary!(ExperienceLevel {
    Beginner => "Beginner",
    Intermediate => "Intermediate",
    Expert => "Expert",
});

vocabulary!(FinancialGoal {
    Retirement => "Retirement",
    WealthAccumulation => "Wealth Accumulation",
    Income => "Income",
});

// ── Portfolios ──────────────────────────────────────────────

vocabulary!(GoalType {
    Retirement => "Retirement",
    WealthGrowth => "Wealth Growth",
    IncomeGeneration => "Income Generation",
});

vocabulary!(InvestmentStrategy {
    EsgFocused => "ESG Focused",
    HighRisk => "High-Risk",
    IncomeFocused => "Income Focused",
});

// ── Assets ──────────────────────────────────────────────────

vocabulary!(AssetType {
    Stock => "Stock",
    MutualFund => "Mutual Fund",
    Bond => "Bond",
    Etf => "ETF",
});

vocabulary!(Sector {
    Technology => "Technology",
    Renewable => "Renewable",
    Healthcare => "Healthcare",
    Finance => "Finance",
});

vocabulary!(Exchange {
    Nyse => "NYSE",
    Nasdaq => "NASDAQ",
});

// ── Transactions / performance ──────────────────────────────

vocabulary!(TransactionType {
    Buy => "Buy",
    Sell => "Sell",
});

vocabulary!(TimePeriod {
    OneMonth => "1M",
    ThreeMonths => "3M",
    SixMonths => "6M",
    OneYear => "1Y",
    FiveYears => "5Y",
});

// ── Behavior & preferences ──────────────────────────────────

vocabulary!(PreferredAssetType {
    Stocks => "Stocks",
    Bonds => "Bonds",
    RealEstate => "Real Estate",
    Commodities => "Commodities",
});

vocabulary!(HistoricalChoice {
    Tech => "Tech",
    Energy => "Energy",
    Healthcare => "Healthcare",
    Finance => "Finance",
});

vocabulary!(SectorPreference {
    Technology => "Technology",
    RenewableEnergy => "Renewable Energy",
    Healthcare => "Healthcare",
    Finance => "Finance",
});

vocabulary!(SentimentSensitivity {
    High => "High",
    Medium => "Medium",
    Low => "Low",
});

vocabulary!(ContentHabit {
    Articles => "Articles",
    Videos => "Videos",
    Podcasts => "Podcasts",
    Newsletters => "Newsletters",
});

vocabulary!(LearningPreference {
    Visual => "Visual",
    Interactive => "Interactive",
    TextBased => "Text-Based",
});

// ── Recommendations ─────────────────────────────────────────

vocabulary!(RecommendationReason {
    GrowthPotential => "Strong growth potential",
    HighEsgScore => "High ESG score",
    LowRisk => "Low risk",
    SectorPerformance => "Sector performance",
});

vocabulary!(
    /// Recommendations never target a neutral alignment.
    EsgPillar {
        Environmental => "Environmental",
        Social => "Social",
        Governance => "Governance",
    }
);

vocabulary!(InvestmentHorizon {
    OneYear => "1 year",
    ThreeYears => "3 years",
    FiveYears => "5 years",
});

// ── Dashboard ───────────────────────────────────────────────

vocabulary!(DashboardSection {
    PortfolioOverview => "Portfolio Overview",
    PerformanceMetrics => "Performance Metrics",
    MarketData => "Market Data",
    Recommendations => "Recommendations",
});

vocabulary!(Theme {
    Light => "Light",
    Dark => "Dark",
});

vocabulary!(ChartType {
    Line => "Line",
    Bar => "Bar",
    Candlestick => "Candlestick",
});

vocabulary!(FontSize {
    Small => "Small",
    Medium => "Medium",
    Large => "Large",
});

vocabulary!(ViewMode {
    Compact => "Compact",
    Detailed => "Detailed",
    Expanded => "Expanded",
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialized_form_is_the_label() {
        let json = serde_json::to_string(&AssetType::MutualFund).unwrap();
        assert_eq!(json, "\"Mutual Fund\"");
        assert_eq!(Gender::Female.label(), "F");
        assert_eq!(TimePeriod::FiveYears.to_string(), "5Y");
    }

    #[test]
    fn all_lists_every_variant() {
        assert_eq!(RiskLevel::ALL.len(), 3);
        assert_eq!(EthicalFocus::ALL.len(), 4);
        assert_eq!(EsgPillar::ALL.len(), 3);
        assert_eq!(DashboardSection::ALL.len(), 4);
        assert_eq!(TimePeriod::ALL.len(), 5);
    }

    #[test]
    fn labels_round_trip_through_serde() {
        for section in DashboardSection::ALL {
            let json = serde_json::to_string(section).unwrap();
            let back: DashboardSection = serde_json::from_str(&json).unwrap();
            assert_eq!(*section, back);
        }
    }
}
