//! Behavior and preferences — exactly one row per user.

use serde::{Deserialize, Serialize};

use crate::{
    context::GenContext,
    table::{Record, Table, TableKind},
    types::UserId,
    user_generator::User,
    vocab::{
        ContentHabit, HistoricalChoice, LearningPreference, PreferredAssetType,
        SectorPreference, SentimentSensitivity,
    },
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BehaviorPreference {
    #[serde(rename = "User_ID")]
    pub user_id: UserId,
    #[serde(rename = "Preferred_Asset_Types")]
    pub preferred_asset_types: PreferredAssetType,
    #[serde(rename = "Historical_Investment_Choices")]
    pub historical_investment_choices: HistoricalChoice,
    #[serde(rename = "Sector_Preferences")]
    pub sector_preferences: SectorPreference,
    #[serde(rename = "Sentiment_Sensitivity")]
    pub sentiment_sensitivity: SentimentSensitivity,
    #[serde(rename = "Content_Consumption_Habits")]
    pub content_consumption_habits: ContentHabit,
    #[serde(rename = "Learning_Preferences")]
    pub learning_preferences: LearningPreference,
}

impl Record for BehaviorPreference {
    const KIND: TableKind = TableKind::BehaviorPreferences;
    type Key = UserId;

    fn key(&self) -> UserId {
        self.user_id
    }
}

/// One preference row per user, in user order. An empty users
/// table yields an empty result rather than an error.
pub fn generate_behavior_preferences(ctx: &GenContext, users: &Table<User>) -> Table<BehaviorPreference> {
    let mut rng = ctx.rng(TableKind::BehaviorPreferences);

    let rows: Vec<_> = users
        .keys()
        .map(|user_id| BehaviorPreference {
            user_id,
            preferred_asset_types: rng.pick_variant(),
            historical_investment_choices: rng.pick_variant(),
            sector_preferences: rng.pick_variant(),
            sentiment_sensitivity: rng.pick_variant(),
            content_consumption_habits: rng.pick_variant(),
            learning_preferences: rng.pick_variant(),
        })
        .collect();

    log::info!("behavior_preferences: generated {} rows", rows.len());
    Table::from_rows(rows)
}
