//! Users — the root table. No dependencies.

use serde::{Deserialize, Serialize};

use crate::{
    context::GenContext,
    name_generator::NameGenerator,
    table::{Record, Table, TableKind},
    types::{dense_id, UserId},
    vocab::{EthicalFocus, ExperienceLevel, FinancialGoal, Gender, IncomeBracket, RiskLevel},
};

pub const MIN_AGE: u32 = 18;
pub const MAX_AGE: u32 = 70;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "User_ID")]
    pub user_id: UserId,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Age")]
    pub age: u32,
    #[serde(rename = "Gender")]
    pub gender: Gender,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Occupation")]
    pub occupation: String,
    #[serde(rename = "Income_Bracket")]
    pub income_bracket: IncomeBracket,
    #[serde(rename = "Investment_Experience_Level")]
    pub experience_level: ExperienceLevel,
    #[serde(rename = "Ethical_Preferences")]
    pub ethical_preferences: EthicalFocus,
    #[serde(rename = "Financial_Goals")]
    pub financial_goals: FinancialGoal,
    #[serde(rename = "Risk_Tolerance")]
    pub risk_tolerance: RiskLevel,
}

impl Record for User {
    const KIND: TableKind = TableKind::Users;
    type Key = UserId;

    fn key(&self) -> UserId {
        self.user_id
    }
}

pub fn generate_users(ctx: &GenContext, count: usize) -> Table<User> {
    let mut rng = ctx.rng(TableKind::Users);
    let mut users = Vec::with_capacity(count);

    for i in 0..count {
        users.push(User {
            user_id: dense_id(i),
            name: NameGenerator::full_name(&mut rng),
            age: rng.int_between(MIN_AGE as i64, MAX_AGE as i64) as u32,
            gender: rng.pick_variant(),
            location: NameGenerator::city(&mut rng).to_string(),
            occupation: NameGenerator::occupation(&mut rng).to_string(),
            income_bracket: rng.pick_variant(),
            experience_level: rng.pick_variant(),
            ethical_preferences: rng.pick_variant(),
            financial_goals: rng.pick_variant(),
            risk_tolerance: rng.pick_variant(),
        });
    }

    log::info!("users: generated {} rows", users.len());
    Table::from_rows(users)
}
