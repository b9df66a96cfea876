//! Dashboard layouts — one per user, keyed by an RNG-backed UUID.
//!
//! `Section_Order` is a full seeded permutation of the four sections, and
//! `Most_Used_Sections` is its leading `MOST_USED_COUNT` entries. Older
//! exports stored a single section label and a fixed most-used pair.

use serde::{Deserialize, Serialize};
use uuid::{Builder, Uuid};

use crate::{
    context::GenContext,
    rng::TableRng,
    table::{Record, Table, TableKind},
    types::{LayoutId, UserId},
    user_generator::User,
    vocab::{ChartType, DashboardSection, FontSize, Theme, ViewMode, Vocabulary},
};

/// How many leading sections of the order count as "most used".
pub const MOST_USED_COUNT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCustomization {
    #[serde(rename = "Theme")]
    pub theme: Theme,
    #[serde(rename = "Chart_Type")]
    pub chart_type: ChartType,
    #[serde(rename = "Font_Size")]
    pub font_size: FontSize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardLayout {
    #[serde(rename = "Layout_ID")]
    pub layout_id: LayoutId,
    #[serde(rename = "User_ID")]
    pub user_id: UserId,
    #[serde(rename = "Section_Order")]
    pub section_order: Vec<DashboardSection>,
    #[serde(rename = "Most_Used_Sections")]
    pub most_used_sections: Vec<DashboardSection>,
    #[serde(rename = "User_Customization")]
    pub user_customization: UserCustomization,
    #[serde(rename = "View_Mode")]
    pub view_mode: ViewMode,
}

impl Record for DashboardLayout {
    const KIND: TableKind = TableKind::DashboardLayouts;
    type Key = LayoutId;

    fn key(&self) -> LayoutId {
        self.layout_id
    }
}

/// Version-4 UUID whose random bits come from the table stream,
/// so layout ids are reproducible across runs.
fn layout_id(rng: &mut TableRng) -> Uuid {
    Builder::from_random_bytes(rng.bytes16()).into_uuid()
}

pub fn generate_dashboard_layouts(ctx: &GenContext, users: &Table<User>) -> Table<DashboardLayout> {
    let mut rng = ctx.rng(TableKind::DashboardLayouts);
    let mut layouts = Vec::with_capacity(users.len());

    for user_id in users.keys() {
        let layout_id = layout_id(&mut rng);
        let mut section_order = DashboardSection::ALL.to_vec();
        rng.shuffle(&mut section_order);
        let most_used_sections = section_order[..MOST_USED_COUNT].to_vec();

        layouts.push(DashboardLayout {
            layout_id,
            user_id,
            section_order,
            most_used_sections,
            user_customization: UserCustomization {
                theme: rng.pick_variant(),
                chart_type: rng.pick_variant(),
                font_size: rng.pick_variant(),
            },
            view_mode: rng.pick_variant(),
        });
    }

    log::info!("dashboard_layouts: generated {} rows", layouts.len());
    Table::from_rows(layouts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user_generator::generate_users;
    use chrono::NaiveDate;
    use std::collections::HashSet;

    fn ctx(seed: u64) -> GenContext {
        GenContext::new(seed, NaiveDate::from_ymd_opt(2024, 6, 30).unwrap())
    }

    #[test]
    fn layout_ids_are_unique_v4_uuids() {
        let ctx = ctx(1);
        let users = generate_users(&ctx, 50);
        let layouts = generate_dashboard_layouts(&ctx, &users);
        let ids: HashSet<_> = layouts.keys().collect();
        assert_eq!(ids.len(), 50);
        assert!(layouts.iter().all(|l| l.layout_id.get_version_num() == 4));
    }

    #[test]
    fn layout_ids_are_reproducible() {
        let users = generate_users(&ctx(2), 5);
        let a = generate_dashboard_layouts(&ctx(2), &users);
        let b = generate_dashboard_layouts(&ctx(2), &users);
        assert_eq!(a.keys().collect::<Vec<_>>(), b.keys().collect::<Vec<_>>());
    }

    #[test]
    fn section_order_is_a_permutation() {
        let ctx = ctx(3);
        let users = generate_users(&ctx, 10);
        for layout in &generate_dashboard_layouts(&ctx, &users) {
            let distinct: HashSet<_> = layout.section_order.iter().collect();
            assert_eq!(distinct.len(), DashboardSection::ALL.len());
            assert_eq!(layout.most_used_sections, layout.section_order[..MOST_USED_COUNT]);
        }
    }

    #[test]
    fn customization_is_nested() {
        let ctx = ctx(4);
        let users = generate_users(&ctx, 1);
        let layouts = generate_dashboard_layouts(&ctx, &users);
        let value = serde_json::to_value(&layouts.rows()[0]).unwrap();
        assert!(value["User_Customization"]["Theme"].is_string());
        assert!(value["Section_Order"].is_array());
        assert!(value["Layout_ID"].is_string());
    }
}
