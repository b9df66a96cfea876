//! Run manifest — what a run produced and how to reproduce it.
//!
//! Written last, after every table file. Contains no wall-clock
//! data so two identical runs produce identical manifests.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{config::RecordCounts, context::GenContext, table::TableKind};

pub const MANIFEST_FILE: &str = "manifest.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunManifest {
    pub generator_version: String,
    pub seed: u64,
    pub as_of: NaiveDate,
    pub counts: RecordCounts,
    /// In write order.
    pub tables: Vec<ManifestEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub table: String,
    pub file: String,
    pub rows: usize,
}

impl RunManifest {
    pub fn new(ctx: &GenContext, counts: RecordCounts) -> Self {
        Self {
            generator_version: env!("CARGO_PKG_VERSION").to_string(),
            seed: ctx.seed(),
            as_of: ctx.as_of(),
            counts,
            tables: Vec::new(),
        }
    }

    pub fn record(&mut self, kind: TableKind, rows: usize) {
        self.tables.push(ManifestEntry {
            table: kind.name().to_string(),
            file: kind.file_name(),
            rows,
        });
    }
}
