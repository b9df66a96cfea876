//! Generation context — the only source of randomness and time.
//!
//! Every generator takes a `&GenContext`. There is no process-wide
//! RNG: two contexts built from the same seed and `as_of` drive
//! every generator to the same output.

use chrono::NaiveDate;

use crate::{
    calendar::DateWindow,
    rng::{RngBank, TableRng},
    table::TableKind,
};

#[derive(Debug, Clone, Copy)]
pub struct GenContext {
    bank: RngBank,
    as_of: NaiveDate,
}

impl GenContext {
    pub fn new(seed: u64, as_of: NaiveDate) -> Self {
        Self {
            bank: RngBank::new(seed),
            as_of,
        }
    }

    pub fn seed(&self) -> u64 {
        self.bank.master_seed()
    }

    pub fn as_of(&self) -> NaiveDate {
        self.as_of
    }

    /// Fresh RNG stream for one table. Calling this twice for the
    /// same table restarts the stream from the beginning.
    pub fn rng(&self, kind: TableKind) -> TableRng {
        log::debug!("rng stream: table={} seed={}", kind.name(), self.seed());
        self.bank.for_table(kind)
    }

    pub fn date(&self, window: DateWindow, rng: &mut TableRng) -> NaiveDate {
        window.sample(self.as_of, rng)
    }
}
