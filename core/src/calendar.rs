//! Date windows anchored on the run's `as_of` date.
//!
//! RULE: generation never reads the wall clock. Every date is sampled
//! from a window ending at `as_of`, so a fixed `as_of` keeps output stable.

use chrono::{Datelike, NaiveDate};

use crate::rng::TableRng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateWindow {
    /// 1 January of the `as_of` year through `as_of`.
    ThisYear,
    /// 1 January of the decade start through `as_of`.
    ThisDecade,
    /// 1 January of the century start through `as_of`.
    ThisCentury,
}

impl DateWindow {
    /// Inclusive (start, end) bounds for this window.
    pub fn bounds(&self, as_of: NaiveDate) -> (NaiveDate, NaiveDate) {
        let year = as_of.year();
        let start_year = match self {
            Self::ThisYear => year,
            Self::ThisDecade => year - year.rem_euclid(10),
            Self::ThisCentury => year - year.rem_euclid(100),
        };
        // Jan 1 exists in every year chrono can represent.
        let start = NaiveDate::from_ymd_opt(start_year, 1, 1).unwrap_or(as_of);
        (start, as_of)
    }

    pub fn sample(&self, as_of: NaiveDate, rng: &mut TableRng) -> NaiveDate {
        let (start, end) = self.bounds(as_of);
        rng.date_between(start, end)
    }
}
