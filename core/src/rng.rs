//! Deterministic random number generation.
//!
//! RULE: Nothing in the generator may call any platform RNG.
//! All randomness flows through TableRng instances derived
//! from the single master seed carried by the GenContext.
//!
//! Each table gets its own RNG stream, seeded deterministically
//! from (master_seed XOR slot_index). This means:
//!   - Adding a new table never changes existing tables' streams.
//!   - Each table's stream is fully reproducible in isolation.

use chrono::{Days, NaiveDate};
use rand::{seq::SliceRandom, Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

use crate::{table::TableKind, vocab::Vocabulary};

/// A named, deterministic RNG for a single table.
pub struct TableRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl TableRng {
    /// Create a table RNG from the master seed and a stable
    /// slot index. The index must never change once assigned.
    pub fn new(master_seed: u64, slot_index: u64) -> Self {
        let derived_seed = master_seed ^ (slot_index.wrapping_mul(0x9e37_79b9_7f4a_7c15));
        Self {
            name: "unnamed",
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        use rand::RngCore;
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Draw a raw u64 (full range).
    pub fn next_u64(&mut self) -> u64 {
        use rand::RngCore;
        self.inner.next_u64()
    }

    /// Roll a u64 in [0, n).
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        assert!(n > 0, "n must be > 0");
        self.inner.gen_range(0..n)
    }

    /// Uniform index into a slice of length `len`.
    pub fn index(&mut self, len: usize) -> usize {
        self.next_u64_below(len as u64) as usize
    }

    /// Uniform integer in [lo, hi], both ends inclusive.
    pub fn int_between(&mut self, lo: i64, hi: i64) -> i64 {
        assert!(lo <= hi, "empty range {lo}..={hi}");
        self.inner.gen_range(lo..=hi)
    }

    /// Uniform float in [lo, hi).
    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    /// Pick one element of a non-empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.index(items.len())]
    }

    /// Pick one variant of a categorical vocabulary.
    pub fn pick_variant<V: Vocabulary>(&mut self) -> V {
        *self.pick(V::ALL)
    }

    /// Uniform day in [start, end], both ends inclusive.
    pub fn date_between(&mut self, start: NaiveDate, end: NaiveDate) -> NaiveDate {
        let span = (end - start).num_days().max(0);
        let offset = self.int_between(0, span) as u64;
        start + Days::new(offset)
    }

    /// In-place uniform shuffle.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.inner);
    }

    /// Fill a 16-byte buffer for RNG-backed UUIDs.
    pub fn bytes16(&mut self) -> [u8; 16] {
        let mut out = [0u8; 16];
        out[..8].copy_from_slice(&self.next_u64().to_le_bytes());
        out[8..].copy_from_slice(&self.next_u64().to_le_bytes());
        out
    }
}

/// All table RNGs for a single run, indexed by stable slot.
#[derive(Debug, Clone, Copy)]
pub struct RngBank {
    master_seed: u64,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    pub fn for_table(&self, kind: TableKind) -> TableRng {
        TableRng::new(self.master_seed, kind.slot()).with_name(kind.name())
    }
}

/// Round to 2 decimal places (cents / hundredths of a percent).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
