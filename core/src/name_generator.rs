//! Deterministic fake text using curated word lists.
//!
//! Provides person names, cities, occupations, company names,
//! fund names and ticker symbols.
//! All generation is deterministic (same RNG seed = same text).

use crate::rng::TableRng;

/// Deterministic text generator using curated lists
pub struct NameGenerator;

impl NameGenerator {
    /// Generate a full name (first + last) deterministically
    pub fn full_name(rng: &mut TableRng) -> String {
        let first = rng.pick(FIRST_NAMES);
        let last = rng.pick(LAST_NAMES);
        format!("{first} {last}")
    }

    pub fn city(rng: &mut TableRng) -> &'static str {
        *rng.pick(CITIES)
    }

    pub fn occupation(rng: &mut TableRng) -> &'static str {
        *rng.pick(OCCUPATIONS)
    }

    /// Company name in one of three shapes:
    /// "Last Suffix", "Last-Last" or "Last, Last and Last".
    pub fn company(rng: &mut TableRng) -> String {
        match rng.index(3) {
            0 => format!("{} {}", rng.pick(LAST_NAMES), rng.pick(COMPANY_SUFFIXES)),
            1 => format!("{}-{}", rng.pick(LAST_NAMES), rng.pick(LAST_NAMES)),
            _ => format!(
                "{}, {} and {}",
                rng.pick(LAST_NAMES),
                rng.pick(LAST_NAMES),
                rng.pick(LAST_NAMES)
            ),
        }
    }

    /// "<Word> Fund", word capitalized.
    pub fn fund_name(rng: &mut TableRng) -> String {
        let word = rng.pick(FUND_WORDS);
        let mut chars = word.chars();
        let capitalized: String = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };
        format!("{capitalized} Fund")
    }

    /// Three upper-case ASCII letters.
    pub fn ticker(rng: &mut TableRng) -> String {
        (0..3)
            .map(|_| (b'A' + rng.next_u64_below(26) as u8) as char)
            .collect()
    }
}

const FIRST_NAMES: &[&str] = &[
    "James", "John", "Robert", "Michael", "William", "David", "Richard", "Joseph",
    "Thomas", "Charles", "Daniel", "Matthew", "Anthony", "Mark", "Steven", "Paul",
    "Andrew", "Kevin", "Brian", "George", "Ryan", "Jacob", "Eric", "Samuel",
    "Mary", "Patricia", "Jennifer", "Linda", "Barbara", "Elizabeth", "Susan",
    "Jessica", "Sarah", "Karen", "Lisa", "Nancy", "Margaret", "Emily", "Michelle",
    "Amanda", "Laura", "Rachel", "Olivia", "Hannah", "Sophia", "Grace", "Ava", "Mia",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
    "Rodriguez", "Martinez", "Hernandez", "Lopez", "Wilson", "Anderson", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Thompson", "White", "Harris", "Clark",
    "Lewis", "Robinson", "Walker", "Young", "Allen", "King", "Wright", "Scott",
    "Nguyen", "Hill", "Green", "Adams", "Baker", "Nelson", "Carter", "Mitchell",
    "Roberts", "Patel", "Chen", "Kim", "Murphy", "Cooper", "Reed", "Bailey", "Ward",
];

const CITIES: &[&str] = &[
    "New York", "Los Angeles", "Chicago", "Houston", "Phoenix", "Philadelphia",
    "San Antonio", "San Diego", "Dallas", "Austin", "Jacksonville", "Columbus",
    "Charlotte", "Indianapolis", "Seattle", "Denver", "Boston", "Nashville",
    "Portland", "Las Vegas", "Detroit", "Memphis", "Baltimore", "Milwaukee",
    "Albuquerque", "Tucson", "Sacramento", "Atlanta", "Omaha", "Raleigh",
    "Miami", "Minneapolis", "Tampa", "New Orleans", "Cleveland", "Pittsburgh",
];

const OCCUPATIONS: &[&str] = &[
    "Accountant", "Architect", "Software engineer", "Data scientist", "Teacher",
    "Nurse", "Pharmacist", "Civil engineer", "Graphic designer", "Lawyer",
    "Financial analyst", "Marketing manager", "Dentist", "Electrician",
    "Journalist", "Physiotherapist", "Chef", "Sales executive", "Veterinarian",
    "Police officer", "Pilot", "Librarian", "Economist", "Research scientist",
    "Product manager", "Social worker", "Photographer", "Surveyor",
];

const COMPANY_SUFFIXES: &[&str] = &["Inc", "LLC", "Group", "PLC", "Ltd", "and Sons"];

const FUND_WORDS: &[&str] = &[
    "apex", "beacon", "cedar", "summit", "harbor", "horizon", "meridian", "atlas",
    "pioneer", "keystone", "evergreen", "granite", "liberty", "orchard", "compass",
    "vanguard", "sterling", "aurora", "cascade", "frontier", "heritage", "zenith",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{rng::RngBank, table::TableKind};

    #[test]
    fn name_generation_is_deterministic() {
        let mut rng1 = RngBank::new(12345).for_table(TableKind::Users);
        let mut rng2 = RngBank::new(12345).for_table(TableKind::Users);

        let name1 = NameGenerator::full_name(&mut rng1);
        let name2 = NameGenerator::full_name(&mut rng2);

        assert_eq!(name1, name2, "Same seed should produce same name");
    }

    #[test]
    fn generates_valid_full_names() {
        let mut rng = RngBank::new(12345).for_table(TableKind::Users);

        for _ in 0..100 {
            let name = NameGenerator::full_name(&mut rng);
            let parts: Vec<&str> = name.split_whitespace().collect();
            assert_eq!(parts.len(), 2, "Name should have exactly 2 parts: {}", name);
        }
    }

    #[test]
    fn tickers_are_three_upper_case_letters() {
        let mut rng = RngBank::new(9).for_table(TableKind::Assets);
        for _ in 0..100 {
            let t = NameGenerator::ticker(&mut rng);
            assert_eq!(t.len(), 3);
            assert!(t.chars().all(|c| c.is_ascii_uppercase()), "bad ticker {t}");
        }
    }

    #[test]
    fn fund_names_are_capitalized() {
        let mut rng = RngBank::new(9).for_table(TableKind::Portfolios);
        for _ in 0..50 {
            let name = NameGenerator::fund_name(&mut rng);
            assert!(name.ends_with(" Fund"));
            assert!(name.chars().next().unwrap().is_ascii_uppercase(), "{name}");
        }
    }

    #[test]
    fn company_names_are_not_empty() {
        let mut rng = RngBank::new(2).for_table(TableKind::Assets);
        for _ in 0..50 {
            let name = NameGenerator::company(&mut rng);
            assert!(name.len() > 3, "company name too short: {name}");
        }
    }
}
