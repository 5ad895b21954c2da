//! Name Generator
//!
//! Samples given names and surnames from a set of [`WordTables`] and composes
//! them into full names. Each step asks the seed source for a fresh random
//! source, so the number of chain advances per call is part of the behavior:
//!
//! - given name: one source, reused for the sex draw and the index draw
//! - surname: one source for every index draw, plus a fresh source for each
//!   probability gate (second surname, then one per slot for compounding)
//! - full name: one advance of its own, then the two above

use std::fmt;

use once_cell::sync::Lazy;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::casing::title_case;
use crate::options::{FullNameOptions, GivenNameOptions, SurnameOptions};
use crate::probability::{extra_one, percent_chance};
use crate::seed::{ChainedSeeder, SeedSource};
use crate::tables::{is_spaced, TableKind, WordTables};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn table(self) -> TableKind {
        match self {
            Sex::Male => TableKind::Male,
            Sex::Female => TableKind::Female,
        }
    }
}

/// A generated full name, kept in parts.
///
/// `Display` gives the single string form, `"{given_name} {surnames}"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullName {
    pub given_name: String,
    /// One or two surnames separated by a space, each possibly hyphenated
    pub surnames: String,
    pub sex: Sex,
}

impl fmt::Display for FullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.given_name, self.surnames)
    }
}

#[derive(Debug)]
pub struct NameGenerator<S = ChainedSeeder> {
    tables: WordTables,
    seeds: S,
}

impl NameGenerator<ChainedSeeder> {
    /// Builtin tables, chain seeded from the clock on first use
    pub fn new() -> Self {
        Self::with_seed_source(ChainedSeeder::new())
    }

    /// Builtin tables, chain starting at `seed`
    pub fn seeded(seed: u64) -> Self {
        Self::with_seed_source(ChainedSeeder::from_seed(seed))
    }
}

impl Default for NameGenerator<ChainedSeeder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SeedSource> NameGenerator<S> {
    pub fn with_seed_source(seeds: S) -> Self {
        Self::with_tables(WordTables::builtin(), seeds)
    }

    pub fn with_tables(tables: WordTables, seeds: S) -> Self {
        Self { tables, seeds }
    }

    pub fn tables(&self) -> &WordTables {
        &self.tables
    }

    pub fn seed_source(&self) -> &S {
        &self.seeds
    }

    /// Random given name, returned exactly as it appears in its table
    pub fn given_name(&self, opts: &GivenNameOptions) -> String {
        self.draw_given_name(opts).1.to_string()
    }

    fn draw_given_name(&self, opts: &GivenNameOptions) -> (Sex, &str) {
        let mut rng = self.seeds.next_rng();

        let sex = if percent_chance(opts.male_probability, &mut rng) {
            Sex::Male
        } else {
            Sex::Female
        };
        let table = self.tables.get(sex.table());
        let name = table[rng.gen_range(0..table.len())].as_str();

        trace!(?sex, name, "drew given name");
        (sex, name)
    }

    /// One or two surnames joined by a space, each made of one or two
    /// entries joined by a hyphen.
    pub fn surname(&self, opts: &SurnameOptions) -> String {
        let mut rng = self.seeds.next_rng();

        let mut allow_spaced = opts.allow_spaced_surnames;
        if !allow_spaced && !self.tables.has_unspaced_surname() {
            warn!("every surname is multi-word; accepting spaced surnames instead of rejecting forever");
            allow_spaced = true;
        }

        let slot_count = 1 + extra_one(opts.two_surnames_probability, &mut self.seeds.next_rng());
        let mut slots = Vec::with_capacity(slot_count);
        for _ in 0..slot_count {
            let part_count = 1 + extra_one(opts.compound_probability, &mut self.seeds.next_rng());
            let parts: Vec<&str> = (0..part_count)
                .map(|_| self.draw_surname(&mut rng, allow_spaced))
                .collect();
            slots.push(parts.join("-"));
        }

        slots.join(" ")
    }

    /// Rejection sampling: re-draw while the entry is multi-word and those
    /// are not allowed. Terminates only if an unspaced entry exists.
    fn draw_surname<R: Rng + ?Sized>(&self, rng: &mut R, allow_spaced: bool) -> &str {
        let surnames = self.tables.get(TableKind::Surnames);
        loop {
            let candidate = &surnames[rng.gen_range(0..surnames.len())];
            if allow_spaced || !is_spaced(candidate) {
                return candidate;
            }
            trace!(candidate = candidate.as_str(), "rejected multi-word surname");
        }
    }

    /// Given name plus surnames, title-cased if asked
    pub fn full_name(&self, opts: &FullNameOptions) -> String {
        self.full_name_parts(opts).to_string()
    }

    /// Same draws as [`full_name`](Self::full_name), returned in parts
    pub fn full_name_parts(&self, opts: &FullNameOptions) -> FullName {
        // Advance the chain once on our own before the sub-samplers do
        let _ = self.seeds.next_rng();

        let (sex, given_name) = self.draw_given_name(&opts.given_name());
        let surnames = self.surname(&opts.surname());

        let name = if opts.title_case {
            FullName {
                given_name: title_case(given_name),
                surnames: title_case(&surnames),
                sex,
            }
        } else {
            FullName {
                given_name: given_name.to_string(),
                surnames,
                sex,
            }
        };

        debug!(name = %name, "generated full name");
        name
    }
}

/// Process-wide generator behind the free functions; one seed chain shared
/// by every caller.
static GENERATOR: Lazy<NameGenerator> = Lazy::new(NameGenerator::new);

pub fn default_generator() -> &'static NameGenerator {
    &GENERATOR
}

/// Random given name. `male_probability` is a percentage, 50 for even odds.
pub fn generate_given_name(male_probability: i32) -> String {
    GENERATOR.given_name(&GivenNameOptions { male_probability })
}

/// Random surname(s). Defaults at this call site are `(0, 10, false)`.
pub fn generate_surname(
    two_surnames_probability: i32,
    compound_probability: i32,
    allow_spaced_surnames: bool,
) -> String {
    GENERATOR.surname(&SurnameOptions {
        two_surnames_probability,
        compound_probability,
        allow_spaced_surnames,
    })
}

/// Random full name. Defaults at this call site are `(50, 100, 10, true, true)`.
pub fn generate_full_name(
    male_probability: i32,
    two_surnames_probability: i32,
    compound_probability: i32,
    allow_spaced_surnames: bool,
    title_case: bool,
) -> String {
    GENERATOR.full_name(&FullNameOptions {
        male_probability,
        two_surnames_probability,
        compound_probability,
        allow_spaced_surnames,
        title_case,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{FEMALE_GIVEN_NAMES, MALE_GIVEN_NAMES, SURNAMES};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::Cell;
    use std::sync::Arc;

    const RUNS: usize = 300;

    /// Hands out sources seeded 1, 2, 3... and counts them
    #[derive(Default)]
    struct CountingSeeds {
        issued: Cell<u64>,
    }

    impl SeedSource for CountingSeeds {
        type Rng = StdRng;

        fn next_rng(&self) -> StdRng {
            self.issued.set(self.issued.get() + 1);
            StdRng::seed_from_u64(self.issued.get())
        }
    }

    fn surname_opts(two: i32, compound: i32) -> SurnameOptions {
        SurnameOptions {
            two_surnames_probability: two,
            compound_probability: compound,
            ..SurnameOptions::default()
        }
    }

    fn tables(surnames: &[&str]) -> WordTables {
        let owned = |items: &[&str]| -> Vec<String> { items.iter().map(|s| s.to_string()).collect() };
        WordTables::new(owned(&["Pedro"]), owned(&["Ana"]), owned(surnames)).unwrap()
    }

    #[test]
    fn test_given_name_by_sex() {
        let gen = NameGenerator::new();
        for _ in 0..RUNS {
            let name = gen.given_name(&GivenNameOptions { male_probability: 100 });
            assert!(MALE_GIVEN_NAMES.contains(&name.as_str()), "{}", name);

            let name = gen.given_name(&GivenNameOptions { male_probability: 0 });
            assert!(FEMALE_GIVEN_NAMES.contains(&name.as_str()), "{}", name);
        }
    }

    #[test]
    fn test_one_surname() {
        let gen = NameGenerator::new();
        for _ in 0..RUNS {
            let surname = gen.surname(&surname_opts(0, 10));
            assert!(!surname.contains(' '), "{}", surname);
            assert_eq!(surname.split(' ').count(), 1);
        }
    }

    #[test]
    fn test_two_surnames() {
        let gen = NameGenerator::new();
        for _ in 0..RUNS {
            let surname = gen.surname(&surname_opts(100, 10));
            assert_eq!(surname.split(' ').count(), 2, "{}", surname);
        }
    }

    #[test]
    fn test_one_compound_surname() {
        let gen = NameGenerator::new();
        for _ in 0..RUNS {
            let surname = gen.surname(&surname_opts(0, 100));
            assert_eq!(surname.split('-').count(), 2, "{}", surname);
            assert!(!surname.contains(' '));
        }
    }

    #[test]
    fn test_two_compound_surnames() {
        let gen = NameGenerator::new();
        for _ in 0..RUNS {
            let surname = gen.surname(&surname_opts(100, 100));
            assert_eq!(surname.matches('-').count(), 2, "{}", surname);
            assert_eq!(surname.matches(' ').count(), 1, "{}", surname);
            for slot in surname.split(' ') {
                assert_eq!(slot.split('-').count(), 2);
            }
        }
    }

    #[test]
    fn test_surname_parts_come_from_table() {
        let gen = NameGenerator::new();
        for _ in 0..RUNS {
            let surname = gen.surname(&surname_opts(100, 50));
            for part in surname.split(|c: char| c == ' ' || c == '-') {
                assert!(SURNAMES.contains(&part), "{}", part);
            }
        }
    }

    #[test]
    fn test_spaced_surnames_rejected_unless_allowed() {
        let gen = NameGenerator::with_tables(tables(&["De La Fuente", "Gil"]), ChainedSeeder::new());

        for _ in 0..RUNS {
            assert_eq!(gen.surname(&surname_opts(0, 0)), "Gil");
        }

        let allowed = SurnameOptions {
            allow_spaced_surnames: true,
            ..surname_opts(0, 0)
        };
        let drawn: Vec<String> = (0..RUNS).map(|_| gen.surname(&allowed)).collect();
        assert!(drawn.iter().any(|s| s == "De La Fuente"));
        assert!(drawn.iter().any(|s| s == "Gil"));
    }

    #[test]
    fn test_all_spaced_table_does_not_hang() {
        let gen = NameGenerator::with_tables(tables(&["De La Fuente", "Da Silva"]), ChainedSeeder::new());
        let surname = gen.surname(&surname_opts(0, 0));
        assert!(surname == "De La Fuente" || surname == "Da Silva");
    }

    #[test]
    fn test_full_name_title_case() {
        let gen = NameGenerator::new();
        let opts = FullNameOptions {
            compound_probability: 50,
            ..FullNameOptions::default()
        };
        for _ in 0..RUNS {
            let name = gen.full_name(&opts);
            for word in name.split(|c: char| c == ' ' || c == '-') {
                let first = word.chars().next().unwrap();
                assert!(!first.is_lowercase(), "{}", name);
            }
        }
    }

    #[test]
    fn test_full_name_raw_keeps_table_text() {
        let gen = NameGenerator::with_tables(tables(&["del Rio"]), ChainedSeeder::new());
        let opts = FullNameOptions {
            male_probability: 100,
            two_surnames_probability: 0,
            compound_probability: 0,
            title_case: false,
            ..FullNameOptions::default()
        };
        assert_eq!(gen.full_name(&opts), "Pedro del Rio");

        let opts = FullNameOptions { title_case: true, ..opts };
        assert_eq!(gen.full_name(&opts), "Pedro Del Rio");
    }

    #[test]
    fn test_same_seed_same_names() {
        let a = NameGenerator::seeded(2012);
        let b = NameGenerator::seeded(2012);
        let opts = FullNameOptions::default();

        let left: Vec<String> = (0..50).map(|_| a.full_name(&opts)).collect();
        let right: Vec<String> = (0..50).map(|_| b.full_name(&opts)).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn test_injected_source_is_deterministic() {
        let opts = FullNameOptions::default();
        let first = NameGenerator::with_seed_source(CountingSeeds::default()).full_name(&opts);
        let second = NameGenerator::with_seed_source(CountingSeeds::default()).full_name(&opts);
        assert_eq!(first, second);
    }

    #[test]
    fn test_parts_match_string_form() {
        let a = NameGenerator::seeded(77);
        let b = NameGenerator::seeded(77);
        let opts = FullNameOptions::default();

        for _ in 0..20 {
            let parts = a.full_name_parts(&opts);
            assert_eq!(parts.to_string(), b.full_name(&opts));
        }
    }

    #[test]
    fn test_parts_report_sex() {
        let gen = NameGenerator::new();
        let opts = FullNameOptions {
            male_probability: 0,
            title_case: false,
            ..FullNameOptions::default()
        };
        let name = gen.full_name_parts(&opts);
        assert_eq!(name.sex, Sex::Female);
        assert!(FEMALE_GIVEN_NAMES.contains(&name.given_name.as_str()));
    }

    #[test]
    fn test_seed_advances_per_call() {
        let gen = NameGenerator::with_seed_source(CountingSeeds::default());

        gen.given_name(&GivenNameOptions::default());
        assert_eq!(gen.seed_source().issued.get(), 1);

        // slot source + second-surname gate + one compound gate
        gen.surname(&surname_opts(0, 0));
        assert_eq!(gen.seed_source().issued.get(), 4);

        // two compound gates this time
        gen.surname(&surname_opts(100, 0));
        assert_eq!(gen.seed_source().issued.get(), 8);

        // own advance + given name + surname (3)
        gen.full_name(&FullNameOptions {
            two_surnames_probability: 0,
            ..FullNameOptions::default()
        });
        assert_eq!(gen.seed_source().issued.get(), 13);
    }

    #[test]
    fn test_out_of_range_probabilities() {
        let gen = NameGenerator::new();
        let name = gen.given_name(&GivenNameOptions { male_probability: 400 });
        assert!(MALE_GIVEN_NAMES.contains(&name.as_str()));

        let surname = gen.surname(&surname_opts(-10, 1_000));
        assert_eq!(surname.split(' ').count(), 1);
        assert_eq!(surname.split('-').count(), 2);
    }

    #[test]
    fn test_free_functions() {
        assert!(MALE_GIVEN_NAMES.contains(&generate_given_name(100).as_str()));
        assert!(FEMALE_GIVEN_NAMES.contains(&generate_given_name(0).as_str()));
        assert_eq!(generate_surname(100, 0, false).split(' ').count(), 2);
        assert!(!generate_full_name(50, 100, 10, true, true).is_empty());
        assert_eq!(default_generator().tables(), &WordTables::builtin());
    }

    #[test]
    fn test_shared_across_threads() {
        let gen = Arc::new(NameGenerator::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let gen = Arc::clone(&gen);
                std::thread::spawn(move || {
                    (0..50)
                        .map(|_| gen.full_name(&FullNameOptions::default()))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for handle in handles {
            let names = handle.join().unwrap();
            assert_eq!(names.len(), 50);
        }
    }
}
