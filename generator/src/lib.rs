//! Spanish Name Generator
//!
//! Random Spanish personal names (given name plus one or two, optionally
//! hyphenated, surnames) for seed data, demos and test fixtures. Not suitable
//! for anything that needs unpredictable randomness.

pub mod casing;
pub mod error;
pub mod generator;
pub mod options;
pub mod probability;
pub mod seed;
pub mod tables;

pub use error::{GeneratorError, Result};
pub use generator::{
    default_generator, generate_full_name, generate_given_name, generate_surname, FullName,
    NameGenerator, Sex,
};
pub use options::{FullNameOptions, GivenNameOptions, SurnameOptions};
pub use seed::{ChainedSeeder, SeedSource};
pub use tables::{TableKind, WordTables, FEMALE_GIVEN_NAMES, MALE_GIVEN_NAMES, SURNAMES};
