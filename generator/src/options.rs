//! Generation options
//!
//! One struct per call site, each with its own defaults. Probabilities are
//! percentages (0-100) and are not validated: see
//! [`percent_chance`](crate::probability::percent_chance) for how
//! out-of-range values behave.
//!
//! All three deserialize from JSON with missing fields taking the defaults.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{GeneratorError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GivenNameOptions {
    /// Chance of drawing from the male table (default 50)
    pub male_probability: i32,
}

impl Default for GivenNameOptions {
    fn default() -> Self {
        Self { male_probability: 50 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurnameOptions {
    /// Chance of a second surname (default 0)
    pub two_surnames_probability: i32,
    /// Chance that each surname is hyphenated from two entries (default 10)
    pub compound_probability: i32,
    /// Allow multi-word entries like "De La Fuente" (default false)
    pub allow_spaced_surnames: bool,
}

impl Default for SurnameOptions {
    fn default() -> Self {
        Self {
            two_surnames_probability: 0,
            compound_probability: 10,
            allow_spaced_surnames: false,
        }
    }
}

/// Options for a full name. Note the defaults differ from the surname call
/// site: two surnames and multi-word surnames are on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FullNameOptions {
    pub male_probability: i32,
    pub two_surnames_probability: i32,
    pub compound_probability: i32,
    pub allow_spaced_surnames: bool,
    /// Spanish title case on the joined result
    pub title_case: bool,
}

impl Default for FullNameOptions {
    fn default() -> Self {
        Self {
            male_probability: 50,
            two_surnames_probability: 100,
            compound_probability: 10,
            allow_spaced_surnames: true,
            title_case: true,
        }
    }
}

impl FullNameOptions {
    pub fn given_name(&self) -> GivenNameOptions {
        GivenNameOptions {
            male_probability: self.male_probability,
        }
    }

    pub fn surname(&self) -> SurnameOptions {
        SurnameOptions {
            two_surnames_probability: self.two_surnames_probability,
            compound_probability: self.compound_probability,
            allow_spaced_surnames: self.allow_spaced_surnames,
        }
    }
}

/// Parse options from a JSON string
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T> {
    Ok(serde_json::from_str(json)?)
}

/// Parse options from a JSON file
pub fn from_json_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|e| GeneratorError::io(path, e))?;
    from_json(&json)
}
