//! Error types
//!
//! Sampling itself never fails. Errors only come from loading custom tables
//! or options.

use std::path::PathBuf;
use thiserror::Error;

use crate::tables::TableKind;

pub type Result<T> = std::result::Result<T, GeneratorError>;

#[derive(Error, Debug)]
pub enum GeneratorError {
    /// A word table has no entries
    #[error("{table} table is empty")]
    EmptyTable { table: TableKind },

    /// A word table contains an empty or whitespace-only entry
    #[error("{table} table has an empty entry at index {index}")]
    EmptyEntry { table: TableKind, index: usize },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GeneratorError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_table() {
        let err = GeneratorError::EmptyTable {
            table: TableKind::Surnames,
        };
        assert_eq!(err.to_string(), "surnames table is empty");

        let err = GeneratorError::EmptyEntry {
            table: TableKind::Female,
            index: 3,
        };
        assert_eq!(err.to_string(), "female given names table has an empty entry at index 3");
    }
}
