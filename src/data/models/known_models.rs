use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data::models::VocabEntry;

/// A pair the user no longer wants to be asked. Ordered by (source, target).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct KnownPair {
    #[serde(alias = "fr")]
    pub source: String,
    #[serde(alias = "de")]
    pub target: String,
}

impl KnownPair {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

impl From<&VocabEntry> for KnownPair {
    fn from(entry: &VocabEntry) -> Self {
        KnownPair::new(entry.source.clone(), entry.target.clone())
    }
}

#[derive(Error, Debug)]
pub enum KnownStoreError {
    #[error("Failed to write known words: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to serialize known words: {0}")]
    Serialize(#[from] serde_json::Error),
}
