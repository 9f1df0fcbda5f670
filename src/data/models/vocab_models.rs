use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// One learnable word pair, normalized from either dataset schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VocabEntry {
    pub id: u32,                 // 1-based position in load order
    pub source: String,          // French or Latin term
    pub target: String,          // German term
    pub pron: String,            // Pronunciation hint, empty when absent
    #[serde(flatten)]
    pub details: DatasetDetails, // Serialized as "dataset" plus schema fields
}

/// Dataset discriminator, fixed when the record is normalized.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "dataset", rename_all = "lowercase")]
pub enum DatasetDetails {
    Frde,
    Latin(LatinDetails),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LatinDetails {
    pub part_of_speech: Option<String>,
    pub principal_parts: Option<String>,
    pub example_source: Option<String>,
    pub example_target: Option<String>,
}

impl VocabEntry {
    pub fn is_latin(&self) -> bool {
        matches!(self.details, DatasetDetails::Latin(_))
    }
}

/// Result of loading a dataset directory.
#[derive(Debug, Default, PartialEq)]
pub struct LoadedVocab {
    pub entries: Vec<VocabEntry>,
    pub files_loaded: usize,
    pub files_skipped: usize,
}

// Dataset file errors. Never leave the loader.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Cannot read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Malformed dataset {}: {}", .path.display(), .source)]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Dataset {} is not a list of records", .path.display())]
    NotAList { path: PathBuf },
}
