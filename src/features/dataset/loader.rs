use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::data::models::{DatasetDetails, DatasetError, LatinDetails, LoadedVocab, VocabEntry};
use crate::features::dataset::relaxed_json;

lazy_static! {
    static ref FIRST_NUMBER_RE: Regex = Regex::new(r"\d+").unwrap();
}

const DATASET_EXTENSION: &str = "json";

const SOURCE_KEYS: [&str; 3] = ["fr", "french", "fr_word"];
const TARGET_KEYS: [&str; 3] = ["de", "german", "de_word"];
const PRON_KEYS: [&str; 2] = ["pron", "pronunciation"];

const LATIN_SOURCE_KEY: &str = "lemma";
const LATIN_TARGET_KEY: &str = "translation_de";
const LATIN_POS_KEYS: [&str; 2] = ["part_of_speech", "pos"];
const LATIN_PARTS_KEYS: [&str; 2] = ["principal_parts", "forms"];
const EXAMPLE_KEY: &str = "example";
const EXAMPLE_SOURCE_KEYS: [&str; 2] = ["la", "latin"];
const EXAMPLE_TARGET_KEYS: [&str; 2] = ["de", "german"];

/// Loads every usable entry from `dir`. Bad files and records are skipped, so
/// the worst outcome is an empty vocabulary.
pub fn load_vocab(dir: &Path, latin_file: &str) -> LoadedVocab {
    let mut loaded = LoadedVocab::default();

    for path in dataset_files(dir, latin_file) {
        match load_file(&path) {
            Ok(records) => {
                log::debug!("Loaded {} records from {}", records.len(), path.display());
                loaded.entries.extend(records);
                loaded.files_loaded += 1;
            }
            Err(e) => {
                log::warn!("Skipping dataset file: {}", e);
                loaded.files_skipped += 1;
            }
        }
    }

    for (index, entry) in loaded.entries.iter_mut().enumerate() {
        entry.id = index as u32 + 1;
    }

    loaded
}

/// Dataset files in load order. The Latin file, when present, is loaded alone.
pub fn dataset_files(dir: &Path, latin_file: &str) -> Vec<PathBuf> {
    let read_dir = match fs::read_dir(dir) {
        Ok(rd) => rd,
        Err(e) => {
            log::warn!("Cannot list dataset directory {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut files: Vec<PathBuf> = read_dir
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext == DATASET_EXTENSION)
        })
        .collect();

    if let Some(latin) = files.iter().find(|path| file_name(path) == latin_file) {
        return vec![latin.clone()];
    }

    files.sort_by_cached_key(|path| natural_key(&file_name(path)));
    files
}

/// Sort key: first embedded integer (missing sorts last), then the name.
fn natural_key(name: &str) -> (u64, String) {
    let number = FIRST_NUMBER_RE
        .find(name)
        .and_then(|m| m.as_str().parse::<u64>().ok())
        .unwrap_or(u64::MAX);
    (number, name.to_string())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string()
}

/// Reads and normalizes one dataset file. Ids are left at 0 for the caller.
pub fn load_file(path: &Path) -> Result<Vec<VocabEntry>, DatasetError> {
    let raw = fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let value = relaxed_json::parse_relaxed(&raw).map_err(|source| DatasetError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;

    let Value::Array(records) = value else {
        return Err(DatasetError::NotAList {
            path: path.to_path_buf(),
        });
    };

    let total = records.len();
    let entries: Vec<VocabEntry> = records.iter().filter_map(normalize_record).collect();
    if entries.len() < total {
        log::debug!(
            "Dropped {} incomplete records from {}",
            total - entries.len(),
            path.display()
        );
    }

    Ok(entries)
}

/// Maps a raw record onto `VocabEntry`, detecting its schema from the keys it carries.
pub fn normalize_record(record: &Value) -> Option<VocabEntry> {
    let object = record.as_object()?;

    let (source, target, details) =
        if object.contains_key(LATIN_SOURCE_KEY) || object.contains_key(LATIN_TARGET_KEY) {
            let example = record.get(EXAMPLE_KEY);
            let details = LatinDetails {
                part_of_speech: non_empty(first_str(record, &LATIN_POS_KEYS)),
                principal_parts: non_empty(principal_parts(record)),
                example_source: non_empty(example.map(|e| first_str(e, &EXAMPLE_SOURCE_KEYS))),
                example_target: non_empty(example.map(|e| first_str(e, &EXAMPLE_TARGET_KEYS))),
            };
            (
                first_str(record, &[LATIN_SOURCE_KEY]),
                first_str(record, &[LATIN_TARGET_KEY]),
                DatasetDetails::Latin(details),
            )
        } else {
            (
                first_str(record, &SOURCE_KEYS),
                first_str(record, &TARGET_KEYS),
                DatasetDetails::Frde,
            )
        };

    if source.is_empty() || target.is_empty() {
        return None;
    }

    Some(VocabEntry {
        id: 0,
        source,
        target,
        pron: first_str(record, &PRON_KEYS),
        details,
    })
}

/// First non-empty string among `keys`, trimmed. Empty when none qualifies.
fn first_str(value: &Value, keys: &[&str]) -> String {
    keys.iter()
        .filter_map(|key| value.get(*key).and_then(|v| v.as_str()))
        .map(str::trim)
        .find(|s| !s.is_empty())
        .unwrap_or_default()
        .to_string()
}

// Principal parts come either as one string or as a list of forms.
fn principal_parts(record: &Value) -> Option<String> {
    LATIN_PARTS_KEYS
        .iter()
        .filter_map(|key| record.get(*key))
        .find_map(|v| match v {
            Value::String(s) => Some(s.trim().to_string()),
            Value::Array(items) => Some(
                items
                    .iter()
                    .filter_map(|item| item.as_str())
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            _ => None,
        })
}

fn non_empty(value: impl Into<Option<String>>) -> Option<String> {
    value.into().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    const LATIN: &str = "latin.json";

    fn write(dir: &TempDir, name: &str, contents: &str) {
        fs::write(dir.path().join(name), contents).unwrap();
    }

    fn names(files: &[PathBuf]) -> Vec<String> {
        files.iter().map(|p| file_name(p)).collect()
    }

    #[test]
    fn latin_file_takes_exclusive_priority() {
        let dir = TempDir::new().unwrap();
        write(&dir, "list1.json", r#"[{"fr": "chat", "de": "Katze"}]"#);
        write(&dir, "list2.json", r#"[{"fr": "chien", "de": "Hund"}]"#);
        write(
            &dir,
            LATIN,
            r#"[{"lemma": "amicus", "translation_de": "Freund"}]"#,
        );

        assert_eq!(names(&dataset_files(dir.path(), LATIN)), vec![LATIN]);

        let vocab = load_vocab(dir.path(), LATIN).entries;
        assert_eq!(vocab.len(), 1);
        assert_eq!(vocab[0].source, "amicus");
        assert!(vocab[0].is_latin());
    }

    #[test]
    fn files_are_ordered_by_embedded_number() {
        let dir = TempDir::new().unwrap();
        for name in ["list2.json", "list10.json", "list1.json", "extra.json", "notes.txt"] {
            write(&dir, name, "[]");
        }

        assert_eq!(
            names(&dataset_files(dir.path(), LATIN)),
            vec!["list1.json", "list2.json", "list10.json", "extra.json"]
        );
    }

    #[test]
    fn equal_numbers_fall_back_to_name() {
        let dir = TempDir::new().unwrap();
        write(&dir, "b3.json", "[]");
        write(&dir, "a3.json", "[]");

        assert_eq!(names(&dataset_files(dir.path(), LATIN)), vec!["a3.json", "b3.json"]);
    }

    #[test]
    fn ids_are_contiguous_and_reproducible() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "list2.json",
            r#"[{"fr": "chien", "de": "Hund"}, {"fr": "", "de": "leer"}]"#,
        );
        write(
            &dir,
            "list1.json",
            r#"[{"french": "chat", "german": "Katze"}, {"fr_word": "lait", "de_word": "Milch"}]"#,
        );

        let first = load_vocab(dir.path(), LATIN).entries;
        let ids: Vec<u32> = first.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(first[0].source, "chat");
        assert_eq!(first[2].source, "chien");

        assert_eq!(load_vocab(dir.path(), LATIN).entries, first);
    }

    #[test]
    fn malformed_file_is_skipped_without_aborting() {
        let dir = TempDir::new().unwrap();
        write(&dir, "list1.json", r#"[{"fr": "chat", "de": "Katze"}"#);
        write(&dir, "list2.json", r#"{"fr": "pas", "de": "Liste"}"#);
        write(&dir, "list3.json", r#"[{"fr": "chien", "de": "Hund"}]"#);

        assert!(matches!(
            load_file(&dir.path().join("list1.json")),
            Err(DatasetError::Malformed { .. })
        ));
        assert!(matches!(
            load_file(&dir.path().join("list2.json")),
            Err(DatasetError::NotAList { .. })
        ));

        let loaded = load_vocab(dir.path(), LATIN);
        assert_eq!(loaded.files_loaded, 1);
        assert_eq!(loaded.files_skipped, 2);

        let vocab = loaded.entries;
        assert_eq!(vocab.len(), 1);
        assert_eq!(vocab[0].source, "chien");
        assert_eq!(vocab[0].id, 1);
    }

    #[test]
    fn missing_directory_yields_empty_vocabulary() {
        let dir = TempDir::new().unwrap();
        assert_eq!(
            load_vocab(&dir.path().join("absent"), LATIN),
            LoadedVocab::default()
        );
    }

    #[test]
    fn incomplete_records_are_dropped() {
        assert!(normalize_record(&json!({"pron": "ʃa"})).is_none());
        assert!(normalize_record(&json!({"fr": "chat"})).is_none());
        assert!(normalize_record(&json!({"de": "Katze"})).is_none());
        assert!(normalize_record(&json!({"fr": "   ", "de": "Katze"})).is_none());
        assert!(normalize_record(&json!({"lemma": "amicus"})).is_none());
        assert!(normalize_record(&json!("chat")).is_none());
    }

    #[test]
    fn frde_record_uses_first_non_empty_alias_and_trims() {
        let entry = normalize_record(&json!({
            "fr": "",
            "french": "  chat ",
            "de": "Katze ",
            "pronunciation": " ʃa "
        }))
        .unwrap();

        assert_eq!(entry.source, "chat");
        assert_eq!(entry.target, "Katze");
        assert_eq!(entry.pron, "ʃa");
        assert_eq!(entry.details, DatasetDetails::Frde);
    }

    #[test]
    fn latin_record_is_detected_and_normalized() {
        let entry = normalize_record(&json!({
            "lemma": " amicus ",
            "translation_de": "Freund",
            "part_of_speech": "noun",
            "principal_parts": ["amicus", "amici", " m. "],
            "example": {"la": "Amicus certus.", "de": "Ein sicherer Freund."}
        }))
        .unwrap();

        assert_eq!(entry.source, "amicus");
        assert_eq!(entry.target, "Freund");
        assert_eq!(
            entry.details,
            DatasetDetails::Latin(LatinDetails {
                part_of_speech: Some("noun".into()),
                principal_parts: Some("amicus, amici, m.".into()),
                example_source: Some("Amicus certus.".into()),
                example_target: Some("Ein sicherer Freund.".into()),
            })
        );
    }

    #[test]
    fn latin_schema_wins_even_with_frde_keys() {
        let entry = normalize_record(&json!({
            "translation_de": "Freund",
            "fr": "ami",
            "de": "Freund"
        }));
        assert!(entry.is_none());
    }

    #[test]
    fn serialized_entry_carries_dataset_tag() {
        let entry = normalize_record(&json!({"fr": "chat", "de": "Katze"})).unwrap();
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["dataset"], "frde");
        assert_eq!(value["source"], "chat");
        assert_eq!(value["pron"], "");
    }
}
