use serde_json::Value;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::data::models::{KnownPair, KnownStoreError};

/// Known pairs backed by a flat JSON file. Every mutation rewrites the file.
#[derive(Debug)]
pub struct KnownStore {
    path: PathBuf,
    pairs: BTreeSet<KnownPair>,
}

impl KnownStore {
    /// Reads the known file, creating it empty when absent. Unreadable or
    /// malformed content yields an empty set.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let pairs = read_pairs(&path);
        Self { path, pairs }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn pairs(&self) -> &BTreeSet<KnownPair> {
        &self.pairs
    }

    /// Sorted by (source, target).
    pub fn list(&self) -> Vec<KnownPair> {
        self.pairs.iter().cloned().collect()
    }

    pub fn add(&mut self, pair: KnownPair) -> Result<(), KnownStoreError> {
        self.pairs.insert(pair);
        self.save()
    }

    pub fn reset(&mut self) -> Result<(), KnownStoreError> {
        self.pairs.clear();
        self.save()
    }

    pub fn save(&self) -> Result<(), KnownStoreError> {
        let pairs: Vec<&KnownPair> = self.pairs.iter().collect();
        let json = serde_json::to_string_pretty(&pairs)?;
        write_atomic(&self.path, json.as_bytes())?;
        Ok(())
    }
}

fn read_pairs(path: &Path) -> BTreeSet<KnownPair> {
    if !path.exists() {
        log::info!("Creating empty known words file at {}", path.display());
        if let Err(e) = write_atomic(path, b"[]") {
            log::error!("Failed to create {}: {}", path.display(), e);
        }
        return BTreeSet::new();
    }

    let data = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            log::warn!("Failed to read {}: {}", path.display(), e);
            return BTreeSet::new();
        }
    };

    let items: Vec<Value> = match serde_json::from_str(&data) {
        Ok(v) => v,
        Err(e) => {
            log::warn!("Ignoring malformed known words file {}: {}", path.display(), e);
            return BTreeSet::new();
        }
    };

    // Records without string source/target are dropped one by one.
    items
        .into_iter()
        .filter_map(|item| serde_json::from_value::<KnownPair>(item).ok())
        .collect()
}

fn write_atomic(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let tmp = tmp_path(path);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    fs::write(&tmp, bytes)?;
    fs::rename(&tmp, path)
}

fn tmp_path(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("known_words.json");
    path.with_file_name(format!("{file_name}.tmp"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> KnownStore {
        KnownStore::load(dir.path().join("known_words.json"))
    }

    #[test]
    fn missing_file_is_created_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert!(store.pairs().is_empty());
        let written = fs::read_to_string(store.path()).unwrap();
        assert_eq!(serde_json::from_str::<Vec<KnownPair>>(&written).unwrap(), vec![]);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.add(KnownPair::new("chien", "Hund")).unwrap();
        store.add(KnownPair::new("chat", "Katze")).unwrap();
        store.add(KnownPair::new("chat", "Katze")).unwrap();

        let reloaded = store_in(&dir);
        assert_eq!(reloaded.pairs(), store.pairs());
        assert_eq!(reloaded.pairs().len(), 2);
    }

    #[test]
    fn file_content_is_sorted_by_source_then_target() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        for (source, target) in [("chien", "Hund"), ("chat", "Kater"), ("chat", "Katze")] {
            store.add(KnownPair::new(source, target)).unwrap();
        }

        let written: Vec<KnownPair> =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(
            written,
            vec![
                KnownPair::new("chat", "Kater"),
                KnownPair::new("chat", "Katze"),
                KnownPair::new("chien", "Hund"),
            ]
        );
        assert_eq!(store.list(), written);
    }

    #[test]
    fn reset_clears_and_persists() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.add(KnownPair::new("chat", "Katze")).unwrap();
        store.reset().unwrap();

        assert!(store.pairs().is_empty());
        assert!(store_in(&dir).pairs().is_empty());
    }

    #[test]
    fn malformed_file_loads_as_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("known_words.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(KnownStore::load(&path).pairs().is_empty());

        fs::write(&path, r#"{"source": "chat", "target": "Katze"}"#).unwrap();
        assert!(KnownStore::load(&path).pairs().is_empty());
    }

    #[test]
    fn non_string_records_are_filtered() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("known_words.json");
        fs::write(
            &path,
            r#"[
                {"source": "chat", "target": "Katze"},
                {"source": 3, "target": "drei"},
                {"source": "chien"},
                "loose",
                {"fr": "lait", "de": "Milch"}
            ]"#,
        )
        .unwrap();

        let store = KnownStore::load(&path);
        assert_eq!(
            store.list(),
            vec![KnownPair::new("chat", "Katze"), KnownPair::new("lait", "Milch")]
        );
    }
}
