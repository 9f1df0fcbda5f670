use std::fs;
use std::path::PathBuf;

/// Runtime settings, read from the environment (and `.env`) with local defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub words_dir: PathBuf,
    pub latin_file: String,
    pub known_path: PathBuf,
    pub templates_glob: String,
    pub static_dir: PathBuf,
    pub bind_addr: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            words_dir: PathBuf::from("words"),
            latin_file: "latin.json".into(),
            known_path: PathBuf::from("known_words.json"),
            templates_glob: "templates/**/*.html".into(),
            static_dir: PathBuf::from("static"),
            bind_addr: "0.0.0.0:8080".into(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            words_dir: var("WORDS_DIR").map(PathBuf::from).unwrap_or(defaults.words_dir),
            latin_file: var("LATIN_DATASET_FILE").unwrap_or(defaults.latin_file),
            known_path: var("KNOWN_PATH").map(PathBuf::from).unwrap_or(defaults.known_path),
            templates_glob: var("TEMPLATES_GLOB").unwrap_or(defaults.templates_glob),
            static_dir: var("STATIC_DIR").map(PathBuf::from).unwrap_or(defaults.static_dir),
            bind_addr: var("BIND_ADDR").unwrap_or(defaults.bind_addr),
        }
    }

    /// Creates the data and asset directories. Failures are only logged.
    pub fn ensure_dirs(&self) {
        let templates_dir = self
            .templates_glob
            .split("/*")
            .next()
            .map(PathBuf::from)
            .unwrap_or_default();

        for dir in [&self.words_dir, &self.static_dir, &templates_dir] {
            if dir.as_os_str().is_empty() {
                continue;
            }
            if let Err(e) = fs::create_dir_all(dir) {
                log::warn!("Failed to create {}: {}", dir.display(), e);
            }
        }
    }
}
