use anyhow::Context as _;
use std::sync::Arc;
use tera::Tera;
use tokio::net::TcpListener;

mod config;
mod data;
mod features;
mod handlers;
mod routes;
mod state;
mod utils;

use config::AppConfig;
use features::dataset::{find_duplicates, load_vocab};
use features::known::KnownStore;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Environment and logging
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env();
    config.ensure_dirs();

    // Vocabulary is loaded once and never changes afterwards
    let loaded = load_vocab(&config.words_dir, &config.latin_file);
    log::info!(
        "Loaded {} words from {} dataset files in {} ({} skipped)",
        loaded.entries.len(),
        loaded.files_loaded,
        config.words_dir.display(),
        loaded.files_skipped
    );
    let vocab = loaded.entries;

    let duplicates = find_duplicates(&vocab);
    if !duplicates.is_clean() {
        log::warn!(
            "{} duplicate word pairs, {} repeated source terms in dataset",
            duplicates.pairs.len(),
            duplicates.sources.len()
        );
    }

    let known = KnownStore::load(&config.known_path);
    log::info!(
        "{} words marked as known ({})",
        known.pairs().len(),
        known.path().display()
    );

    // Templates configuration
    let templates = Tera::new(&config.templates_glob).context("Template parsing error")?;
    let templates = Arc::new(templates);

    let state = AppState::new(vocab, known, duplicates);
    let app = routes::app_router(state, templates, &config.static_dir);

    // Start server
    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to address {}", config.bind_addr))?;

    log::info!("Server running on http://{}", config.bind_addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
