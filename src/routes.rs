use axum::{
    Extension, Router,
    routing::{get, get_service, post},
};
use std::path::Path;
use std::sync::Arc;
use tera::Tera;
use tower_http::{cors::CorsLayer, services::ServeDir};

use crate::{
    handlers::{pages, vocab},
    state::AppState,
};

pub fn app_router(state: AppState, templates: Arc<Tera>, static_dir: &Path) -> Router {
    Router::new()
        // Page
        .route("/", get(pages::index))
        // Vocabulary and quiz API
        .route("/vocab", get(vocab::get_vocab))
        .route("/learn", get(vocab::learn))
        .route("/test", get(vocab::test))
        .route("/duplicates", get(vocab::duplicates))
        // Known words
        .route("/known", get(vocab::get_known))
        .route("/mark_known", post(vocab::mark_known))
        .route("/reset_known", post(vocab::reset_known))
        // Static files
        .nest_service("/static", get_service(ServeDir::new(static_dir)))
        .with_state(state)
        .layer(Extension(templates))
        .layer(CorsLayer::permissive())
}
