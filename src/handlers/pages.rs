use axum::{
    extract::State,
    response::IntoResponse,
    Extension,
};
use std::sync::Arc;
use tera::{Context, Tera};

use crate::{state::AppState, utils::render_template};

pub async fn index(
    Extension(templates): Extension<Arc<Tera>>,
    State(state): State<AppState>,
) -> impl IntoResponse {
    let latin = state.vocab.iter().any(|entry| entry.is_latin());

    let mut context = Context::new();
    context.insert("entry_count", &state.vocab.len());
    context.insert("known_count", &state.known().pairs().len());
    context.insert("forward", if latin { "la-de" } else { "fr-de" });
    context.insert("reverse", if latin { "de-la" } else { "de-fr" });
    context.insert("source_label", if latin { "Latein" } else { "Französisch" });
    render_template(&templates, "index.html", context)
}
