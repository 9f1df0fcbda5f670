use axum::extract::{Json, Query, State};
use std::collections::HashSet;
use std::sync::Arc;

use crate::{
    data::models::*,
    features::quiz::{self, Direction},
    state::AppState,
};

pub async fn get_vocab(State(state): State<AppState>) -> Json<Arc<Vec<VocabEntry>>> {
    Json(state.vocab)
}

pub async fn learn(
    State(state): State<AppState>,
    Query(params): Query<QuizParams>,
) -> Result<Json<Vec<LearnItem>>, QuizError> {
    let direction = Direction::parse_param(params.direction.as_deref())?;
    Ok(Json(quiz::direction::map_all(direction, &state.vocab)))
}

pub async fn test(
    State(state): State<AppState>,
    Query(params): Query<QuizParams>,
) -> Result<Json<QuizItem>, QuizError> {
    let exclude = params
        .exclude
        .as_deref()
        .map(quiz::parse_exclude_ids)
        .unwrap_or_else(HashSet::new);

    let known = state.known();
    let item = quiz::select_question(
        &state.vocab,
        known.pairs(),
        params.direction.as_deref(),
        &exclude,
        &mut rand::thread_rng(),
    )
    .inspect_err(|e| {
        if e.is_exhausted() {
            log::info!("Quiz pool exhausted ({} excluded)", exclude.len());
        }
    })?;

    Ok(Json(item))
}

pub async fn mark_known(
    State(state): State<AppState>,
    Json(pair): Json<KnownPair>,
) -> Result<Json<StatusResponse>, KnownStoreError> {
    log::debug!("Marking known: {} / {}", pair.source, pair.target);
    state.known().add(pair)?;
    Ok(Json(StatusResponse { status: "ok" }))
}

pub async fn reset_known(
    State(state): State<AppState>,
) -> Result<Json<StatusResponse>, KnownStoreError> {
    state.known().reset()?;
    log::info!("Known words reset");
    Ok(Json(StatusResponse { status: "reset" }))
}

pub async fn get_known(State(state): State<AppState>) -> Json<Vec<KnownPair>> {
    Json(state.known().list())
}

pub async fn duplicates(State(state): State<AppState>) -> Json<Arc<DuplicateReport>> {
    Json(state.duplicates)
}
