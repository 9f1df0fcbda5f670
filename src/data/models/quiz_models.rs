use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data::models::VocabEntry;

/// Query string for `/learn` and `/test`.
#[derive(Debug, Deserialize)]
pub struct QuizParams {
    pub direction: Option<String>,
    pub exclude: Option<String>,
}

/// A vocabulary entry projected into prompt/answer order.
#[derive(Debug, Serialize)]
pub struct LearnItem {
    pub from: String,
    pub to: String,
    #[serde(flatten)]
    pub entry: VocabEntry,
}

/// A single quiz question. Raw entry fields travel along for the client.
#[derive(Debug, Serialize)]
pub struct QuizItem {
    pub question: String,
    pub answer: String,
    #[serde(flatten)]
    pub entry: VocabEntry,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

#[derive(Error, Debug, PartialEq)]
pub enum QuizError {
    #[error("Invalid direction '{0}'. Use fr-de, de-fr, la-de or de-la")]
    InvalidDirection(String),
    #[error("No words loaded.")]
    NoVocabulary,
    #[error("All words are marked as known. Reset to continue.")]
    AllKnown,
    #[error("Every remaining word was already asked in this round. Start a new round to continue.")]
    RoundExhausted,
}

impl QuizError {
    pub fn is_exhausted(&self) -> bool {
        matches!(
            self,
            QuizError::NoVocabulary | QuizError::AllKnown | QuizError::RoundExhausted
        )
    }
}
