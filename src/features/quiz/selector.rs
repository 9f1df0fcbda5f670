use lazy_static::lazy_static;
use rand::Rng;
use rand::seq::SliceRandom;
use regex::Regex;
use std::collections::{BTreeSet, HashSet};

use crate::data::models::{KnownPair, QuizError, QuizItem, VocabEntry};
use crate::features::quiz::Direction;

lazy_static! {
    static ref ID_SEPARATOR_RE: Regex = Regex::new(r"[,\s]+").unwrap();
}

/// Parses "3, 7 12" style id lists. Tokens that are not ids are ignored.
pub fn parse_exclude_ids(raw: &str) -> HashSet<u32> {
    ID_SEPARATOR_RE
        .split(raw.trim())
        .filter_map(|token| token.parse::<u32>().ok())
        .collect()
}

/// Draws one random entry that is neither known nor excluded.
pub fn select_question<R: Rng + ?Sized>(
    vocab: &[VocabEntry],
    known: &BTreeSet<KnownPair>,
    direction: Option<&str>,
    exclude: &HashSet<u32>,
    rng: &mut R,
) -> Result<QuizItem, QuizError> {
    let direction = Direction::parse_param(direction)?;
    if vocab.is_empty() {
        return Err(QuizError::NoVocabulary);
    }

    let unknown: Vec<&VocabEntry> = vocab
        .iter()
        .filter(|entry| !known.contains(&KnownPair::from(*entry)))
        .collect();
    if unknown.is_empty() {
        return Err(QuizError::AllKnown);
    }

    let pool: Vec<&VocabEntry> = unknown
        .into_iter()
        .filter(|entry| !exclude.contains(&entry.id))
        .collect();

    let choice = pool.choose(rng).ok_or(QuizError::RoundExhausted)?;
    let (question, answer) = direction.orient(choice);

    Ok(QuizItem {
        question: question.to_string(),
        answer: answer.to_string(),
        entry: (*choice).clone(),
    })
}
