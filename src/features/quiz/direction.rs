use std::str::FromStr;

use crate::data::models::{LearnItem, QuizError, VocabEntry};

/// Which term is the prompt. `Forward` asks the source term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Reverse,
}

impl FromStr for Direction {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fr-de" | "la-de" => Ok(Direction::Forward),
            "de-fr" | "de-la" => Ok(Direction::Reverse),
            other => Err(QuizError::InvalidDirection(other.to_string())),
        }
    }
}

impl Direction {
    /// Missing direction means forward.
    pub fn parse_param(raw: Option<&str>) -> Result<Self, QuizError> {
        raw.map_or(Ok(Direction::default()), str::parse::<Direction>)
    }

    /// Returns (prompt, answer). Only the two core terms move.
    pub fn orient<'a>(&self, entry: &'a VocabEntry) -> (&'a str, &'a str) {
        match self {
            Direction::Forward => (entry.source.as_str(), entry.target.as_str()),
            Direction::Reverse => (entry.target.as_str(), entry.source.as_str()),
        }
    }

    pub fn map_entry(&self, entry: &VocabEntry) -> LearnItem {
        let (from, to) = self.orient(entry);
        LearnItem {
            from: from.to_string(),
            to: to.to_string(),
            entry: entry.clone(),
        }
    }
}

pub fn map_all(direction: Direction, vocab: &[VocabEntry]) -> Vec<LearnItem> {
    vocab.iter().map(|entry| direction.map_entry(entry)).collect()
}
