pub mod known_models;
pub mod quiz_models;
pub mod report_models;
pub mod vocab_models;

pub use known_models::{KnownPair, KnownStoreError};
pub use quiz_models::{LearnItem, QuizError, QuizItem, QuizParams, StatusResponse};
pub use report_models::{DuplicatePair, DuplicateReport, SharedTerm, TermVariant};
pub use vocab_models::{DatasetDetails, DatasetError, LatinDetails, LoadedVocab, VocabEntry};
