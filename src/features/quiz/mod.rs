pub mod direction;
pub mod error_responses;
pub mod selector;

pub use direction::Direction;
pub use selector::{parse_exclude_ids, select_question};
