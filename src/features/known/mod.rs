pub mod error_responses;
pub mod store;

pub use store::KnownStore;
