pub mod duplicates;
pub mod loader;
pub mod relaxed_json;

pub use duplicates::find_duplicates;
pub use loader::load_vocab;
