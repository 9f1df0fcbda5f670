pub mod pages;
pub mod vocab;
