pub mod dataset;
pub mod known;
pub mod quiz;
