pub mod algorithms;
pub mod config;
pub mod errors;
pub mod point;

pub mod divided_difference;
pub use divided_difference::{compute_divided_difference, divided_difference};
