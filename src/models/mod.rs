pub mod input;
pub mod workout;
