pub mod aggregate;
pub mod encoder;
pub mod predict;
pub mod store;
pub mod training;
