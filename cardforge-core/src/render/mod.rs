pub mod chain;
pub mod cube;
pub mod grid;
