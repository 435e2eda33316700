pub mod model;
pub mod svg;
