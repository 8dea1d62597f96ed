mod svg;

pub use svg::*;
