mod dataset;
mod error;
mod sample;

pub use dataset::*;
pub use error::*;
pub use sample::*;
