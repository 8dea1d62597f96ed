mod error;
mod path;
mod predictor;

pub use error::*;
pub use path::*;
pub use predictor::*;
