mod error;
mod hierarchy;
mod meta;
mod model;
mod node;

pub use error::*;
pub use hierarchy::*;
pub use meta::*;
pub use model::*;
pub use node::*;
