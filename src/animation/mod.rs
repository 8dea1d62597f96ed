mod animator;
mod flight;
mod segment;
mod stack;

pub use animator::*;
pub use flight::*;
pub use segment::*;
pub use stack::*;
