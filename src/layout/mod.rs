mod layout;
mod point;
mod viewport;

pub use layout::*;
pub use point::*;
pub use viewport::*;
