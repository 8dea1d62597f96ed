mod args;
mod channel;
mod console;
mod input;
mod runtime;

pub use args::*;
pub use channel::*;
pub use console::*;
pub use input::*;
pub use runtime::*;
