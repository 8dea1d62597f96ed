mod command;
mod scene;
mod session;
mod settings;
mod update;

pub use command::*;
pub use scene::*;
pub use session::*;
pub use settings::*;
pub use update::*;
