mod cadence;
mod controller;
mod readout;
mod speed;
mod state;

pub use cadence::*;
pub use controller::*;
pub use readout::*;
pub use speed::*;
pub use state::*;
