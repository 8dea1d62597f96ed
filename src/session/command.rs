use crate::NodeId;

/// Discrete user controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play,
    Pause,
    Step,
    /// Slider position, clamped to the speed range.
    Speed(u8),
    Fit,
    Reset,
    Inspect(NodeId),
    Status,
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Play => write!(f, "play"),
            Self::Pause => write!(f, "pause"),
            Self::Step => write!(f, "step"),
            Self::Speed(v) => write!(f, "speed {}", v),
            Self::Fit => write!(f, "fit"),
            Self::Reset => write!(f, "reset"),
            Self::Inspect(id) => write!(f, "inspect {}", id),
            Self::Status => write!(f, "status"),
        }
    }
}
