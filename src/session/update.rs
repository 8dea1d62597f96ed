use crate::NodeId;
use crate::layout::Transform;
use crate::playback::Readout;
use crate::playback::Speed;
use crate::playback::State;
use crate::playback::Tally;
use crate::predict::PredictError;

/// Changes a session reports to its display surface.
#[derive(Debug, Clone, PartialEq)]
pub enum Update {
    /// Display fields after a tick.
    Readout(Readout),
    /// A sample could not be routed; `index` is 1-based.
    Failed { index: usize, reason: PredictError },
    /// A marker settled under a leaf at the given slot.
    Landed { leaf: NodeId, slot: usize },
    State(State),
    Speed(Speed),
    Fit(Transform),
    Inspect(String),
    Notice(String),
    /// Every sample has been processed.
    Finished(Tally),
    /// Progress and accumulated visuals were cleared.
    Reset,
}

impl Update {
    /// Whether the drawing changed and should be redrawn.
    pub fn redraws(&self) -> bool {
        matches!(
            self,
            Update::Readout(_)
                | Update::Failed { .. }
                | Update::Landed { .. }
                | Update::Fit(_)
                | Update::Reset
        )
    }
}

impl std::fmt::Display for Update {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Update::Readout(readout) => write!(f, "{}", readout),
            Update::Failed { index, reason } => write!(f, "sample {} failed: {}", index, reason),
            Update::Landed { leaf, slot } => write!(f, "leaf {} holds {}", leaf, slot + 1),
            Update::State(state) => write!(f, "playback {}", state),
            Update::Speed(speed) => write!(f, "speed {}", speed),
            Update::Fit(transform) => write!(f, "view {}", transform),
            Update::Inspect(text) => write!(f, "{}", text),
            Update::Notice(text) => write!(f, "{}", text),
            Update::Finished(tally) => write!(f, "finished: {}", tally),
            Update::Reset => write!(f, "reset"),
        }
    }
}
