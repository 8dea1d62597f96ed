use crate::MARKER_VELOCITY;
use crate::Pixels;
use crate::animation::Grid;
use crate::layout::Spacing;
use crate::layout::Viewport;
use crate::playback::Speed;

/// Runtime-tunable presentation parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub speed: Speed,
    pub velocity: Pixels,
    pub spacing: Spacing,
    pub grid: Grid,
    pub viewport: Viewport,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            speed: Speed::default(),
            velocity: MARKER_VELOCITY,
            spacing: Spacing::default(),
            grid: Grid::default(),
            viewport: Viewport::default(),
        }
    }
}
