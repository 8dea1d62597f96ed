use crate::Pixels;
use crate::layout::Point;
use std::time::Duration;

/// One edge of a path in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    pub fn length(&self) -> Pixels {
        self.from.distance(&self.to)
    }
    /// Travel time at a constant velocity in pixels per second.
    /// A velocity that is not positive and finite travels instantly.
    pub fn duration(&self, velocity: Pixels) -> Duration {
        match velocity.is_finite() && velocity > 0.0 {
            true => Duration::try_from_secs_f64(self.length() / velocity).unwrap_or(Duration::MAX),
            false => Duration::ZERO,
        }
    }
    /// Position after covering `t` of the segment, `t` in [0, 1].
    pub fn at(&self, t: f64) -> Point {
        self.from.lerp(&self.to, t.clamp(0.0, 1.0))
    }
    /// Consecutive segments joining a polyline.
    pub fn chain(points: &[Point]) -> Vec<Self> {
        points
            .windows(2)
            .map(|w| Self {
                from: w[0],
                to: w[1],
            })
            .collect()
    }
}
