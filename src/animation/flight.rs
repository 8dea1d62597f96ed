use super::*;
use crate::NodeId;
use crate::Pixels;
use crate::layout::Point;
use std::time::Duration;
use std::time::Instant;

/// A transient marker travelling a path, one segment after another.
/// Its position is a pure function of the time elapsed since launch.
#[derive(Debug, Clone)]
pub struct Flight {
    marker: Marker,
    leaf: NodeId,
    launched: Instant,
    legs: Vec<(Segment, Duration)>,
    total: Duration,
}

impl Flight {
    pub fn new(points: &[Point], leaf: NodeId, marker: Marker, velocity: Pixels, now: Instant) -> Self {
        let legs = Segment::chain(points)
            .into_iter()
            .map(|seg| (seg, seg.duration(velocity)))
            .collect::<Vec<_>>();
        let total = legs.iter().map(|(_, d)| *d).sum();
        Self {
            marker,
            leaf,
            launched: now,
            legs,
            total,
        }
    }
    pub fn leaf(&self) -> NodeId {
        self.leaf
    }
    pub fn marker(&self) -> Marker {
        self.marker
    }
    pub fn segments(&self) -> usize {
        self.legs.len()
    }
    pub fn duration(&self) -> Duration {
        self.total
    }
    pub fn done(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.launched) >= self.total
    }
    /// Marker position `elapsed` after launch; None without segments.
    pub fn position(&self, elapsed: Duration) -> Option<Point> {
        let mut left = elapsed;
        for (seg, span) in self.legs.iter() {
            if left < *span {
                return Some(seg.at(left.as_secs_f64() / span.as_secs_f64()));
            }
            left -= *span;
        }
        self.legs.last().map(|(seg, _)| seg.to)
    }
    pub fn position_at(&self, now: Instant) -> Option<Point> {
        self.position(now.saturating_duration_since(self.launched))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flight(now: Instant) -> Flight {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(0.0, 280.0),
            Point::new(140.0, 280.0),
        ];
        Flight::new(&points, 7, Marker::default(), 280.0, now)
    }

    #[test]
    fn duration_sums_segments() {
        let flight = flight(Instant::now());
        assert_eq!(flight.segments(), 2);
        assert_eq!(flight.duration(), Duration::from_millis(1500));
    }
    #[test]
    fn segments_play_in_order() {
        let flight = flight(Instant::now());
        assert_eq!(flight.position(Duration::ZERO), Some(Point::new(0.0, 0.0)));
        assert_eq!(
            flight.position(Duration::from_millis(500)),
            Some(Point::new(0.0, 140.0))
        );
        assert_eq!(
            flight.position(Duration::from_millis(1000)),
            Some(Point::new(0.0, 280.0))
        );
        assert_eq!(
            flight.position(Duration::from_millis(1250)),
            Some(Point::new(70.0, 280.0))
        );
        assert_eq!(
            flight.position(Duration::from_secs(9)),
            Some(Point::new(140.0, 280.0))
        );
    }
    #[test]
    fn done_after_total_duration() {
        let now = Instant::now();
        let flight = flight(now);
        assert!(!flight.done(now + Duration::from_millis(1499)));
        assert!(flight.done(now + Duration::from_millis(1500)));
    }
    #[test]
    fn single_point_has_no_motion() {
        let now = Instant::now();
        let flight = Flight::new(&[Point::default()], 0, Marker::default(), 280.0, now);
        assert_eq!(flight.segments(), 0);
        assert!(flight.done(now));
        assert_eq!(flight.position(Duration::ZERO), None);
    }
}
