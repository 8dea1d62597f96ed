use crate::Pixels;

/// Screen-space position.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: Pixels,
    pub y: Pixels,
}

impl Point {
    pub fn new(x: Pixels, y: Pixels) -> Self {
        Self { x, y }
    }
    pub fn distance(&self, other: &Self) -> Pixels {
        (self.x - other.x).hypot(self.y - other.y)
    }
    /// Linear interpolation, `t = 0` at self and `t = 1` at other.
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }
    pub fn offset(&self, dx: Pixels, dy: Pixels) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl From<(Pixels, Pixels)> for Point {
    fn from((x, y): (Pixels, Pixels)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pythagorean_distance() {
        assert_eq!(Point::new(0.0, 0.0).distance(&Point::new(3.0, 4.0)), 5.0);
    }
    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = Point::new(0.0, 10.0);
        let b = Point::new(20.0, 30.0);
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
        assert_eq!(a.lerp(&b, 0.5), Point::new(10.0, 20.0));
    }
}
