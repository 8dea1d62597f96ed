use super::*;
use crate::FIT_PADDING;
use crate::Pixels;
use crate::VIEWPORT_HEIGHT;
use crate::VIEWPORT_WIDTH;
use crate::ZOOM_MAX;
use crate::ZOOM_MIN;

/// Axis-aligned box around a set of points.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    /// Smallest box holding every point; the origin when there are none.
    pub fn enclosing(points: impl IntoIterator<Item = Point>) -> Self {
        points
            .into_iter()
            .fold(None, |acc: Option<Self>, p| match acc {
                None => Some(Self { min: p, max: p }),
                Some(b) => Some(Self {
                    min: Point::new(b.min.x.min(p.x), b.min.y.min(p.y)),
                    max: Point::new(b.max.x.max(p.x), b.max.y.max(p.y)),
                }),
            })
            .unwrap_or_default()
    }
    pub fn width(&self) -> Pixels {
        self.max.x - self.min.x
    }
    pub fn height(&self) -> Pixels {
        self.max.y - self.min.y
    }
    pub fn center(&self) -> Point {
        self.min.lerp(&self.max, 0.5)
    }
    pub fn grow(&self, margin: Pixels) -> Self {
        Self {
            min: self.min.offset(-margin, -margin),
            max: self.max.offset(margin, margin),
        }
    }
    pub fn union(&self, other: &Self) -> Self {
        Self::enclosing([self.min, self.max, other.min, other.max])
    }
}

/// Size of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: Pixels,
    pub height: Pixels,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: VIEWPORT_WIDTH,
            height: VIEWPORT_HEIGHT,
        }
    }
}

/// Uniform zoom followed by translation: `p' = p * scale + (tx, ty)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale: f64,
    pub tx: Pixels,
    pub ty: Pixels,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            tx: 0.0,
            ty: 0.0,
        }
    }
}

impl Transform {
    /// Zoom that fits the bounds inside the viewport minus padding,
    /// clamped to the zoom extent, with the bounds centred.
    pub fn fit(bounds: &Bounds, viewport: &Viewport) -> Self {
        Self::fit_padded(bounds, viewport, FIT_PADDING)
    }
    pub fn fit_padded(bounds: &Bounds, viewport: &Viewport, padding: Pixels) -> Self {
        let room_x = (viewport.width - 2.0 * padding).max(1.0);
        let room_y = (viewport.height - 2.0 * padding).max(1.0);
        let scale = match (bounds.width() > 0.0, bounds.height() > 0.0) {
            (true, true) => (room_x / bounds.width()).min(room_y / bounds.height()),
            (true, false) => room_x / bounds.width(),
            (false, true) => room_y / bounds.height(),
            (false, false) => 1.0,
        }
        .clamp(ZOOM_MIN, ZOOM_MAX);
        let center = bounds.center();
        Self {
            scale,
            tx: viewport.width / 2.0 - center.x * scale,
            ty: viewport.height / 2.0 - center.y * scale,
        }
    }
    pub fn apply(&self, p: Point) -> Point {
        Point::new(p.x * self.scale + self.tx, p.y * self.scale + self.ty)
    }
}

impl std::fmt::Display for Transform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "translate({:.2},{:.2}) scale({:.4})",
            self.tx, self.ty, self.scale
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enclosing_box() {
        let bounds = Bounds::enclosing([
            Point::new(-5.0, 0.0),
            Point::new(10.0, 40.0),
            Point::new(0.0, -2.0),
        ]);
        assert_eq!(bounds.min, Point::new(-5.0, -2.0));
        assert_eq!(bounds.max, Point::new(10.0, 40.0));
        assert_eq!(bounds.width(), 15.0);
        assert_eq!(Bounds::enclosing([]), Bounds::default());
    }
    #[test]
    fn fit_centres_and_scales() {
        let bounds = Bounds {
            min: Point::new(0.0, 0.0),
            max: Point::new(200.0, 100.0),
        };
        let viewport = Viewport {
            width: 440.0,
            height: 440.0,
        };
        let t = Transform::fit_padded(&bounds, &viewport, 20.0);
        assert_eq!(t.scale, 2.0);
        assert_eq!(t.apply(bounds.center()), Point::new(220.0, 220.0));
        assert_eq!(t.apply(bounds.min).x, 20.0);
    }
    #[test]
    fn fit_clamps_zoom() {
        let dot = Bounds::enclosing([Point::new(3.0, 3.0)]);
        let t = Transform::fit(&dot, &Viewport::default());
        assert_eq!(t.scale, 1.0);
        let huge = Bounds {
            min: Point::new(0.0, 0.0),
            max: Point::new(1e6, 1e6),
        };
        assert_eq!(Transform::fit(&huge, &Viewport::default()).scale, ZOOM_MIN);
        let tiny = Bounds {
            min: Point::new(0.0, 0.0),
            max: Point::new(1.0, 0.0),
        };
        assert_eq!(Transform::fit(&tiny, &Viewport::default()).scale, ZOOM_MAX);
    }
}
