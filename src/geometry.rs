use cgmath::{EuclideanSpace, Point2, Vector2};

/// Axis-aligned rectangle, `origin` at the top-left corner, y growing downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub origin: Point2<f64>,
    pub size: Vector2<f64>,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point2::new(x, y),
            size: Vector2::new(width, height),
        }
    }

    pub fn from_size(size: Vector2<f64>) -> Self {
        Self {
            origin: Point2::origin(),
            size,
        }
    }

    pub fn min(&self) -> Point2<f64> {
        self.origin
    }

    pub fn max(&self) -> Point2<f64> {
        self.origin + self.size
    }

    pub fn mid(&self) -> Point2<f64> {
        self.origin + self.size / 2.
    }

    /// Edges are inclusive, so a touch on the very border still counts.
    pub fn contains(&self, point: Point2<f64>) -> bool {
        let (min, max) = (self.min(), self.max());
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }

    /// Nearest point of the rectangle.
    pub fn clamp(&self, point: Point2<f64>) -> Point2<f64> {
        let (min, max) = (self.min(), self.max());
        Point2::new(point.x.max(min.x).min(max.x), point.y.max(min.y).min(max.y))
    }
}

/// Optional clamping region, `None` meaning unconstrained.
pub fn clamp_to(region: Option<&Rect>, point: Point2<f64>) -> Point2<f64> {
    match region {
        Some(rect) => rect.clamp(point),
        None => point,
    }
}

/// A space touch locations can be projected into.
///
/// Touch samples are recorded in one space shared by the whole host (think window
/// coordinates); every consumer converts from there.
pub trait CoordinateSpace {
    fn from_shared(&self, point: Point2<f64>) -> Point2<f64>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SharedSpace;

impl CoordinateSpace for SharedSpace {
    fn from_shared(&self, point: Point2<f64>) -> Point2<f64> {
        point
    }
}

/// A rectangle expressed in the shared space defines the local space of whatever it frames.
impl CoordinateSpace for Rect {
    fn from_shared(&self, point: Point2<f64>) -> Point2<f64> {
        point - self.origin.to_vec()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn contains_edges() {
        let r = Rect::new(10., 10., 100., 50.);
        assert!(r.contains(Point2::new(10., 10.)));
        assert!(r.contains(Point2::new(110., 60.)));
        assert!(!r.contains(Point2::new(110.5, 20.)));
        assert!(!r.contains(Point2::new(50., 9.)));
    }

    #[test]
    fn clamp_point() {
        let r = Rect::new(50., 0., 0., 100.);
        assert_eq!(r.clamp(Point2::new(80., 120.)), Point2::new(50., 100.));
        assert_eq!(r.clamp(Point2::new(20., 40.)), Point2::new(50., 40.));
        assert_eq!(clamp_to(None, Point2::new(-3., 4.)), Point2::new(-3., 4.));
    }

    #[test]
    fn frame_space() {
        let frame = Rect::new(20., 30., 200., 100.);
        assert_eq!(frame.from_shared(Point2::new(25., 35.)), Point2::new(5., 5.));
        assert_eq!(frame.mid(), Point2::new(120., 80.));
        assert_eq!(SharedSpace.from_shared(Point2::new(1., 2.)), Point2::new(1., 2.));
    }
}
