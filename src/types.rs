use serde::{Deserialize, Serialize};

/// A 2D point with floating-point coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Point a fraction `t` of the way from `self` towards `target`.
    pub fn lerp(self, target: Point, t: f32) -> Point {
        self + (target - self) * t
    }
}

impl std::ops::Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl std::ops::Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl std::ops::Mul<f32> for Point {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

/// A bounding box defined by top-left corner, width, and height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl BoundingBox {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Smallest box containing every point, or `None` for an empty slice.
    pub fn enclosing(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let (mut min, mut max) = (*first, *first);
        for p in &points[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some(Self::new(min.x, min.y, max.x - min.x, max.y - min.y))
    }

    /// Convert a point from normalized coordinates [0,1] to image coordinates
    /// within this bounding box.
    pub fn denormalize_point(&self, p: Point) -> Point {
        Point::new(self.x + p.x * self.width, self.y + p.y * self.height)
    }
}

/// A facial shape represented as a collection of landmark points.
/// The region layout expects the 68-point iBUG annotation scheme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub points: Vec<Point>,
}

impl Shape {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn num_landmarks(&self) -> usize {
        self.points.len()
    }

    /// Add a shape delta point by point.
    pub fn add_delta(&mut self, delta: &Shape) {
        for (point, d) in self.points.iter_mut().zip(&delta.points) {
            *point = *point + *d;
        }
    }

    /// Copy of the points at the given landmark indices, in order.
    pub fn select(&self, indices: &[usize]) -> Vec<Point> {
        indices.iter().map(|&i| self.points[i]).collect()
    }
}

impl std::ops::Index<usize> for Shape {
    type Output = Point;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.points[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(3.0, 4.0);

        let sum = a + b;
        assert_eq!(sum.x, 4.0);
        assert_eq!(sum.y, 6.0);

        let diff = b - a;
        assert_eq!(diff.x, 2.0);
        assert_eq!(diff.y, 2.0);

        let scaled = a * 2.0;
        assert_eq!(scaled.x, 2.0);
        assert_eq!(scaled.y, 4.0);
    }

    #[test]
    fn lerp_moves_towards_target() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, -20.0);

        let mid = a.lerp(b, 0.5);
        assert!((mid.x - 5.0).abs() < 1e-6);
        assert!((mid.y + 10.0).abs() < 1e-6);
        assert_eq!(a.lerp(b, 0.0), a);
    }

    #[test]
    fn bounding_box_denormalization() {
        let bbox = BoundingBox::new(100.0, 100.0, 200.0, 200.0);

        let center = bbox.denormalize_point(Point::new(0.5, 0.5));
        assert_eq!(center.x, 200.0);
        assert_eq!(center.y, 200.0);
    }

    #[test]
    fn enclosing_box() {
        let points = [
            Point::new(3.0, 7.0),
            Point::new(-1.0, 2.0),
            Point::new(5.0, 4.0),
        ];
        let bbox = BoundingBox::enclosing(&points).unwrap();
        assert_eq!(bbox, BoundingBox::new(-1.0, 2.0, 6.0, 5.0));

        assert!(BoundingBox::enclosing(&[]).is_none());
    }

    #[test]
    fn shape_delta_is_added_pointwise() {
        let mut shape = Shape::new(vec![Point::new(1.0, 1.0), Point::new(2.0, 2.0)]);
        shape.add_delta(&Shape::new(vec![Point::new(0.5, -1.0), Point::new(0.0, 3.0)]));
        assert_eq!(shape.points, vec![Point::new(1.5, 0.0), Point::new(2.0, 5.0)]);
    }

    #[test]
    fn shape_select() {
        let shape = Shape::new(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 2.0),
        ]);
        let picked = shape.select(&[2, 0]);
        assert_eq!(picked, vec![Point::new(2.0, 2.0), Point::new(0.0, 0.0)]);
    }
}
