//! Binary pixel masks over an image grid.

use crate::types::Point;

/// A binary membership map over a `width` x `height` pixel grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionMask {
    data: Vec<bool>,
    width: u32,
    height: u32,
}

impl RegionMask {
    /// Create an empty mask.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![false; (width * height) as usize],
            width,
            height,
        }
    }

    pub fn from_fn<F>(width: u32, height: u32, f: F) -> Self
    where
        F: Fn(u32, u32) -> bool,
    {
        let mut data = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self { data, width, height }
    }

    /// Mask filled with the interior of `polygon` (even-odd rule, sampled at pixel centers).
    pub fn from_polygon(width: u32, height: u32, polygon: &[Point]) -> Self {
        let mut mask = Self::new(width, height);
        mask.fill_polygon(polygon);
        mask
    }

    /// Mask filled with the convex hull of `points`.
    pub fn from_convex_hull(width: u32, height: u32, points: &[Point]) -> Self {
        Self::from_polygon(width, height, &convex_hull(points))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether pixel (x, y) is set. Out-of-bounds pixels are never set.
    pub fn get(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.data[(y * self.width + x) as usize]
    }

    pub fn set(&mut self, x: u32, y: u32) {
        if x < self.width && y < self.height {
            self.data[(y * self.width + x) as usize] = true;
        }
    }

    /// Number of set pixels.
    pub fn count(&self) -> usize {
        self.data.iter().filter(|&&v| v).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.data.iter().any(|&v| v)
    }

    /// Pixel-wise AND. Masks must cover the same grid.
    pub fn intersect(&self, other: &RegionMask) -> RegionMask {
        debug_assert_eq!((self.width, self.height), (other.width, other.height));
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| a && b)
            .collect();
        Self {
            data,
            width: self.width,
            height: self.height,
        }
    }

    /// Coordinates of set pixels in row-major order.
    pub fn iter_set(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let width = self.width;
        self.data
            .iter()
            .enumerate()
            .filter(|(_, &v)| v)
            .map(move |(i, _)| (i as u32 % width, i as u32 / width))
    }

    /// Scanline fill of `polygon` into this mask.
    pub fn fill_polygon(&mut self, polygon: &[Point]) {
        if polygon.len() < 3 || self.width == 0 || self.height == 0 {
            return;
        }

        let min_y = polygon.iter().map(|p| p.y).fold(f32::MAX, f32::min);
        let max_y = polygon.iter().map(|p| p.y).fold(f32::MIN, f32::max);
        let y_start = min_y.floor().max(0.0) as u32;
        let y_end = (max_y.ceil().max(0.0) as u32).min(self.height);

        let n = polygon.len();
        let mut crossings: Vec<f32> = Vec::with_capacity(n);

        for y in y_start..y_end {
            let cy = y as f32 + 0.5;
            crossings.clear();

            for i in 0..n {
                let a = polygon[i];
                let b = polygon[(i + 1) % n];
                // Half-open rule so shared vertices are counted once.
                if (a.y <= cy && b.y > cy) || (b.y <= cy && a.y > cy) {
                    let t = (cy - a.y) / (b.y - a.y);
                    crossings.push(a.x + t * (b.x - a.x));
                }
            }
            crossings.sort_by(|a, b| a.total_cmp(b));

            for span in crossings.chunks_exact(2) {
                // Pixel x is inside when its center x + 0.5 lies in [left, right).
                let x_start = (span[0] - 0.5).ceil().max(0.0) as u32;
                let x_end = ((span[1] - 0.5).ceil().max(0.0) as u32).min(self.width);
                for x in x_start..x_end {
                    self.data[(y * self.width + x) as usize] = true;
                }
            }
        }
    }
}

/// Convex hull (Andrew's monotone chain), counter-clockwise in image coordinates.
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    let mut pts: Vec<Point> = points.to_vec();
    pts.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    pts.dedup();

    if pts.len() < 3 {
        return pts;
    }

    fn cross(o: Point, a: Point, b: Point) -> f32 {
        (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
    }

    let mut lower: Vec<Point> = Vec::with_capacity(pts.len());
    for &p in &pts {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], p) <= 0.0 {
            lower.pop();
        }
        lower.push(p);
    }

    let mut upper: Vec<Point> = Vec::with_capacity(pts.len());
    for &p in pts.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], p) <= 0.0 {
            upper.pop();
        }
        upper.push(p);
    }

    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x0: f32, y0: f32, x1: f32, y1: f32) -> Vec<Point> {
        vec![
            Point::new(x0, y0),
            Point::new(x1, y0),
            Point::new(x1, y1),
            Point::new(x0, y1),
        ]
    }

    #[test]
    fn fill_axis_aligned_square() {
        let mask = RegionMask::from_polygon(20, 20, &square(2.0, 3.0, 12.0, 8.0));
        assert_eq!(mask.count(), 10 * 5);
        assert!(mask.get(2, 3));
        assert!(mask.get(11, 7));
        assert!(!mask.get(12, 7));
        assert!(!mask.get(11, 8));
        assert!(!mask.get(1, 3));
    }

    #[test]
    fn fill_is_clipped_to_grid() {
        let mask = RegionMask::from_polygon(10, 10, &square(-5.0, -5.0, 5.0, 50.0));
        assert_eq!(mask.count(), 5 * 10);
    }

    #[test]
    fn fill_triangle_area() {
        let triangle = [
            Point::new(0.0, 0.0),
            Point::new(40.0, 0.0),
            Point::new(0.0, 40.0),
        ];
        let mask = RegionMask::from_polygon(64, 64, &triangle);
        // Half of 40x40, within one pixel along the diagonal.
        let count = mask.count() as i32;
        assert!((count - 800).abs() <= 40, "count = {}", count);
    }

    #[test]
    fn degenerate_polygon_fills_nothing() {
        let line = [Point::new(0.0, 0.0), Point::new(9.0, 9.0)];
        let mask = RegionMask::from_polygon(10, 10, &line);
        assert!(mask.is_empty());
    }

    #[test]
    fn hull_drops_interior_points() {
        let mut points = square(0.0, 0.0, 10.0, 10.0);
        points.push(Point::new(5.0, 5.0));
        points.push(Point::new(2.0, 7.0));

        let hull = convex_hull(&points);
        assert_eq!(hull.len(), 4);
        assert!(!hull.contains(&Point::new(5.0, 5.0)));

        let mask = RegionMask::from_convex_hull(16, 16, &points);
        assert_eq!(mask.count(), 100);
    }

    #[test]
    fn intersection_and_iteration() {
        let a = RegionMask::from_fn(4, 4, |x, _| x < 2);
        let b = RegionMask::from_fn(4, 4, |_, y| y == 1);
        let both = a.intersect(&b);

        assert_eq!(both.count(), 2);
        let set: Vec<_> = both.iter_set().collect();
        assert_eq!(set, vec![(0, 1), (1, 1)]);
    }

    #[test]
    fn out_of_bounds_access() {
        let mut mask = RegionMask::new(3, 3);
        mask.set(5, 5);
        assert!(mask.is_empty());
        assert!(!mask.get(3, 0));
    }
}
