use rand::Rng;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// A 2D vector used for both positions and sizes. The y axis points up.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn dot(self, other: Point) -> f32 {
        self.x * other.x + self.y * other.y
    }

    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Returns the unit vector pointing the same way, or zero for a zero-length vector.
    pub fn normalize(self) -> Point {
        let len = self.length();
        if len > 0.0 {
            self * (1.0 / len)
        } else {
            Point::ZERO
        }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Point) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f32> for Point {
    type Output = Point;

    fn mul(self, rhs: f32) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

/// The four children of a subdivided area, in storage order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    /// Offset of this quadrant inside a contiguous block of four children.
    pub fn offset(self) -> u32 {
        match self {
            Quadrant::TopLeft => 0,
            Quadrant::TopRight => 1,
            Quadrant::BottomLeft => 2,
            Quadrant::BottomRight => 3,
        }
    }

    fn is_left(self) -> bool {
        matches!(self, Quadrant::TopLeft | Quadrant::BottomLeft)
    }

    fn is_top(self) -> bool {
        matches!(self, Quadrant::TopLeft | Quadrant::TopRight)
    }
}

/// Axis-aligned rectangle stored as its bottom-left and top-right corners.
///
/// Zero width or height is legal. A rectangle whose bottom-left lies above or to the
/// right of its top-right is ill-formed; see [`Rect::is_well_formed`].
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub bottom_left: Point,
    pub top_right: Point,
}

impl Rect {
    pub const fn new(bottom_left: Point, top_right: Point) -> Self {
        Self {
            bottom_left,
            top_right,
        }
    }

    pub fn from_coords(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self::new(Point::new(min_x, min_y), Point::new(max_x, max_y))
    }

    /// Builds a rectangle from its corner and size.
    pub fn from_origin_size(bottom_left: Point, size: Point) -> Self {
        Self::new(bottom_left, bottom_left + size)
    }

    pub fn from_center(center: Point, width: f32, height: f32) -> Self {
        let half = Point::new(width * 0.5, height * 0.5);
        Self::new(center - half, center + half)
    }

    pub fn width(&self) -> f32 {
        self.top_right.x - self.bottom_left.x
    }

    pub fn height(&self) -> f32 {
        self.top_right.y - self.bottom_left.y
    }

    pub fn size(&self) -> Point {
        self.top_right - self.bottom_left
    }

    pub fn center(&self) -> Point {
        self.bottom_left + self.size() * 0.5
    }

    pub fn is_well_formed(&self) -> bool {
        self.bottom_left.is_finite()
            && self.top_right.is_finite()
            && self.bottom_left.x <= self.top_right.x
            && self.bottom_left.y <= self.top_right.y
    }

    /// Strict overlap: shared edges or corners do not count.
    pub fn overlaps(&self, other: &Rect) -> bool {
        other.top_right.x > self.bottom_left.x
            && other.top_right.y > self.bottom_left.y
            && other.bottom_left.x < self.top_right.x
            && other.bottom_left.y < self.top_right.y
    }

    /// Closed-interval test: true unless `self` lies entirely outside `area`.
    pub fn touches_area(&self, area: &Rect) -> bool {
        !(self.bottom_left.x > area.top_right.x
            || self.top_right.x < area.bottom_left.x
            || self.bottom_left.y > area.top_right.y
            || self.top_right.y < area.bottom_left.y)
    }

    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.bottom_left.x
            && p.x <= self.top_right.x
            && p.y >= self.bottom_left.y
            && p.y <= self.top_right.y
    }

    /// The child area for `quadrant` when this rectangle is split at its center.
    pub fn quadrant(&self, quadrant: Quadrant) -> Rect {
        let half = self.size() * 0.5;
        let x = if quadrant.is_left() { 0.0 } else { half.x };
        let y = if quadrant.is_top() { half.y } else { 0.0 };
        Rect::from_origin_size(self.bottom_left + Point::new(x, y), half)
    }

    /// A random well-formed rectangle lying inside `self`, each side at most `max_extent`.
    pub fn random_rect_inside<R: Rng>(&self, max_extent: f32, rng: &mut R) -> Rect {
        let w = safe_randf32(rng, 0.0, max_extent.min(self.width()));
        let h = safe_randf32(rng, 0.0, max_extent.min(self.height()));
        let x = safe_randf32(rng, self.bottom_left.x, self.top_right.x - w);
        let y = safe_randf32(rng, self.bottom_left.y, self.top_right.y - h);
        Rect::from_coords(x, y, x + w, y + h)
    }
}

fn safe_randf32<R: Rng>(rng: &mut R, min: f32, max: f32) -> f32 {
    if min >= max {
        return min;
    }
    rng.gen_range(min..=max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_zero_vector_is_zero() {
        assert_eq!(Point::ZERO.normalize(), Point::ZERO);
        let n = Point::new(3.0, 4.0).normalize();
        assert!((n.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn quadrant_offsets_follow_storage_order() {
        let offsets: Vec<u32> = Quadrant::ALL.iter().map(|q| q.offset()).collect();
        assert_eq!(offsets, vec![0, 1, 2, 3]);
    }
}
