use rand::Rng;

/// Anything that can be placed in a spatial index by its bounding box.
pub trait Shape {
    fn bounding_box(&self) -> Rectangle;
}

/// Axis-aligned rectangle anchored at its top-left corner.
///
/// `y` grows downwards, so `top() <= bottom()` for any rectangle with a
/// non-negative height.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rectangle {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Finite coordinates and non-negative extents.
    pub fn is_valid(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width >= 0.0
            && self.height >= 0.0
    }

    /// Half-open on the right and bottom edges.
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.left() && x < self.right() && y >= self.top() && y < self.bottom()
    }

    /// Rectangles that only touch along an edge do not intersect.
    pub fn intersects(&self, other: &Rectangle) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    pub fn contains(&self, other: &Rectangle) -> bool {
        other.left() >= self.left()
            && other.right() <= self.right()
            && other.top() >= self.top()
            && other.bottom() <= self.bottom()
    }

    pub fn expand_to_include(&mut self, other: &Rectangle) {
        let left = f32::min(self.left(), other.left());
        let right = f32::max(self.right(), other.right());
        let top = f32::min(self.top(), other.top());
        let bottom = f32::max(self.bottom(), other.bottom());
        self.x = left;
        self.y = top;
        self.width = right - left;
        self.height = bottom - top;
    }

    /// A `width` x `height` rectangle placed uniformly at random inside `self`.
    ///
    /// When it cannot fit along an axis it is pinned to the left/top edge.
    pub fn random_inside<R: Rng>(&self, width: f32, height: f32, rng: &mut R) -> Rectangle {
        Rectangle {
            x: self._safe_randf32(rng, self.left(), self.right() - width),
            y: self._safe_randf32(rng, self.top(), self.bottom() - height),
            width,
            height,
        }
    }

    fn _safe_randf32<R: Rng>(&self, rng: &mut R, min: f32, max: f32) -> f32 {
        if min >= max {
            return min;
        }
        rng.gen_range(min..=max)
    }
}

impl Shape for Rectangle {
    fn bounding_box(&self) -> Rectangle {
        *self
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub bounding_box: Rectangle,
}

impl Circle {
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        Self {
            x,
            y,
            radius,
            bounding_box: Self::bounds_for(x, y, radius),
        }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn update(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
        self.bounding_box = Self::bounds_for(x, y, self.radius);
    }

    pub fn update_with_radius(&mut self, x: f32, y: f32, radius: f32) {
        self.x = x;
        self.y = y;
        self.radius = radius;
        self.bounding_box = Self::bounds_for(x, y, radius);
    }

    fn bounds_for(x: f32, y: f32, radius: f32) -> Rectangle {
        Rectangle {
            x: x - radius,
            y: y - radius,
            width: radius * 2.0,
            height: radius * 2.0,
        }
    }
}

impl Default for Circle {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

impl Shape for Circle {
    fn bounding_box(&self) -> Rectangle {
        self.bounding_box
    }
}

/// Geometry paired with arbitrary caller data.
///
/// The index only ever looks at `bounds`; `payload` rides along untouched
/// and needs no trait bounds of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct Item<P> {
    pub bounds: Rectangle,
    pub payload: P,
}

impl<P> Item<P> {
    pub fn new(bounds: Rectangle, payload: P) -> Self {
        Self { bounds, payload }
    }
}

impl<P> Shape for Item<P> {
    fn bounding_box(&self) -> Rectangle {
        self.bounds
    }
}
