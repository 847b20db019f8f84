// src/models/geometry.rs
//
// Axis-aligned boxes for hit-testing and layout.
// Boxes are anchored at their bottom-left corner in world units.

use nannou::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn from_corner_size(corner: Vec2, size: Vec2) -> Self {
        Self::new(corner.x, corner.y, size.x, size.y)
    }

    /// The window rectangle as nannou reports it: centred on the origin.
    pub fn centered(w: f32, h: f32) -> Self {
        Self::new(-w * 0.5, -h * 0.5, w, h)
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y
    }

    pub fn top(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        vec2(self.x + self.w * 0.5, self.y + self.h * 0.5)
    }

    // edges are inclusive
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.bottom()
            && point.y <= self.top()
    }

    // touching edges do not count as overlap
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.bottom() < other.top()
            && other.bottom() < self.top()
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.x += delta.x;
        self.y += delta.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_edges() {
        let b = Bounds::new(0.0, 0.0, 10.0, 20.0);
        assert!(b.contains(pt2(0.0, 0.0)));
        assert!(b.contains(pt2(10.0, 20.0)));
        assert!(b.contains(pt2(5.0, 5.0)));
        assert!(!b.contains(pt2(10.1, 5.0)));
        assert!(!b.contains(pt2(5.0, -0.1)));
    }

    #[test]
    fn test_overlaps() {
        let a = Bounds::new(0.0, 0.0, 10.0, 10.0);
        let b = Bounds::new(5.0, 5.0, 10.0, 10.0);
        let c = Bounds::new(10.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_centered() {
        let b = Bounds::centered(200.0, 100.0);
        assert_eq!(b.left(), -100.0);
        assert_eq!(b.right(), 100.0);
        assert_eq!(b.top(), 50.0);
        assert_eq!(b.center(), Vec2::ZERO);
    }
}
