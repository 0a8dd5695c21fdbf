//! Axis-aligned rectangles
//!
//! Everything in the world is a screen-space rectangle with its origin at the
//! top-left corner and y growing downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub const fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Strict overlap on all four edges; touching edges do not count
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Strict overlap on the x axis only
    #[inline]
    pub fn overlaps_x(&self, other: &Aabb) -> bool {
        self.right() > other.left() && self.left() < other.right()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Aabb {
        Aabb::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn test_intersects_overlapping() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&rect(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.intersects(&rect(0.0, 10.0, 10.0, 10.0)));
    }

    #[test]
    fn test_overlaps_x_ignores_vertical() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(5.0, 500.0, 10.0, 10.0);
        assert!(a.overlaps_x(&b));
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_edges_and_center() {
        let a = rect(2.0, 4.0, 6.0, 8.0);
        assert_eq!(a.right(), 8.0);
        assert_eq!(a.bottom(), 12.0);
        assert_eq!(a.center(), Vec2::new(5.0, 8.0));
    }
}
