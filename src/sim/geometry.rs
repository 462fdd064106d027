//! Axis-aligned rectangle geometry
//!
//! All entities are boxes anchored at their top-left corner in arena units
//! (x grows right, y grows down).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Obstacle;

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    /// Grow the rectangle by `margin` on every side
    pub fn inflate(&self, margin: f32) -> Self {
        Self {
            pos: self.pos - Vec2::splat(margin),
            size: self.size + Vec2::splat(margin * 2.0),
        }
    }

    /// Check that the rectangle lies fully inside `[0, bounds]` on both axes
    pub fn is_within(&self, bounds: Vec2) -> bool {
        let max = self.max();
        self.pos.x >= 0.0 && self.pos.y >= 0.0 && max.x <= bounds.x && max.y <= bounds.y
    }
}

/// Strict overlap test: rectangles that only share an edge do not collide
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    let (a_min, a_max) = (a.min(), a.max());
    let (b_min, b_max) = (b.min(), b.max());
    a_min.x < b_max.x && a_max.x > b_min.x && a_min.y < b_max.y && a_max.y > b_min.y
}

/// Check that `rect` overlaps none of `obstacles`, skipping any whose id is in `exclude`
pub fn is_placeable(rect: &Rect, obstacles: &[Obstacle], exclude: &[u32]) -> bool {
    obstacles
        .iter()
        .filter(|o| !exclude.contains(&o.id))
        .all(|o| !overlaps(rect, &o.rect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Axis, ObstacleKind};

    fn obstacle_at(id: u32, x: f32, y: f32) -> Obstacle {
        Obstacle::new(id, Vec2::new(x, y), 50.0, ObstacleKind::Meteor, Axis::Horizontal, 1.0, (x, x))
    }

    #[test]
    fn test_overlap_interior() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(overlaps(&a, &b));
        assert!(overlaps(&b, &a));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Shares the right edge
        assert!(!overlaps(&a, &Rect::new(10.0, 0.0, 10.0, 10.0)));
        // Shares the bottom edge
        assert!(!overlaps(&a, &Rect::new(0.0, 10.0, 10.0, 10.0)));
        // Shares only a corner
        assert!(!overlaps(&a, &Rect::new(10.0, 10.0, 5.0, 5.0)));
    }

    #[test]
    fn test_overlap_requires_both_axes() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!overlaps(&a, &Rect::new(5.0, 20.0, 10.0, 10.0)));
        assert!(!overlaps(&a, &Rect::new(20.0, 5.0, 10.0, 10.0)));
    }

    #[test]
    fn test_containment_overlaps() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 5.0, 5.0);
        assert!(overlaps(&outer, &inner));
    }

    #[test]
    fn test_inflate() {
        let r = Rect::new(50.0, 280.0, 40.0, 40.0).inflate(50.0);
        assert_eq!(r, Rect::new(0.0, 230.0, 140.0, 140.0));
    }

    #[test]
    fn test_is_within() {
        let bounds = Vec2::new(800.0, 600.0);
        assert!(Rect::new(0.0, 0.0, 40.0, 40.0).is_within(bounds));
        assert!(Rect::new(760.0, 560.0, 40.0, 40.0).is_within(bounds));
        assert!(!Rect::new(761.0, 0.0, 40.0, 40.0).is_within(bounds));
        assert!(!Rect::new(-1.0, 0.0, 40.0, 40.0).is_within(bounds));
    }

    #[test]
    fn test_is_placeable() {
        let obstacles = vec![obstacle_at(1, 100.0, 100.0), obstacle_at(2, 300.0, 100.0)];

        assert!(is_placeable(&Rect::new(0.0, 0.0, 30.0, 30.0), &obstacles, &[]));
        assert!(!is_placeable(&Rect::new(120.0, 120.0, 30.0, 30.0), &obstacles, &[]));
        // Excluding the only overlapping obstacle makes the spot valid
        assert!(is_placeable(&Rect::new(120.0, 120.0, 30.0, 30.0), &obstacles, &[1]));
        assert!(!is_placeable(&Rect::new(120.0, 120.0, 30.0, 30.0), &obstacles, &[2]));
    }

    #[test]
    fn test_is_placeable_empty() {
        assert!(is_placeable(&Rect::new(0.0, 0.0, 1.0, 1.0), &[], &[]));
    }
}
