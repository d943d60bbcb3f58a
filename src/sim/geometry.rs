//! Axis-aligned rectangles and the bounding-box capability
//!
//! Overlap follows the usual sprite-rect rule: edges that merely touch do not
//! collide, so a player standing exactly on a platform top is not inside it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned box, `x`/`y` at the top-left corner, y grows downward
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Top-left corner
    #[inline]
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.right(), self.bottom())
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// True when the interiors intersect (shared edges don't count)
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());
        a_min.x < b_max.x && a_max.x > b_min.x && a_min.y < b_max.y && a_max.y > b_min.y
    }

    /// Copy shifted by `delta`
    #[inline]
    pub fn translated(&self, delta: Vec2) -> Rect {
        let min = self.min() + delta;
        Rect::new(min.x, min.y, self.width, self.height)
    }

    pub fn has_positive_size(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    pub fn is_finite(&self) -> bool {
        self.min().is_finite() && self.size().is_finite()
    }
}

/// Anything that takes part in collision: platforms, the player, loot, enemies
pub trait Bounded {
    /// Level-space bounding box
    fn bounding_box(&self) -> Rect;

    fn overlaps<B: Bounded + ?Sized>(&self, other: &B) -> bool {
        self.bounding_box().overlaps(&other.bounding_box())
    }
}

impl Bounded for Rect {
    fn bounding_box(&self) -> Rect {
        *self
    }
}

/// True if `rect` overlaps any of `others`
pub fn overlaps_any<'a, B, I>(rect: &Rect, others: I) -> bool
where
    B: Bounded + 'a,
    I: IntoIterator<Item = &'a B>,
{
    others.into_iter().any(|o| rect.overlaps(&o.bounding_box()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_interior() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let floor = Rect::new(0.0, 591.0, 1920.0, 129.0);
        let standing = Rect::new(10.0, 495.0, 64.0, 96.0);
        assert_eq!(standing.bottom(), floor.top());
        assert!(!standing.overlaps(&floor));

        let sunk = standing.translated(Vec2::new(0.0, 0.5));
        assert!(sunk.overlaps(&floor));
    }

    #[test]
    fn test_disjoint() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&Rect::new(20.0, 0.0, 5.0, 5.0)));
        assert!(!a.overlaps(&Rect::new(0.0, 20.0, 5.0, 5.0)));
    }

    #[test]
    fn test_shift_keeps_size() {
        let r = Rect::new(620.0, 427.0, 173.0, 72.0).translated(Vec2::new(-15.0, 0.0));
        assert_eq!(r, Rect::new(605.0, 427.0, 173.0, 72.0));
    }

    #[test]
    fn test_size_checks() {
        assert!(Rect::new(0.0, 0.0, 1.0, 1.0).has_positive_size());
        assert!(!Rect::new(0.0, 0.0, 0.0, 1.0).has_positive_size());
        assert!(!Rect::new(0.0, 0.0, 5.0, -1.0).has_positive_size());
        assert!(!Rect::new(f32::NAN, 0.0, 5.0, 1.0).is_finite());
    }

    #[test]
    fn test_overlaps_any() {
        let platforms = [Rect::new(0.0, 100.0, 50.0, 10.0), Rect::new(100.0, 100.0, 50.0, 10.0)];
        assert!(overlaps_any(&Rect::new(120.0, 95.0, 10.0, 10.0), &platforms));
        assert!(!overlaps_any(&Rect::new(60.0, 95.0, 10.0, 10.0), &platforms));
    }
}
