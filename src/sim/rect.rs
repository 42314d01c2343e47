//! Axis-aligned boxes and screen bounds
//!
//! Every entity in these games is a rectangle, so collision is a plain
//! AABB overlap test and bounds handling is clamping against the window.

use glam::Vec2;

use crate::consts::{WINDOW_HEIGHT, WINDOW_WIDTH};

/// Axis-aligned bounding box (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Strict overlap: boxes that only share an edge do not collide
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let a_max = self.max();
        let b_max = other.max();
        self.pos.x < b_max.x && a_max.x > other.pos.x && self.pos.y < b_max.y && a_max.y > other.pos.y
    }
}

/// Clamp a box's top-left corner so the whole box stays inside the window
#[inline]
pub fn clamp_to_window(pos: Vec2, size: Vec2) -> Vec2 {
    Vec2::new(
        pos.x.clamp(0.0, (WINDOW_WIDTH - size.x).max(0.0)),
        pos.y.clamp(0.0, (WINDOW_HEIGHT - size.y).max(0.0)),
    )
}

/// True once a box has fully left the window on any side
#[inline]
pub fn is_off_screen(pos: Vec2, size: Vec2) -> bool {
    pos.x < -size.x || pos.x > WINDOW_WIDTH || pos.y < -size.y || pos.y > WINDOW_HEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn square(x: f32, y: f32, s: f32) -> Aabb {
        Aabb::new(Vec2::new(x, y), Vec2::splat(s))
    }

    #[test]
    fn test_overlap_hit() {
        let a = square(0.0, 0.0, 50.0);
        let b = square(40.0, 40.0, 30.0);
        assert!(a.overlaps(&b));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = square(0.0, 0.0, 50.0);
        let b = square(50.0, 0.0, 30.0);
        assert!(!a.overlaps(&b));
        let c = square(0.0, 50.0, 30.0);
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_contained_box_overlaps() {
        let outer = square(0.0, 0.0, 100.0);
        let inner = square(10.0, 10.0, 5.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_clamp_to_window() {
        let size = Vec2::splat(50.0);
        assert_eq!(clamp_to_window(Vec2::new(-10.0, -3.0), size), Vec2::ZERO);
        assert_eq!(
            clamp_to_window(Vec2::new(900.0, 700.0), size),
            Vec2::new(750.0, 550.0)
        );
        assert_eq!(
            clamp_to_window(Vec2::new(100.0, 200.0), size),
            Vec2::new(100.0, 200.0)
        );
    }

    #[test]
    fn test_off_screen_edges() {
        let size = Vec2::splat(30.0);
        // Freshly spawned on an edge: still on screen
        assert!(!is_off_screen(Vec2::new(100.0, -30.0), size));
        assert!(!is_off_screen(Vec2::new(800.0, 100.0), size));
        // One more pixel out: gone
        assert!(is_off_screen(Vec2::new(100.0, -30.5), size));
        assert!(is_off_screen(Vec2::new(800.5, 100.0), size));
        assert!(is_off_screen(Vec2::new(-31.0, 100.0), size));
        assert!(is_off_screen(Vec2::new(100.0, 601.0), size));
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(
            ax in -100.0f32..900.0, ay in -100.0f32..700.0,
            aw in 1.0f32..200.0, ah in 1.0f32..200.0,
            bx in -100.0f32..900.0, by in -100.0f32..700.0,
            bw in 1.0f32..200.0, bh in 1.0f32..200.0,
        ) {
            let a = Aabb::new(Vec2::new(ax, ay), Vec2::new(aw, ah));
            let b = Aabb::new(Vec2::new(bx, by), Vec2::new(bw, bh));
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn clamp_keeps_player_inside(x in -5000.0f32..5000.0, y in -5000.0f32..5000.0) {
            let size = Vec2::new(50.0, 50.0);
            let p = clamp_to_window(Vec2::new(x, y), size);
            prop_assert!(p.x >= 0.0 && p.x <= WINDOW_WIDTH - size.x);
            prop_assert!(p.y >= 0.0 && p.y <= WINDOW_HEIGHT - size.y);
        }
    }
}
