//! Axis-aligned boxes and the two tests the frame step needs
//!
//! All geometry is arena-local (origin top-left, y grows downward) and derived
//! from the logical model, never measured from rendered output.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
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

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }
}

/// Inclusive AABB overlap: boxes that merely touch count as overlapping
///
/// Overlap iff neither box lies entirely left of, right of, above, or below
/// the other.
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    !(a.right() < b.left() || a.left() > b.right() || a.bottom() < b.top() || a.top() > b.bottom())
}

/// True once the box's trailing (right) edge is strictly past the arena's left edge
#[inline]
pub fn exited_near_edge(rect: &Rect, arena: &Rect) -> bool {
    rect.right() < arena.left()
}

/// Clamp a vertical position so a box of `height` stays inside the arena with `margin`
/// on the top and bottom
#[inline]
pub fn clamp_vertical(y: f32, height: f32, arena: &Rect, margin: f32) -> f32 {
    let min = arena.top() + margin;
    let max = (arena.bottom() - height - margin).max(min);
    y.clamp(min, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena() -> Rect {
        Rect::new(0.0, 0.0, 800.0, 450.0)
    }

    #[test]
    fn test_overlap_full() {
        let hero = Rect::new(24.0, 200.0, 48.0, 48.0);
        let laser = Rect::new(30.0, 220.0, 40.0, 6.0);
        assert!(overlaps(&hero, &laser));
        assert!(overlaps(&laser, &hero));
    }

    #[test]
    fn test_overlap_touching_edges_counts() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Shares the x = 10 edge
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(overlaps(&a, &b));
        // Shares the y = 10 edge
        let c = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(overlaps(&a, &c));
    }

    #[test]
    fn test_no_overlap_when_separated() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!overlaps(&a, &Rect::new(10.5, 0.0, 10.0, 10.0)));
        assert!(!overlaps(&a, &Rect::new(-10.5, 0.0, 10.0, 10.0)));
        assert!(!overlaps(&a, &Rect::new(0.0, 10.5, 10.0, 10.0)));
        assert!(!overlaps(&a, &Rect::new(0.0, -10.5, 10.0, 10.0)));
    }

    #[test]
    fn test_exit_requires_trailing_edge_past_left() {
        let arena = arena();
        // Right edge exactly on x = 0 is still inside
        assert!(!exited_near_edge(&Rect::new(-40.0, 100.0, 40.0, 6.0), &arena));
        assert!(exited_near_edge(&Rect::new(-40.5, 100.0, 40.0, 6.0), &arena));
        assert!(!exited_near_edge(&Rect::new(-20.0, 100.0, 40.0, 6.0), &arena));
    }

    #[test]
    fn test_clamp_vertical() {
        let arena = arena();
        assert_eq!(clamp_vertical(-50.0, 48.0, &arena, 8.0), 8.0);
        assert_eq!(clamp_vertical(1000.0, 48.0, &arena, 8.0), 450.0 - 48.0 - 8.0);
        assert_eq!(clamp_vertical(200.0, 48.0, &arena, 8.0), 200.0);
    }
}
