//=========================================================================
// Math Utilities
//=========================================================================
//
// Small geometry helpers shared by the render and scene layers.
//
// The engine uses `glam::Vec2` for all 2D positions, scales and sizes.
// World coordinates follow the screen convention: +x right, +y down,
// origin at the top-left of the world.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;

//=== Rect ================================================================

/// Axis-aligned rectangle described by its top-left corner and size.
///
/// Used for sprite source sub-rectangles (in texture pixels), camera
/// limit bounds (in world units) and viewport intersection tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner.
    pub position: Vec2,

    /// Width and height. Rectangles with non-positive size are treated
    /// as empty by the intersection helpers.
    pub size: Vec2,
}

impl Rect {
    /// Creates a rectangle from top-left corner and size.
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }

    /// Creates a rectangle from raw components.
    pub fn from_xywh(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Bottom-right corner (`position + size`).
    pub fn max(&self) -> Vec2 {
        self.position + self.size
    }

    /// Returns `true` if the rectangle has zero or negative area.
    pub fn is_empty(&self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Returns `true` if `self` and `other` overlap.
    ///
    /// Empty rectangles never intersect anything.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.position.x < other.max().x
            && other.position.x < self.max().x
            && self.position.y < other.max().y
            && other.position.y < self.max().y
    }

    /// Returns `true` if `point` lies inside the rectangle.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.position.x
            && point.x < self.max().x
            && point.y >= self.position.y
            && point.y < self.max().y
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_is_position_plus_size() {
        let r = Rect::from_xywh(1.0, 2.0, 3.0, 4.0);
        assert_eq!(r.max(), Vec2::new(4.0, 6.0));
    }

    #[test]
    fn overlapping_rects_intersect() {
        let a = Rect::from_xywh(0.0, 0.0, 10.0, 10.0);
        let b = Rect::from_xywh(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Rect::from_xywh(0.0, 0.0, 10.0, 10.0);
        let b = Rect::from_xywh(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn empty_rect_never_intersects() {
        let a = Rect::from_xywh(0.0, 0.0, 0.0, 10.0);
        let b = Rect::from_xywh(-5.0, -5.0, 20.0, 20.0);
        assert!(!a.intersects(&b));
        assert!(a.is_empty());
    }

    #[test]
    fn contains_is_inclusive_of_min_exclusive_of_max() {
        let r = Rect::from_xywh(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(Vec2::new(0.0, 0.0)));
        assert!(r.contains(Vec2::new(9.9, 9.9)));
        assert!(!r.contains(Vec2::new(10.0, 10.0)));
    }
}
