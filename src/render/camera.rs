//=========================================================================
// Camera
//=========================================================================
//
// 2D camera: a world-space position, a viewport size, and optional
// world bounds the camera may not leave.
//
// Screen space is the viewport with origin at its top-left corner; the
// camera position is the world point shown at that corner, so
// world→screen is a plain translation. Parallax layers translate by a
// per-layer fraction of the camera position instead.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;
use log::debug;

//=== Internal Dependencies ===============================================

use crate::math::Rect;

//=== Camera ==============================================================

/// World↔screen transform with optional movement bounds.
pub struct Camera {
    viewport_size: Vec2,
    position: Vec2,
    limit_bounds: Option<Rect>,
}

impl Camera {
    //--- Construction -----------------------------------------------------

    /// Creates a camera at the given world position.
    ///
    /// `limit_bounds`, when set, is the world rectangle the visible area
    /// must stay inside; the position is clamped on every move.
    pub fn new(viewport_size: Vec2, position: Vec2, limit_bounds: Option<Rect>) -> Self {
        debug!("camera created at ({}, {})", position.x, position.y);
        let mut camera = Self {
            viewport_size,
            position,
            limit_bounds,
        };
        camera.clamp_position();
        camera
    }

    //--- Movement ---------------------------------------------------------

    /// Moves the camera by an offset, clamping to the limit bounds.
    pub fn move_by(&mut self, offset: Vec2) {
        self.position += offset;
        self.clamp_position();
    }

    /// Teleports the camera, clamping to the limit bounds.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.clamp_position();
    }

    /// Installs new limit bounds and re-clamps the current position.
    pub fn set_limit_bounds(&mut self, bounds: Rect) {
        self.limit_bounds = Some(bounds);
        self.clamp_position();
    }

    //--- Coordinate Transforms --------------------------------------------

    /// World position → screen position.
    pub fn world_to_screen(&self, world_pos: Vec2) -> Vec2 {
        world_pos - self.position
    }

    /// World position → screen position for a parallax layer.
    ///
    /// `scroll_factor` of (1, 1) scrolls with the world; (0, 0) is fixed
    /// to the screen; values between give background depth layers.
    pub fn world_to_screen_parallax(&self, world_pos: Vec2, scroll_factor: Vec2) -> Vec2 {
        world_pos - self.position * scroll_factor
    }

    /// Screen position → world position.
    pub fn screen_to_world(&self, screen_pos: Vec2) -> Vec2 {
        screen_pos + self.position
    }

    //--- Accessors --------------------------------------------------------

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn viewport_size(&self) -> Vec2 {
        self.viewport_size
    }

    pub fn limit_bounds(&self) -> Option<Rect> {
        self.limit_bounds
    }

    /// The viewport as a screen-space rectangle at the origin.
    pub fn viewport_rect(&self) -> Rect {
        Rect::new(Vec2::ZERO, self.viewport_size)
    }

    //--- Internal Helpers -------------------------------------------------

    /// Keeps the visible area inside the limit bounds.
    ///
    /// When the bounds are smaller than the viewport on an axis, the
    /// camera pins to the bounds' minimum on that axis.
    fn clamp_position(&mut self) {
        let Some(bounds) = self.limit_bounds else {
            return;
        };
        if bounds.is_empty() {
            return;
        }
        let min_position = bounds.position;
        let max_position = (bounds.max() - self.viewport_size).max(min_position);
        self.position = self.position.clamp(min_position, max_position);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn bounded_camera() -> Camera {
        Camera::new(
            Vec2::new(640.0, 360.0),
            Vec2::ZERO,
            Some(Rect::from_xywh(0.0, 0.0, 2000.0, 1000.0)),
        )
    }

    #[test]
    fn world_to_screen_is_translation() {
        let mut camera = Camera::new(Vec2::new(640.0, 360.0), Vec2::ZERO, None);
        camera.set_position(Vec2::new(100.0, 50.0));

        let screen = camera.world_to_screen(Vec2::new(150.0, 60.0));
        assert_relative_eq!(screen.x, 50.0);
        assert_relative_eq!(screen.y, 10.0);

        let world = camera.screen_to_world(screen);
        assert_relative_eq!(world.x, 150.0);
        assert_relative_eq!(world.y, 60.0);
    }

    #[test]
    fn parallax_scrolls_by_factor() {
        let mut camera = Camera::new(Vec2::new(640.0, 360.0), Vec2::ZERO, None);
        camera.set_position(Vec2::new(200.0, 100.0));

        let screen = camera.world_to_screen_parallax(Vec2::ZERO, Vec2::new(0.5, 0.0));
        assert_relative_eq!(screen.x, -100.0);
        assert_relative_eq!(screen.y, 0.0);
    }

    #[test]
    fn position_clamps_to_bounds() {
        let mut camera = bounded_camera();

        camera.set_position(Vec2::new(-50.0, -50.0));
        assert_eq!(camera.position(), Vec2::ZERO);

        camera.set_position(Vec2::new(99999.0, 99999.0));
        // max = bounds.max - viewport = (2000-640, 1000-360)
        assert_eq!(camera.position(), Vec2::new(1360.0, 640.0));
    }

    #[test]
    fn move_by_accumulates_and_clamps() {
        let mut camera = bounded_camera();
        camera.move_by(Vec2::new(100.0, 0.0));
        camera.move_by(Vec2::new(100.0, 0.0));
        assert_eq!(camera.position(), Vec2::new(200.0, 0.0));

        camera.move_by(Vec2::new(-1000.0, 0.0));
        assert_eq!(camera.position(), Vec2::ZERO);
    }

    #[test]
    fn bounds_smaller_than_viewport_pin_to_minimum() {
        let camera = Camera::new(
            Vec2::new(640.0, 360.0),
            Vec2::new(300.0, 300.0),
            Some(Rect::from_xywh(100.0, 100.0, 200.0, 200.0)),
        );
        assert_eq!(camera.position(), Vec2::new(100.0, 100.0));
    }

    #[test]
    fn unbounded_camera_moves_freely() {
        let mut camera = Camera::new(Vec2::new(640.0, 360.0), Vec2::ZERO, None);
        camera.set_position(Vec2::new(-9999.0, 9999.0));
        assert_eq!(camera.position(), Vec2::new(-9999.0, 9999.0));
    }
}
