//=========================================================================
// Transform Component
//=========================================================================
//
// World-space placement of a game object: position, scale and rotation.
// Pure data — the update pass does nothing. Other components (sprite,
// movement, game code) read and write it.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::any::Any;

use glam::Vec2;

//=== Internal Dependencies ===============================================

use super::Component;
use crate::core::Context;
use crate::object::GameObject;

//=== TransformComponent ==================================================

/// Position, scale and rotation in world space.
///
/// Rotation is in degrees, clockwise (matching the screen-space +y-down
/// convention).
#[derive(Debug, Clone, PartialEq)]
pub struct TransformComponent {
    pub position: Vec2,
    pub scale: Vec2,
    pub rotation: f32,
}

impl TransformComponent {
    /// Creates a transform at `position` with unit scale and no rotation.
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            scale: Vec2::ONE,
            rotation: 0.0,
        }
    }

    /// Creates a fully specified transform.
    pub fn with_scale_rotation(position: Vec2, scale: Vec2, rotation: f32) -> Self {
        Self {
            position,
            scale,
            rotation,
        }
    }

    /// Moves the transform by an offset.
    pub fn translate(&mut self, offset: Vec2) {
        self.position += offset;
    }
}

impl Default for TransformComponent {
    fn default() -> Self {
        Self::new(Vec2::ZERO)
    }
}

impl Component for TransformComponent {
    fn update(&mut self, _dt: f32, _owner: &mut GameObject, _ctx: &mut Context) {}

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_has_unit_scale_and_no_rotation() {
        let t = TransformComponent::new(Vec2::new(3.0, 4.0));
        assert_eq!(t.position, Vec2::new(3.0, 4.0));
        assert_eq!(t.scale, Vec2::ONE);
        assert_eq!(t.rotation, 0.0);
    }

    #[test]
    fn translate_accumulates() {
        let mut t = TransformComponent::default();
        t.translate(Vec2::new(1.0, 0.0));
        t.translate(Vec2::new(2.0, -1.0));
        assert_eq!(t.position, Vec2::new(3.0, -1.0));
    }
}
