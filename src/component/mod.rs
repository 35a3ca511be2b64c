//=========================================================================
// Component System
//=========================================================================
//
// Components are the capability units attached to game objects: a
// transform gives an object a place in the world, a sprite makes it
// drawable, game code adds its own variants for behavior.
//
// Contract:
// - `update` is the only mandatory method; the rest default to no-ops.
// - A game object holds at most one component per concrete type.
// - Every lifecycle call receives the owning object, temporarily
//   detached from that object's component table, so a component can
//   reach its siblings (`owner.component::<TransformComponent>()`)
//   without aliasing its own storage.
// - `init` runs exactly once, right after the component is attached;
//   `clean` runs when the component is removed or its owner is cleaned.
//
// Ordering within one object is the attach order and stays stable
// across frames.
//
//=========================================================================

//=== Module Declarations =================================================

mod sprite;
mod transform;

//=== External Dependencies ===============================================

use std::any::Any;

//=== Internal Dependencies ===============================================

use crate::core::Context;
use crate::object::GameObject;

//=== Public API ==========================================================

pub use sprite::{Anchor, SpriteComponent};
pub use transform::TransformComponent;

//=== Component Trait =====================================================

/// A capability attached to exactly one [`GameObject`].
///
/// # Minimal Implementation
///
/// Only `update` and the two `Any` accessors are required:
///
/// ```rust
/// use verdant_engine::component::Component;
/// use verdant_engine::core::Context;
/// use verdant_engine::object::GameObject;
/// use std::any::Any;
///
/// struct Spin { speed: f32 }
///
/// impl Component for Spin {
///     fn update(&mut self, dt: f32, owner: &mut GameObject, _ctx: &mut Context) {
///         use verdant_engine::component::TransformComponent;
///         if let Some(t) = owner.component_mut::<TransformComponent>() {
///             t.rotation += self.speed * dt;
///         }
///     }
///
///     fn as_any(&self) -> &dyn Any { self }
///     fn as_any_mut(&mut self) -> &mut dyn Any { self }
/// }
/// ```
pub trait Component: Any {
    /// Called once, right after the component is attached to `owner`.
    fn init(&mut self, _owner: &mut GameObject, _ctx: &mut Context) {}

    /// Called once per frame during the input pass.
    fn handle_input(&mut self, _owner: &mut GameObject, _ctx: &mut Context) {}

    /// Called once per frame during the update pass.
    fn update(&mut self, dt: f32, owner: &mut GameObject, ctx: &mut Context);

    /// Called once per frame during the render pass.
    fn render(&mut self, _owner: &mut GameObject, _ctx: &mut Context) {}

    /// Called when the component is removed or its owner is cleaned.
    fn clean(&mut self, _owner: &mut GameObject) {}

    /// Upcast for type-keyed lookup.
    fn as_any(&self) -> &dyn Any;

    /// Mutable upcast for type-keyed lookup.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}
