//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use verdant_engine::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// App facade
pub use crate::app::{AppError, GameApp};

// Core services
pub use crate::core::{Config, Context, GameClock};

// Scene system
pub use crate::scene::{Scene, SceneLogic, SceneManager, SceneRequests, World};

// Objects and components
pub use crate::component::{Anchor, Component, SpriteComponent, TransformComponent};
pub use crate::object::{GameObject, ObjectId};

// Input system
pub use crate::input::{ActionState, InputManager};

// Rendering
pub use crate::render::{Camera, DrawCommand, RenderBackend, Renderer, Sprite};

// Resources
pub use crate::resource::ResourceManager;

// Math
pub use crate::math::Rect;
pub use glam::Vec2;
