//=========================================================================
// Shared Execution Context
//=========================================================================
//
// The bundle of collaborator subsystems handed down the scene tree.
//
// Every per-frame call (handle_input / update / render) receives
// `&mut Context`, so scenes, game objects and components reach input,
// drawing, the camera and the resource caches without global state.
// Fields are public by design: components routinely need two subsystems
// at once (draw through the renderer while reading the camera), which
// field access allows and accessor methods would not.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;

//=== Internal Dependencies ===============================================

use crate::core::Config;
use crate::input::InputManager;
use crate::render::{Camera, Renderer};
use crate::resource::ResourceManager;

//=== Context =============================================================

/// Collaborators shared by the whole scene tree.
///
/// Owned by the app facade and lent to the scene manager each frame.
/// The ownership direction is strictly top-down: nothing in the tree
/// stores a reference into the context between frames.
pub struct Context {
    /// Named action states and cursor position.
    pub input: InputManager,

    /// Draw-command queue the render pass records into.
    pub renderer: Renderer,

    /// World↔screen transform used by the draw calls.
    pub camera: Camera,

    /// Texture / sound / font caches.
    pub resources: ResourceManager,
}

impl Context {
    /// Builds the context from configuration.
    ///
    /// The camera viewport matches the configured window size and starts
    /// at the world origin, unbounded.
    pub fn new(config: &Config) -> Self {
        let viewport = Vec2::new(config.window.width as f32, config.window.height as f32);
        Self {
            input: InputManager::new(config),
            renderer: Renderer::new(),
            camera: Camera::new(viewport, Vec2::ZERO, None),
            resources: ResourceManager::new(),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
