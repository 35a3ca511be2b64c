//=========================================================================
// Scene
//=========================================================================
//
// A scene is one game state — a level, a menu, a pause overlay — owning
// a [`World`] of game objects and driving their lifecycle each frame.
//
// State machine: Uninitialized → Initialized → Cleaned, where Cleaned
// can re-enter Initialized through a fresh `init` (the scene manager
// does this when a previously cleaned scene is pushed again). Every
// per-frame method is a no-op outside the Initialized state.
//
// Game-specific behavior plugs in through [`SceneLogic`] hooks rather
// than overriding the scene itself; the fixed traversal algorithms (the
// purge and splice rules in [`World`]) always run.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::trace;

//=== Internal Dependencies ===============================================

use super::manager::SceneRequests;
use super::world::World;
use crate::core::Context;
use crate::object::{GameObject, ObjectId};

//=== SceneLogic ==========================================================

/// Game-defined behavior hooks for a scene.
///
/// Every hook has an empty default, so a logic type implements only
/// what it needs. `on_init` is where scenes populate their initial
/// objects; `on_update`/`on_handle_input` receive the request queue for
/// scene transitions (push a pause scene, pop back to the menu, ...).
///
/// Hooks run *before* the world's own traversal pass, so objects
/// marked for removal by a hook are erased in the same frame.
///
/// # Example
///
/// ```rust
/// use verdant_engine::prelude::*;
///
/// struct Gameplay;
///
/// impl SceneLogic for Gameplay {
///     fn on_init(&mut self, world: &mut World, _ctx: &mut Context) {
///         world.add_object(GameObject::new("hero"));
///     }
///
///     fn on_update(
///         &mut self,
///         _world: &mut World,
///         _dt: f32,
///         ctx: &mut Context,
///         scenes: &mut SceneRequests,
///     ) {
///         if ctx.input.is_action_pressed("pause") {
///             scenes.request_push(Scene::new("pause"));
///         }
///     }
/// }
/// ```
pub trait SceneLogic {
    /// Called once when the scene initializes; populate objects here.
    fn on_init(&mut self, _world: &mut World, _ctx: &mut Context) {}

    /// Called each frame before the world's update pass.
    fn on_update(
        &mut self,
        _world: &mut World,
        _dt: f32,
        _ctx: &mut Context,
        _scenes: &mut SceneRequests,
    ) {
    }

    /// Called each frame before the world's input pass.
    fn on_handle_input(
        &mut self,
        _world: &mut World,
        _ctx: &mut Context,
        _scenes: &mut SceneRequests,
    ) {
    }

    /// Called each frame after the world's render pass (draws on top).
    fn on_render(&mut self, _world: &mut World, _ctx: &mut Context) {}

    /// Called when the scene is cleaned, before its objects are
    /// destroyed.
    fn on_clean(&mut self, _world: &mut World) {}
}

/// Logic for scenes that are pure object containers.
struct NoLogic;

impl SceneLogic for NoLogic {}

//=== Scene ===============================================================

/// An owned collection of game objects with a per-frame lifecycle.
pub struct Scene {
    name: String,
    initialized: bool,
    world: World,
    logic: Box<dyn SceneLogic>,
}

impl Scene {
    //--- Construction -----------------------------------------------------

    /// Creates an empty scene with no behavior hooks.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_logic(name, NoLogic)
    }

    /// Creates a scene with game-defined behavior hooks.
    pub fn with_logic(name: impl Into<String>, logic: impl SceneLogic + 'static) -> Self {
        let name = name.into();
        trace!("scene '{}' created", name);
        Self {
            name,
            initialized: false,
            world: World::new(),
            logic: Box::new(logic),
        }
    }

    //--- Accessors --------------------------------------------------------

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// The scene's object store.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The scene's object store, mutably.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    //--- Object Convenience -----------------------------------------------
    //
    // Thin delegation to the world, so simple call sites do not need to
    // go through world_mut().

    /// See [`World::add_object`].
    pub fn add_object(&mut self, object: GameObject) -> ObjectId {
        self.world.add_object(object)
    }

    /// See [`World::add_object_deferred`].
    pub fn add_object_deferred(&mut self, object: GameObject) -> ObjectId {
        self.world.add_object_deferred(object)
    }

    /// See [`World::remove_object`].
    pub fn remove_object(&mut self, id: ObjectId) {
        self.world.remove_object(id);
    }

    /// See [`World::remove_object_deferred`].
    pub fn remove_object_deferred(&mut self, id: ObjectId) {
        self.world.remove_object_deferred(id);
    }

    /// See [`World::find_object`].
    pub fn find_object(&self, name: &str) -> Option<&GameObject> {
        self.world.find_object(name)
    }

    //--- Lifecycle --------------------------------------------------------

    /// Initializes the scene, running `on_init` once.
    ///
    /// Idempotent: an already initialized scene returns immediately. A
    /// cleaned scene may be initialized again.
    pub fn init(&mut self, ctx: &mut Context) {
        if self.initialized {
            return;
        }
        self.logic.on_init(&mut self.world, ctx);
        self.initialized = true;
        trace!("scene '{}' initialized", self.name);
    }

    /// Per-frame update: logic hook, then the world's update pass.
    ///
    /// No-op unless initialized.
    pub fn update(&mut self, dt: f32, ctx: &mut Context, scenes: &mut SceneRequests) {
        if !self.initialized {
            return;
        }
        self.logic.on_update(&mut self.world, dt, ctx, scenes);
        self.world.update_pass(dt, ctx);
    }

    /// Per-frame input: logic hook, then the world's input pass.
    ///
    /// No-op unless initialized.
    pub fn handle_input(&mut self, ctx: &mut Context, scenes: &mut SceneRequests) {
        if !self.initialized {
            return;
        }
        self.logic.on_handle_input(&mut self.world, ctx, scenes);
        self.world.input_pass(ctx);
    }

    /// Per-frame render: the world's render pass, then the logic hook.
    ///
    /// No-op unless initialized.
    pub fn render(&mut self, ctx: &mut Context) {
        if !self.initialized {
            return;
        }
        self.world.render_pass(ctx);
        self.logic.on_render(&mut self.world, ctx);
    }

    /// Cleans the scene: logic hook, then destroys every object and
    /// returns to the uninitialized state.
    ///
    /// No-op unless initialized.
    pub fn clean(&mut self) {
        if !self.initialized {
            return;
        }
        self.logic.on_clean(&mut self.world);
        self.world.clear();
        self.initialized = false;
        trace!("scene '{}' cleaned", self.name);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
