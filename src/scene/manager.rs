//=========================================================================
// Scene Manager
//=========================================================================
//
// Stack of scenes plus the deferred-transition machinery.
//
// Architecture:
// ```text
//   SceneManager
//     ├─ stack: Vec<Scene>          (bottom → top)
//     └─ requests: SceneRequests    (single pending transition)
//
//   handle_input → top scene only
//   update       → top scene, then apply the pending transition
//   render       → every scene, bottom to top (layered UI over game)
// ```
//
// Scenes never touch the manager directly: during update/handle_input
// they are lent the [`SceneRequests`] slot and queue push/pop/replace
// requests there. The manager applies at most one transition per
// update, strictly after the active scene's own update has finished, so
// the stack never changes under a running traversal.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{trace, warn};

//=== Internal Dependencies ===============================================

use super::scene::Scene;
use crate::core::Context;

//=== SceneRequest ========================================================

/// A deferred scene-stack transition.
pub enum SceneRequest {
    /// Initialize (if needed) and push the scene on top.
    Push(Scene),

    /// Clean and pop the top scene.
    Pop,

    /// Clean and pop the whole stack, then initialize (if needed) and
    /// push the scene.
    Replace(Scene),
}

impl SceneRequest {
    fn describe(&self) -> &'static str {
        match self {
            Self::Push(_) => "push",
            Self::Pop => "pop",
            Self::Replace(_) => "replace",
        }
    }
}

//=== SceneRequests =======================================================

/// Single-slot queue for scene transitions.
///
/// Only one transition can be pending at a time; queuing another
/// overwrites the first (last write wins) and the overwritten request's
/// scene — never initialized — is dropped. The overwrite is logged,
/// since it usually signals two pieces of game code fighting over the
/// stack in one frame.
pub struct SceneRequests {
    pending: Option<SceneRequest>,
}

impl SceneRequests {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Queues a push of `scene`.
    pub fn request_push(&mut self, scene: Scene) {
        self.set(SceneRequest::Push(scene));
    }

    /// Queues a pop of the top scene.
    pub fn request_pop(&mut self) {
        self.set(SceneRequest::Pop);
    }

    /// Queues replacing the whole stack with `scene`.
    pub fn request_replace(&mut self, scene: Scene) {
        self.set(SceneRequest::Replace(scene));
    }

    /// Whether a transition is waiting to be applied.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub(crate) fn take(&mut self) -> Option<SceneRequest> {
        self.pending.take()
    }

    fn set(&mut self, request: SceneRequest) {
        if let Some(previous) = &self.pending {
            warn!(
                "scene transition '{}' overwrites queued '{}'",
                request.describe(),
                previous.describe()
            );
        }
        self.pending = Some(request);
    }
}

impl Default for SceneRequests {
    fn default() -> Self {
        Self::new()
    }
}

//=== SceneManager ========================================================

/// Owner of the scene stack; arbitrates the active scene and applies
/// deferred transitions.
pub struct SceneManager {
    stack: Vec<Scene>,
    requests: SceneRequests,
}

impl SceneManager {
    //--- Construction -----------------------------------------------------

    pub fn new() -> Self {
        trace!("scene manager created");
        Self {
            stack: Vec::new(),
            requests: SceneRequests::new(),
        }
    }

    //--- Transition Requests ----------------------------------------------

    /// Queues a push; applied after the next update.
    pub fn request_push_scene(&mut self, scene: Scene) {
        self.requests.request_push(scene);
    }

    /// Queues a pop; applied after the next update.
    pub fn request_pop_scene(&mut self) {
        self.requests.request_pop();
    }

    /// Queues a full-stack replace; applied after the next update.
    pub fn request_replace_scene(&mut self, scene: Scene) {
        self.requests.request_replace(scene);
    }

    //--- Stack Access -----------------------------------------------------

    /// The active (top-of-stack) scene, if any.
    pub fn current_scene(&self) -> Option<&Scene> {
        self.stack.last()
    }

    /// The active scene, mutably.
    pub fn current_scene_mut(&mut self) -> Option<&mut Scene> {
        self.stack.last_mut()
    }

    /// Number of stacked scenes.
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Names of the stacked scenes, bottom to top. Diagnostic aid.
    pub fn scene_names(&self) -> Vec<&str> {
        self.stack.iter().map(|s| s.name()).collect()
    }

    //--- Per-Frame Loop ---------------------------------------------------

    /// Updates the active scene, then applies one pending transition.
    pub fn update(&mut self, dt: f32, ctx: &mut Context) {
        if let Some(scene) = self.stack.last_mut() {
            scene.update(dt, ctx, &mut self.requests);
        }
        self.apply_pending(ctx);
    }

    /// Renders every stacked scene, bottom to top.
    ///
    /// Lower scenes draw first so the top scene layers over them —
    /// a pause menu over the frozen gameplay underneath.
    pub fn render(&mut self, ctx: &mut Context) {
        for scene in &mut self.stack {
            scene.render(ctx);
        }
    }

    /// Routes input to the active scene only.
    ///
    /// Transitions requested here stay queued until the next update.
    pub fn handle_input(&mut self, ctx: &mut Context) {
        if let Some(scene) = self.stack.last_mut() {
            scene.handle_input(ctx, &mut self.requests);
        }
    }

    /// Cleans and pops every scene, top to bottom.
    pub fn close(&mut self) {
        trace!("closing scene manager, cleaning {} scene(s)", self.stack.len());
        while let Some(mut scene) = self.stack.pop() {
            trace!("cleaning scene '{}'", scene.name());
            scene.clean();
        }
    }

    //--- Internal Helpers -------------------------------------------------

    /// Applies the queued transition, if any. Called at the update
    /// boundary only.
    fn apply_pending(&mut self, ctx: &mut Context) {
        match self.requests.take() {
            None => {}
            Some(SceneRequest::Push(mut scene)) => {
                trace!("pushing scene '{}'", scene.name());
                if !scene.is_initialized() {
                    scene.init(ctx);
                }
                self.stack.push(scene);
            }
            Some(SceneRequest::Pop) => {
                match self.stack.pop() {
                    Some(mut scene) => {
                        trace!("popping scene '{}'", scene.name());
                        scene.clean();
                    }
                    None => warn!("cannot pop: scene stack is empty"),
                }
            }
            Some(SceneRequest::Replace(mut scene)) => {
                trace!("replacing scene stack with '{}'", scene.name());
                while let Some(mut old) = self.stack.pop() {
                    old.clean();
                }
                if !scene.is_initialized() {
                    scene.init(ctx);
                }
                self.stack.push(scene);
            }
        }
    }
}

impl Default for SceneManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SceneManager {
    fn drop(&mut self) {
        self.close();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
