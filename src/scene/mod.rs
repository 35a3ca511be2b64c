//=========================================================================
// Scene System
//=========================================================================
//
// Scenes, the object store and stack-based scene switching.
//
// Architecture:
// ```text
//   SceneManager
//     ├─ stack: Vec<Scene>
//     │    └─ Scene { World, Box<dyn SceneLogic> }
//     │         └─ World { Vec<GameObject> }
//     └─ requests: SceneRequests
//
// Flow (per frame):
//   handle_input → update(dt) → apply pending transition → render
// ```
//
//=========================================================================

//=== Module Declarations =================================================

mod manager;
mod scene;
mod world;

//=== Public API ==========================================================

pub use manager::{SceneManager, SceneRequest, SceneRequests};
pub use scene::{Scene, SceneLogic};
pub use world::World;
