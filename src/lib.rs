//=========================================================================
// Verdant Engine — Library Root
//
// A small 2D game engine built around a scene / game-object / component
// architecture:
//
// - Components are capability units (transform, sprite, game behavior)
//   attached to GameObjects, at most one per concrete type.
// - Scenes own ordered collections of GameObjects and drive their
//   lifecycle each frame, with deferred add/remove so game code can
//   restructure the world mid-traversal.
// - The SceneManager stacks scenes (gameplay under pause under dialog),
//   routing input and update to the top scene while rendering the whole
//   stack bottom-to-top.
// - A shared Context bundles the collaborator subsystems — input
//   actions, draw-command renderer, camera, resource caches — and is
//   passed down the tree every frame.
//
// The engine is strictly single-threaded and synchronous: one frame is
// one call stack.
//
// Typical usage:
// ```no_run
// use verdant_engine::app::GameApp;
// use verdant_engine::core::Config;
// use verdant_engine::scene::Scene;
//
// fn main() {
//     verdant_engine::logging::init();
//     let mut app = GameApp::new(Config::load_or_default("config.json"));
//     app.push_scene(Scene::new("title"));
//     if let Err(e) = app.run() {
//         eprintln!("engine error: {e}");
//     }
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------

pub mod app;
pub mod component;
pub mod core;
pub mod input;
pub mod logging;
pub mod math;
pub mod object;
pub mod prelude;
pub mod render;
pub mod resource;
pub mod scene;

//--- Internal Modules ----------------------------------------------------
//
// `platform` wraps winit (window attributes, event translation) and is
// public only for embedders that drive their own event loop.
//
pub mod platform;

//--- Public Exports ------------------------------------------------------
//
// The facade most games start from.
//
pub use app::GameApp;
