//=========================================================================
// Render Subsystem
//=========================================================================
//
// Camera, sprite descriptors and the draw-command queue.
//
// Flow:
//   Scene render pass → Renderer::draw_* (world→screen, culling)
//                     → DrawCommand queue → RenderBackend
//
//=========================================================================

//=== Module Declarations =================================================

mod camera;
mod renderer;
mod sprite;

//=== Public API ==========================================================

pub use camera::Camera;
pub use renderer::{DrawCommand, HeadlessBackend, RenderBackend, Renderer};
pub use sprite::Sprite;
