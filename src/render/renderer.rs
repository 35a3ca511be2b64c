//=========================================================================
// Renderer
//=========================================================================
//
// Draw-command queue between the scene tree and the graphics backend.
//
// Architecture:
// ```text
//   sprite components ──draw_sprite()──►  Renderer (Vec<DrawCommand>)
//                                             │ present()
//                                             ▼
//                                       dyn RenderBackend
//                                       (GPU, headless, ...)
// ```
//
// The renderer converts world coordinates to screen space through the
// camera, culls quads that fall outside the viewport, and records the
// rest. It never touches textures itself — commands reference textures
// by resource-cache id and the backend resolves them at submit time.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::{BVec2, Vec2};

//=== Internal Dependencies ===============================================

use super::camera::Camera;
use super::sprite::Sprite;
use crate::math::Rect;

//=== DrawCommand =========================================================

/// One recorded draw, already in screen space.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Textured quad. `position` is the top-left corner in screen
    /// pixels; `size` is the on-screen size after scaling.
    Sprite {
        texture_id: String,
        source_rect: Option<Rect>,
        flipped: bool,
        position: Vec2,
        size: Vec2,
        rotation_degrees: f32,
    },
}

//=== RenderBackend =======================================================

/// Consumer of a frame's draw commands.
///
/// The engine core records commands; a backend turns them into pixels.
/// The crate ships [`HeadlessBackend`] for tests and tools; real
/// backends (GPU, terminal, capture) implement this trait outside the
/// core.
pub trait RenderBackend {
    /// Starts a frame with the given clear color (RGBA, 0..1).
    fn begin_frame(&mut self, clear_color: [f32; 4]);

    /// Receives the frame's recorded commands, in draw order.
    fn submit(&mut self, commands: &[DrawCommand]);

    /// Finishes and presents the frame.
    fn end_frame(&mut self);
}

//=== HeadlessBackend =====================================================

/// Backend that draws nothing and counts what it was asked to draw.
///
/// Used by the test suite and useful for headless tools (server-side
/// simulation, CI smoke runs).
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    frames: u64,
    last_command_count: usize,
}

impl HeadlessBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of completed frames.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Command count of the most recent submission.
    pub fn last_command_count(&self) -> usize {
        self.last_command_count
    }
}

impl RenderBackend for HeadlessBackend {
    fn begin_frame(&mut self, _clear_color: [f32; 4]) {}

    fn submit(&mut self, commands: &[DrawCommand]) {
        self.last_command_count = commands.len();
    }

    fn end_frame(&mut self) {
        self.frames += 1;
    }
}

//=== Renderer ============================================================

/// Records the frame's draw commands.
///
/// Owned by the shared context; sprite components call the draw methods
/// during the render pass and the app drains the queue into the backend
/// once the pass completes.
pub struct Renderer {
    queue: Vec<DrawCommand>,
    clear_color: [f32; 4],
}

impl Renderer {
    //--- Construction -----------------------------------------------------

    pub fn new() -> Self {
        Self {
            queue: Vec::new(),
            clear_color: [0.0, 0.0, 0.0, 1.0],
        }
    }

    //--- Draw API ---------------------------------------------------------

    /// Records a world-space sprite.
    ///
    /// `size` is the unscaled sprite size in world units (callers cache
    /// it from the resource layer); the on-screen quad is `size * scale`
    /// at the camera-transformed position. Quads fully outside the
    /// viewport are culled and record nothing.
    pub fn draw_sprite(
        &mut self,
        camera: &Camera,
        sprite: &Sprite,
        position: Vec2,
        size: Vec2,
        scale: Vec2,
        rotation_degrees: f32,
    ) {
        let screen_position = camera.world_to_screen(position);
        let screen_size = size * scale;
        let quad = Rect::new(screen_position, screen_size);
        if !quad.intersects(&camera.viewport_rect()) {
            return;
        }
        self.queue.push(DrawCommand::Sprite {
            texture_id: sprite.texture_id().to_string(),
            source_rect: sprite.source_rect(),
            flipped: sprite.is_flipped(),
            position: screen_position,
            size: screen_size,
            rotation_degrees,
        });
    }

    /// Records a parallax background layer, tiled to fill the viewport.
    ///
    /// The layer scrolls at `scroll_factor` times the camera speed. Axes
    /// flagged in `repeat` tile seamlessly across the whole viewport;
    /// non-repeating axes draw a single run at the layer's position.
    pub fn draw_parallax(
        &mut self,
        camera: &Camera,
        sprite: &Sprite,
        position: Vec2,
        size: Vec2,
        scroll_factor: Vec2,
        repeat: BVec2,
        scale: Vec2,
    ) {
        let tile = size * scale;
        if tile.x <= 0.0 || tile.y <= 0.0 {
            return;
        }
        let screen_position = camera.world_to_screen_parallax(position, scroll_factor);
        let viewport = camera.viewport_size();

        let (start_x, stop_x) = if repeat.x {
            (screen_position.x.rem_euclid(tile.x) - tile.x, viewport.x)
        } else {
            (screen_position.x, (screen_position.x + tile.x).min(viewport.x))
        };
        let (start_y, stop_y) = if repeat.y {
            (screen_position.y.rem_euclid(tile.y) - tile.y, viewport.y)
        } else {
            (screen_position.y, (screen_position.y + tile.y).min(viewport.y))
        };

        let mut y = start_y;
        while y < stop_y {
            let mut x = start_x;
            while x < stop_x {
                self.queue.push(DrawCommand::Sprite {
                    texture_id: sprite.texture_id().to_string(),
                    source_rect: sprite.source_rect(),
                    flipped: sprite.is_flipped(),
                    position: Vec2::new(x, y),
                    size: tile,
                    rotation_degrees: 0.0,
                });
                x += tile.x;
            }
            y += tile.y;
        }
    }

    /// Records a screen-space sprite, bypassing the camera.
    ///
    /// Used for UI elements; `position` is in viewport pixels.
    pub fn draw_ui_sprite(&mut self, sprite: &Sprite, position: Vec2, size: Vec2) {
        self.queue.push(DrawCommand::Sprite {
            texture_id: sprite.texture_id().to_string(),
            source_rect: sprite.source_rect(),
            flipped: sprite.is_flipped(),
            position,
            size,
            rotation_degrees: 0.0,
        });
    }

    //--- Frame Control ----------------------------------------------------

    /// Sets the clear color handed to the backend each frame (RGBA, 0..1).
    pub fn set_clear_color(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.clear_color = [r, g, b, a];
    }

    /// Flushes the queue into the backend and completes the frame.
    pub fn present(&mut self, backend: &mut dyn RenderBackend) {
        backend.begin_frame(self.clear_color);
        backend.submit(&self.queue);
        backend.end_frame();
        self.queue.clear();
    }

    //--- Inspection -------------------------------------------------------

    /// Commands recorded so far this frame, in draw order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.queue
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera::new(Vec2::new(640.0, 360.0), Vec2::ZERO, None)
    }

    #[test]
    fn draw_sprite_records_screen_space_command() {
        let mut renderer = Renderer::new();
        let mut cam = camera();
        cam.set_position(Vec2::new(100.0, 0.0));

        renderer.draw_sprite(
            &cam,
            &Sprite::new("hero.png"),
            Vec2::new(150.0, 50.0),
            Vec2::new(32.0, 32.0),
            Vec2::new(2.0, 2.0),
            0.0,
        );

        assert_eq!(renderer.commands().len(), 1);
        match &renderer.commands()[0] {
            DrawCommand::Sprite { texture_id, position, size, .. } => {
                assert_eq!(texture_id, "hero.png");
                assert_eq!(*position, Vec2::new(50.0, 50.0));
                assert_eq!(*size, Vec2::new(64.0, 64.0));
            }
        }
    }

    #[test]
    fn offscreen_sprite_is_culled() {
        let mut renderer = Renderer::new();
        let cam = camera();

        renderer.draw_sprite(
            &cam,
            &Sprite::new("hero.png"),
            Vec2::new(-1000.0, -1000.0),
            Vec2::new(32.0, 32.0),
            Vec2::ONE,
            0.0,
        );

        assert!(renderer.commands().is_empty());
    }

    #[test]
    fn parallax_repeat_covers_viewport() {
        let mut renderer = Renderer::new();
        let cam = camera();

        renderer.draw_parallax(
            &cam,
            &Sprite::new("sky.png"),
            Vec2::ZERO,
            Vec2::new(320.0, 180.0),
            Vec2::new(0.5, 0.5),
            BVec2::new(true, true),
            Vec2::ONE,
        );

        // 640x360 viewport tiled by 320x180 with one extra row/column of
        // overdraw at the negative edge.
        assert!(renderer.commands().len() >= 4);
    }

    #[test]
    fn non_repeating_parallax_draws_single_tile() {
        let mut renderer = Renderer::new();
        let cam = camera();

        renderer.draw_parallax(
            &cam,
            &Sprite::new("hill.png"),
            Vec2::new(10.0, 10.0),
            Vec2::new(100.0, 50.0),
            Vec2::ONE,
            BVec2::new(false, false),
            Vec2::ONE,
        );

        assert_eq!(renderer.commands().len(), 1);
    }

    #[test]
    fn present_drains_queue_into_backend() {
        let mut renderer = Renderer::new();
        let mut backend = HeadlessBackend::new();
        let cam = camera();

        renderer.draw_sprite(
            &cam,
            &Sprite::new("a.png"),
            Vec2::ZERO,
            Vec2::new(8.0, 8.0),
            Vec2::ONE,
            0.0,
        );
        renderer.draw_ui_sprite(&Sprite::new("b.png"), Vec2::ZERO, Vec2::new(8.0, 8.0));

        renderer.present(&mut backend);

        assert_eq!(backend.frames(), 1);
        assert_eq!(backend.last_command_count(), 2);
        assert!(renderer.commands().is_empty(), "queue clears after present");
    }
}
