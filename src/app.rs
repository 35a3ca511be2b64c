//=========================================================================
// Game App
//=========================================================================
//
// The engine facade: owns every subsystem and drives the per-frame
// loop.
//
// Architecture:
// ```text
//   GameApp
//     ├─ Context { input, renderer, camera, resources }
//     ├─ SceneManager (scene stack)
//     ├─ GameClock (delta time, fps cap)
//     ├─ EventMapper + event buffer (winit → InputEvent)
//     └─ Box<dyn RenderBackend>
//
//   Frame (one per RedrawRequested):
//     clock.tick → input roll-over + event digestion → quit check
//     → scenes.handle_input → scenes.update(dt) → scenes.render
//     → renderer.present(backend)
// ```
//
// The whole engine is single-threaded: winit calls back on the main
// thread and each frame runs start-to-finish on that call stack. No
// channels, no locks — the deferred-mutation queues in the scene layer
// are what make structural changes safe mid-frame.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{error, info};
use thiserror::Error;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

//=== Internal Dependencies ===============================================

use crate::core::{Config, Context, GameClock};
use crate::input::event::InputEvent;
use crate::platform::{self, EventMapper};
use crate::render::{HeadlessBackend, RenderBackend};
use crate::scene::{Scene, SceneManager};

//=== AppError ============================================================

/// Fatal startup/runtime errors of the app facade.
///
/// Everything inside a frame degrades and logs instead; only the event
/// loop itself can fail hard.
#[derive(Debug, Error)]
pub enum AppError {
    /// The OS event loop could not be created or exited abnormally.
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
}

//=== GameApp =============================================================

/// Owns the subsystems and runs the game.
///
/// # Examples
///
/// ```no_run
/// use verdant_engine::app::GameApp;
/// use verdant_engine::core::Config;
/// use verdant_engine::scene::Scene;
///
/// fn main() -> Result<(), verdant_engine::app::AppError> {
///     verdant_engine::logging::init();
///     let mut app = GameApp::new(Config::load_or_default("config.json"));
///     app.push_scene(Scene::new("title"));
///     app.run()
/// }
/// ```
pub struct GameApp {
    config: Config,
    context: Context,
    scenes: SceneManager,
    clock: GameClock,
    backend: Box<dyn RenderBackend>,
    mapper: EventMapper,
    event_buffer: Vec<InputEvent>,
    window: Option<Window>,
}

impl GameApp {
    //--- Construction -----------------------------------------------------

    /// Builds every subsystem from the config.
    ///
    /// The default render backend is headless; call
    /// [`GameApp::with_backend`] to install a drawing one.
    pub fn new(config: Config) -> Self {
        let context = Context::new(&config);
        let mut clock = GameClock::new();
        clock.set_target_fps(config.performance.fps);
        info!(
            "game app created ({}x{}, target {} fps)",
            config.window.width, config.window.height, config.performance.fps
        );
        Self {
            config,
            context,
            scenes: SceneManager::new(),
            clock,
            backend: Box::new(HeadlessBackend::new()),
            mapper: EventMapper::new(),
            event_buffer: Vec::new(),
            window: None,
        }
    }

    /// Installs a render backend.
    pub fn with_backend(mut self, backend: Box<dyn RenderBackend>) -> Self {
        self.backend = backend;
        self
    }

    /// Queues the initial scene; it is initialized and pushed by the
    /// first frame's update.
    pub fn push_scene(&mut self, scene: Scene) {
        self.scenes.request_push_scene(scene);
    }

    //--- Accessors --------------------------------------------------------

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut Context {
        &mut self.context
    }

    pub fn scene_manager(&self) -> &SceneManager {
        &self.scenes
    }

    pub fn scene_manager_mut(&mut self) -> &mut SceneManager {
        &mut self.scenes
    }

    //--- Execution --------------------------------------------------------

    /// Opens the window and blocks in the OS event loop until the game
    /// quits or the window closes.
    pub fn run(mut self) -> Result<(), AppError> {
        info!("starting event loop");
        let event_loop = EventLoop::new()?;
        event_loop.run_app(&mut self)?;
        info!("event loop finished");
        Ok(())
    }

    /// Runs exactly one frame; returns `false` once the game asked to
    /// quit.
    ///
    /// `run` calls this on every `RedrawRequested`. It is public so
    /// headless hosts (tests, tools, server-side simulation) can drive
    /// the engine without a window.
    pub fn step(&mut self) -> bool {
        let dt = self.clock.tick();

        self.context.input.begin_frame();
        self.context.input.process_events(&self.event_buffer);
        self.event_buffer.clear();

        if self.context.input.should_quit() {
            info!("quit requested");
            self.scenes.close();
            return false;
        }

        self.scenes.handle_input(&mut self.context);
        self.scenes.update(dt, &mut self.context);
        self.scenes.render(&mut self.context);
        self.context.renderer.present(self.backend.as_mut());
        true
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for GameApp {
    /// Creates the window on startup (and on mobile resume, where the
    /// existing one is kept).
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let attrs = platform::window_attributes(&self.config.window);
        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    "window created: {}x{}",
                    window.inner_size().width,
                    window.inner_size().height
                );
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!("window creation failed: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match &event {
            WindowEvent::CloseRequested => {
                info!("window close requested");
                self.scenes.close();
                event_loop.exit();
            }

            WindowEvent::RedrawRequested => {
                if self.step() {
                    if let Some(window) = &self.window {
                        window.request_redraw();
                    }
                } else {
                    event_loop.exit();
                }
            }

            other => {
                if let Some(input_event) = self.mapper.map_window_event(other) {
                    self.event_buffer.push(input_event);
                }
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::event::KeyCode;
    use crate::object::GameObject;
    use crate::scene::{SceneLogic, SceneRequests, World};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn app() -> GameApp {
        GameApp::new(Config::default())
    }

    struct FrameCounter {
        frames: Rc<RefCell<u32>>,
    }

    impl SceneLogic for FrameCounter {
        fn on_init(&mut self, world: &mut World, _ctx: &mut Context) {
            world.add_object(GameObject::new("marker"));
        }

        fn on_update(
            &mut self,
            _world: &mut World,
            _dt: f32,
            _ctx: &mut Context,
            _scenes: &mut SceneRequests,
        ) {
            *self.frames.borrow_mut() += 1;
        }
    }

    #[test]
    fn step_applies_the_queued_scene_and_updates_it() {
        let mut app = app();
        let frames = Rc::new(RefCell::new(0));
        app.push_scene(Scene::with_logic("game", FrameCounter { frames: frames.clone() }));

        // Frame 1 applies the push; the scene updates from frame 2 on.
        assert!(app.step());
        assert_eq!(app.scene_manager().len(), 1);
        assert!(app.step());
        assert!(app.step());
        assert_eq!(*frames.borrow(), 2);

        let scene = app.scene_manager().current_scene().expect("scene pushed");
        assert!(scene.find_object("marker").is_some());
    }

    #[test]
    fn quit_request_stops_stepping_and_closes_scenes() {
        let mut app = app();
        app.push_scene(Scene::new("game"));
        assert!(app.step());

        app.context_mut().input.request_quit();
        assert!(!app.step());
        assert!(app.scene_manager().is_empty());
    }

    #[test]
    fn buffered_events_feed_the_action_layer() {
        let mut app = app();
        app.event_buffer.push(InputEvent::KeyDown {
            key: KeyCode::Space,
            repeat: false,
        });

        app.step();
        // "jump" is bound to Space by the default config; after the
        // step the press has been digested.
        assert!(app.context().input.is_action_pressed("jump"));
        assert!(app.event_buffer.is_empty());
    }
}
