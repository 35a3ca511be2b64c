//=========================================================================
// Input Subsystem
//=========================================================================
//
// Translates low-level input events into named gameplay *actions*.
//
// Architecture:
// ```text
//   config input_mappings          platform events
//   ("jump" → ["J", "Space"])      (KeyDown, MouseMoved, ...)
//            ↓                              ↓
//        bindings  ──────────────►  InputManager
//                                       ↓
//                           action states, queried by name
// ```
//
// Frame lifecycle: begin_frame() → process_events() → query.
// `begin_frame` rolls transient states over (pressed-this-frame becomes
// held, released-this-frame becomes inactive) so the one-frame states
// are observable for exactly one frame.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod event;

//=== External Dependencies ===============================================

use std::collections::HashMap;

use glam::Vec2;
use log::{trace, warn};

//=== Internal Dependencies ===============================================

use crate::core::Config;
use event::{InputEvent, KeyCode, MouseButton};

//=== ActionState =========================================================

/// Per-frame state of a named action.
///
/// Transitions (driven by `begin_frame` and incoming events):
/// ```text
/// Inactive ──press──► PressedThisFrame ──next frame──► HeldDown
/// HeldDown ──release──► ReleasedThisFrame ──next frame──► Inactive
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionState {
    /// No bound input is active.
    Inactive,

    /// A bound input went down this frame.
    PressedThisFrame,

    /// A bound input has been down for more than one frame.
    HeldDown,

    /// A bound input went up this frame.
    ReleasedThisFrame,
}

//=== InputBinding ========================================================

/// A physical input that can be bound to actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum InputBinding {
    Key(KeyCode),
    Button(MouseButton),
}

//=== InputManager ========================================================

/// Maps physical inputs to named action states.
///
/// Bindings come from the config file's `input_mappings` section: each
/// action name lists the key/button names that drive it. Scenes and
/// components query actions by name through the shared context and never
/// see platform key codes.
pub struct InputManager {
    /// Physical input → actions it drives. One input may drive several
    /// actions, and one action may be driven by several inputs.
    bindings: HashMap<InputBinding, Vec<String>>,

    /// Current state per action name.
    action_states: HashMap<String, ActionState>,

    /// Last reported cursor position, window space.
    mouse_position: Vec2,

    /// Set when the game asks to terminate; read by the app loop.
    should_quit: bool,
}

impl InputManager {
    //--- Construction -----------------------------------------------------

    /// Builds the action bindings from the config's input mappings.
    ///
    /// Key names that parse to neither a key nor a mouse button are
    /// logged and skipped; the action itself still exists (it just has
    /// fewer bindings). Default mouse-click actions are injected when
    /// the config does not define them, matching the engine's UI layer
    /// expectations.
    pub fn new(config: &Config) -> Self {
        let mut mappings = config.input_mappings().clone();
        if !mappings.contains_key("MouseLeftClick") {
            trace!("MouseLeftClick has no mapping, adding default 'MouseLeft'");
            mappings.insert("MouseLeftClick".to_string(), vec!["MouseLeft".to_string()]);
        }
        if !mappings.contains_key("MouseRightClick") {
            trace!("MouseRightClick has no mapping, adding default 'MouseRight'");
            mappings.insert("MouseRightClick".to_string(), vec!["MouseRight".to_string()]);
        }

        let mut bindings: HashMap<InputBinding, Vec<String>> = HashMap::new();
        let mut action_states = HashMap::new();

        for (action_name, input_names) in &mappings {
            action_states.insert(action_name.clone(), ActionState::Inactive);
            for input_name in input_names {
                let binding = if let Some(key) = KeyCode::from_name(input_name) {
                    InputBinding::Key(key)
                } else if let Some(button) = MouseButton::from_name(input_name) {
                    InputBinding::Button(button)
                } else {
                    warn!(
                        "unknown input name '{}' bound to action '{}', skipping",
                        input_name, action_name
                    );
                    continue;
                };
                bindings.entry(binding).or_default().push(action_name.clone());
                trace!("bound {} ({:?}) to action '{}'", input_name, binding, action_name);
            }
        }

        Self {
            bindings,
            action_states,
            mouse_position: Vec2::ZERO,
            should_quit: false,
        }
    }

    //--- Frame Processing -------------------------------------------------

    /// Rolls one-frame states over at the start of a frame.
    ///
    /// Must be called once per frame, before `process_events`.
    pub fn begin_frame(&mut self) {
        for state in self.action_states.values_mut() {
            match *state {
                ActionState::PressedThisFrame => *state = ActionState::HeldDown,
                ActionState::ReleasedThisFrame => *state = ActionState::Inactive,
                _ => {}
            }
        }
    }

    /// Digests this frame's platform events into action states.
    pub fn process_events(&mut self, events: &[InputEvent]) {
        for event in events {
            match *event {
                InputEvent::KeyDown { key, repeat } => {
                    self.apply_binding(InputBinding::Key(key), true, repeat);
                }
                InputEvent::KeyUp { key } => {
                    self.apply_binding(InputBinding::Key(key), false, false);
                }
                InputEvent::MouseButtonDown { button, x, y } => {
                    self.mouse_position = Vec2::new(x, y);
                    self.apply_binding(InputBinding::Button(button), true, false);
                }
                InputEvent::MouseButtonUp { button, x, y } => {
                    self.mouse_position = Vec2::new(x, y);
                    self.apply_binding(InputBinding::Button(button), false, false);
                }
                InputEvent::MouseMoved { x, y } => {
                    self.mouse_position = Vec2::new(x, y);
                }
                InputEvent::Unidentified => {}
            }
        }
    }

    //--- Query API --------------------------------------------------------

    /// Returns the full state of an action. Unknown names are inactive.
    pub fn action_state(&self, action_name: &str) -> ActionState {
        self.action_states
            .get(action_name)
            .copied()
            .unwrap_or(ActionState::Inactive)
    }

    /// Returns `true` while any input bound to the action is down.
    ///
    /// Use for continuous actions like movement.
    pub fn is_action_down(&self, action_name: &str) -> bool {
        matches!(
            self.action_state(action_name),
            ActionState::PressedThisFrame | ActionState::HeldDown
        )
    }

    /// Returns `true` only on the frame the action went down.
    ///
    /// Use for discrete actions like jumping or toggling menus.
    pub fn is_action_pressed(&self, action_name: &str) -> bool {
        self.action_state(action_name) == ActionState::PressedThisFrame
    }

    /// Returns `true` only on the frame the action went up.
    pub fn is_action_released(&self, action_name: &str) -> bool {
        self.action_state(action_name) == ActionState::ReleasedThisFrame
    }

    /// Last reported cursor position in window space (pixels, top-left
    /// origin).
    pub fn mouse_position(&self) -> Vec2 {
        self.mouse_position
    }

    /// Returns `true` once the game has asked to terminate.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Asks the app loop to terminate at the end of the current frame.
    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    //--- Internal Helpers -------------------------------------------------

    /// Applies one physical input transition to every action bound to it.
    ///
    /// A repeat press maps to `HeldDown` directly so OS key repeat does
    /// not retrigger pressed-this-frame.
    fn apply_binding(&mut self, binding: InputBinding, is_down: bool, is_repeat: bool) {
        let Some(actions) = self.bindings.get(&binding) else {
            return;
        };
        for action_name in actions {
            let Some(state) = self.action_states.get_mut(action_name) else {
                warn!("input bound to unregistered action '{}'", action_name);
                continue;
            };
            *state = if is_down {
                if is_repeat {
                    ActionState::HeldDown
                } else {
                    ActionState::PressedThisFrame
                }
            } else {
                ActionState::ReleasedThisFrame
            };
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
