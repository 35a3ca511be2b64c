//=========================================================================
// Platform Event Mapper
//=========================================================================
//
// Converts winit window events into engine [`InputEvent`]s, keeping the
// OS-specific types out of the input subsystem.
//
// The mapper is stateful: winit reports mouse buttons without a cursor
// position, so the last observed `CursorMoved` position is stamped onto
// button events.
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::event::{ElementState, MouseButton as WinitMouseButton, WindowEvent};
use winit::keyboard::{KeyCode as WinitKeyCode, PhysicalKey};

//=== Internal Dependencies ===============================================

use crate::input::event::{InputEvent, KeyCode, MouseButton};

//=== EventMapper =========================================================

/// Stateful winit → engine event converter.
pub struct EventMapper {
    cursor_x: f32,
    cursor_y: f32,
}

impl EventMapper {
    pub fn new() -> Self {
        Self {
            cursor_x: 0.0,
            cursor_y: 0.0,
        }
    }

    /// Maps one window event; `None` for events the engine ignores
    /// (resize, focus, redraw, ...).
    pub fn map_window_event(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::KeyboardInput { event: key_event, .. } => {
                let key = match key_event.physical_key {
                    PhysicalKey::Code(code) => map_key(code),
                    _ => KeyCode::Unidentified,
                };
                Some(match key_event.state {
                    ElementState::Pressed => InputEvent::KeyDown {
                        key,
                        repeat: key_event.repeat,
                    },
                    ElementState::Released => InputEvent::KeyUp { key },
                })
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let button = map_button(*button);
                Some(match state {
                    ElementState::Pressed => InputEvent::MouseButtonDown {
                        button,
                        x: self.cursor_x,
                        y: self.cursor_y,
                    },
                    ElementState::Released => InputEvent::MouseButtonUp {
                        button,
                        x: self.cursor_x,
                        y: self.cursor_y,
                    },
                })
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_x = position.x as f32;
                self.cursor_y = position.y as f32;
                Some(InputEvent::MouseMoved {
                    x: self.cursor_x,
                    y: self.cursor_y,
                })
            }

            _ => None,
        }
    }
}

impl Default for EventMapper {
    fn default() -> Self {
        Self::new()
    }
}

//=== Key Conversion ======================================================

/// Maps the winit key codes the engine understands; everything else
/// becomes `Unidentified` and is ignored downstream.
fn map_key(code: WinitKeyCode) -> KeyCode {
    use WinitKeyCode as W;
    match code {
        W::Digit0 => KeyCode::Digit0, W::Digit1 => KeyCode::Digit1,
        W::Digit2 => KeyCode::Digit2, W::Digit3 => KeyCode::Digit3,
        W::Digit4 => KeyCode::Digit4, W::Digit5 => KeyCode::Digit5,
        W::Digit6 => KeyCode::Digit6, W::Digit7 => KeyCode::Digit7,
        W::Digit8 => KeyCode::Digit8, W::Digit9 => KeyCode::Digit9,

        W::KeyA => KeyCode::KeyA, W::KeyB => KeyCode::KeyB, W::KeyC => KeyCode::KeyC,
        W::KeyD => KeyCode::KeyD, W::KeyE => KeyCode::KeyE, W::KeyF => KeyCode::KeyF,
        W::KeyG => KeyCode::KeyG, W::KeyH => KeyCode::KeyH, W::KeyI => KeyCode::KeyI,
        W::KeyJ => KeyCode::KeyJ, W::KeyK => KeyCode::KeyK, W::KeyL => KeyCode::KeyL,
        W::KeyM => KeyCode::KeyM, W::KeyN => KeyCode::KeyN, W::KeyO => KeyCode::KeyO,
        W::KeyP => KeyCode::KeyP, W::KeyQ => KeyCode::KeyQ, W::KeyR => KeyCode::KeyR,
        W::KeyS => KeyCode::KeyS, W::KeyT => KeyCode::KeyT, W::KeyU => KeyCode::KeyU,
        W::KeyV => KeyCode::KeyV, W::KeyW => KeyCode::KeyW, W::KeyX => KeyCode::KeyX,
        W::KeyY => KeyCode::KeyY, W::KeyZ => KeyCode::KeyZ,

        W::ArrowDown => KeyCode::ArrowDown,
        W::ArrowLeft => KeyCode::ArrowLeft,
        W::ArrowRight => KeyCode::ArrowRight,
        W::ArrowUp => KeyCode::ArrowUp,

        W::Space => KeyCode::Space,
        W::Enter => KeyCode::Enter,
        W::Escape => KeyCode::Escape,
        W::Tab => KeyCode::Tab,
        W::Backspace => KeyCode::Backspace,
        W::Delete => KeyCode::Delete,
        W::ShiftLeft => KeyCode::ShiftLeft,
        W::ShiftRight => KeyCode::ShiftRight,
        W::ControlLeft => KeyCode::ControlLeft,
        W::ControlRight => KeyCode::ControlRight,

        _ => KeyCode::Unidentified,
    }
}

//=== Mouse Conversion ====================================================

fn map_button(button: WinitMouseButton) -> MouseButton {
    match button {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Extra1,
        WinitMouseButton::Forward => MouseButton::Extra2,
        WinitMouseButton::Other(_) => MouseButton::Other,
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
