//=========================================================================
// Input Event Types
//=========================================================================
//
// Internal representation of low-level input events.
//
// This module abstracts platform input (winit today, anything tomorrow)
// into a stable, engine-friendly format consumed by the input manager.
//
// Responsibilities:
// - Represent keyboard and mouse input in a portable way
// - Parse the key/button names used by the configuration file's
//   input_mappings section ("A", "Left", "Space", "MouseLeft", ...)
//
// Event Flow:
// ```text
// Platform Layer (winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    InputManager (action states)
//         ↓
//    Scenes & components (named action queries)
// ```
//
//=========================================================================

//=== MouseButton =========================================================

/// Physical mouse button identifier.
///
/// Abstracts platform-specific button representations into a stable
/// enum. `Other` covers side and macro buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (typically left).
    Left,

    /// Secondary button (typically right).
    Right,

    /// Middle button (wheel click).
    Middle,

    /// First extra button (browser "back" on many mice).
    Extra1,

    /// Second extra button (browser "forward" on many mice).
    Extra2,

    /// Any other button.
    Other,
}

impl MouseButton {
    /// Parses the button names accepted in config `input_mappings`.
    ///
    /// Returns `None` for strings that do not name a mouse button (they
    /// may still name a keyboard key).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "MouseLeft" => Some(Self::Left),
            "MouseRight" => Some(Self::Right),
            "MouseMiddle" => Some(Self::Middle),
            "MouseX1" => Some(Self::Extra1),
            "MouseX2" => Some(Self::Extra2),
            _ => None,
        }
    }
}

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the produced character:
/// `KeyA` is the same physical key on QWERTY and AZERTY layouts.
///
/// Coverage: alphanumerics, arrows and the special keys the default
/// input mappings refer to. Additional keys can be added without
/// breaking existing code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Numeric Keys ----------------------------------------------------
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys -------------------------------------------------
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrow Keys ------------------------------------------------------
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Special Keys ----------------------------------------------------
    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,

    /// Fallback for keys the platform layer does not map.
    Unidentified,
}

impl KeyCode {
    /// Parses the key names accepted in config `input_mappings`.
    ///
    /// Single letters and digits name themselves ("A", "7"); arrows use
    /// the bare direction ("Left"); special keys use their common names
    /// ("Space", "Escape", "LShift", ...). Unknown names return `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        use KeyCode::*;
        let key = match name {
            "0" => Digit0, "1" => Digit1, "2" => Digit2, "3" => Digit3,
            "4" => Digit4, "5" => Digit5, "6" => Digit6, "7" => Digit7,
            "8" => Digit8, "9" => Digit9,

            "A" => KeyA, "B" => KeyB, "C" => KeyC, "D" => KeyD,
            "E" => KeyE, "F" => KeyF, "G" => KeyG, "H" => KeyH,
            "I" => KeyI, "J" => KeyJ, "K" => KeyK, "L" => KeyL,
            "M" => KeyM, "N" => KeyN, "O" => KeyO, "P" => KeyP,
            "Q" => KeyQ, "R" => KeyR, "S" => KeyS, "T" => KeyT,
            "U" => KeyU, "V" => KeyV, "W" => KeyW, "X" => KeyX,
            "Y" => KeyY, "Z" => KeyZ,

            "Down" => ArrowDown,
            "Left" => ArrowLeft,
            "Right" => ArrowRight,
            "Up" => ArrowUp,

            "Space" => Space,
            "Enter" | "Return" => Enter,
            "Escape" => Escape,
            "Tab" => Tab,
            "Backspace" => Backspace,
            "Delete" => Delete,
            "LShift" => ShiftLeft,
            "RShift" => ShiftRight,
            "LCtrl" => ControlLeft,
            "RCtrl" => ControlRight,

            _ => return None,
        };
        Some(key)
    }
}

//=== InputEvent ==========================================================

/// Low-level input event delivered by the platform layer.
///
/// `KeyDown` carries the platform's key-repeat flag so the action layer
/// can distinguish the initial press from repeat events while a key is
/// held.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Key pressed down. `repeat` is true for OS key-repeat events.
    KeyDown { key: KeyCode, repeat: bool },

    /// Key released.
    KeyUp { key: KeyCode },

    /// Mouse button pressed at the given cursor position.
    MouseButtonDown { button: MouseButton, x: f32, y: f32 },

    /// Mouse button released at the given cursor position.
    MouseButtonUp { button: MouseButton, x: f32, y: f32 },

    /// Mouse cursor moved to a new position.
    ///
    /// Coordinates are in window space (pixels, top-left origin).
    MouseMoved { x: f32, y: f32 },

    /// Unrecognized or unsupported event; ignored by the input manager.
    Unidentified,
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_names_parse_to_key_codes() {
        assert_eq!(KeyCode::from_name("A"), Some(KeyCode::KeyA));
        assert_eq!(KeyCode::from_name("Z"), Some(KeyCode::KeyZ));
        assert_eq!(KeyCode::from_name("7"), Some(KeyCode::Digit7));
    }

    #[test]
    fn arrow_and_special_names_parse() {
        assert_eq!(KeyCode::from_name("Left"), Some(KeyCode::ArrowLeft));
        assert_eq!(KeyCode::from_name("Space"), Some(KeyCode::Space));
        assert_eq!(KeyCode::from_name("Escape"), Some(KeyCode::Escape));
        assert_eq!(KeyCode::from_name("Return"), Some(KeyCode::Enter));
    }

    #[test]
    fn unknown_key_name_is_none() {
        assert_eq!(KeyCode::from_name("NotAKey"), None);
        assert_eq!(KeyCode::from_name(""), None);
        // Lowercase names are not accepted; config names are canonical.
        assert_eq!(KeyCode::from_name("a"), None);
    }

    #[test]
    fn mouse_button_names_parse() {
        assert_eq!(MouseButton::from_name("MouseLeft"), Some(MouseButton::Left));
        assert_eq!(MouseButton::from_name("MouseRight"), Some(MouseButton::Right));
        assert_eq!(MouseButton::from_name("MouseX2"), Some(MouseButton::Extra2));
        assert_eq!(MouseButton::from_name("Left"), None);
    }
}
