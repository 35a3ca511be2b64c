//=========================================================================
// Platform Subsystem
//=========================================================================
//
// The thin layer between winit and the engine.
//
// Everything OS-specific lives here: window attribute construction from
// the engine config, and the translation of winit events into engine
// input events. The rest of the crate never names a winit type.
//
// Unlike the input path, the event *loop* itself is not wrapped — the
// app facade implements winit's `ApplicationHandler` directly and runs
// the whole engine single-threaded inside it, driving one frame per
// `RedrawRequested`.
//
//=========================================================================

//=== Module Declarations =================================================

mod event_mapper;

//=== External Dependencies ===============================================

use winit::dpi::LogicalSize;
use winit::window::WindowAttributes;

//=== Internal Dependencies ===============================================

use crate::core::WindowConfig;

//=== Public API ==========================================================

pub use event_mapper::EventMapper;

//=== Window Construction =================================================

/// Builds the winit window attributes for the configured window.
pub fn window_attributes(config: &WindowConfig) -> WindowAttributes {
    WindowAttributes::default()
        .with_title(config.title.clone())
        .with_inner_size(LogicalSize::new(config.width, config.height))
        .with_resizable(config.resizable)
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_attributes_carry_config() {
        let config = WindowConfig {
            title: "Test Window".to_string(),
            width: 800,
            height: 600,
            resizable: false,
        };
        let attrs = window_attributes(&config);
        assert_eq!(attrs.title, "Test Window");
        assert!(!attrs.resizable);
    }
}
