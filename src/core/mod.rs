//=========================================================================
// Core Services
//=========================================================================
//
// Configuration, frame timing and the shared execution context — the
// services everything else is built on.
//
//=========================================================================

//=== Module Declarations =================================================

mod config;
mod context;
mod time;

//=== Public API ==========================================================

pub use config::{AudioConfig, Config, ConfigError, GraphicsConfig, PerformanceConfig, WindowConfig};
pub use context::Context;
pub use time::GameClock;
