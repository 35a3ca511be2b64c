//=========================================================================
// Logging Setup
//=========================================================================
//
// Thin wrapper over env_logger so binaries get sensible output with one
// call. Library code only ever uses the `log` macros; the subscriber is
// the application's choice and this is merely the default one.
//
//=========================================================================

/// Initializes env_logger, defaulting to `info` when `RUST_LOG` is
/// unset.
///
/// Call once, early in `main`. Calling it twice panics (env_logger's
/// behavior), so embedders bringing their own subscriber should simply
/// not call this.
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
