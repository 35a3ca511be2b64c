//=========================================================================
// Frame Clock
//=========================================================================
//
// Measures per-frame delta time and enforces an optional FPS cap.
//
// The clock is ticked once at the top of every frame. When a target FPS
// is set and the frame finished early, `tick` sleeps away the remainder
// of the frame budget before measuring, so delta time converges on the
// target frame duration.
//
// Delta time is measured in f64 seconds internally; the scene tree
// receives f32 seconds (plenty for per-frame durations).
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::{Duration, Instant};

use log::{info, warn};

//=== GameClock ===========================================================

/// Per-frame timing: delta time, time scale and FPS capping.
///
/// `time_scale` lets gameplay slow down or pause (scale 0) without
/// touching the real measured delta, which stays available through
/// [`GameClock::unscaled_delta`].
pub struct GameClock {
    last_frame: Instant,
    delta_seconds: f64,
    time_scale: f64,
    target_fps: u32,
    target_frame_duration: f64,
}

impl GameClock {
    //--- Construction -----------------------------------------------------

    /// Creates an uncapped clock. The first `tick` measures from here.
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            delta_seconds: 0.0,
            time_scale: 1.0,
            target_fps: 0,
            target_frame_duration: 0.0,
        }
    }

    //--- Frame Processing -------------------------------------------------

    /// Advances the clock by one frame and returns the scaled delta time
    /// in seconds.
    ///
    /// With a target FPS set, sleeps out the rest of the frame budget
    /// first.
    pub fn tick(&mut self) -> f32 {
        let mut delta = self.last_frame.elapsed().as_secs_f64();
        if self.target_frame_duration > 0.0 && delta < self.target_frame_duration {
            std::thread::sleep(Duration::from_secs_f64(self.target_frame_duration - delta));
            delta = self.last_frame.elapsed().as_secs_f64();
        }
        self.last_frame = Instant::now();
        self.delta_seconds = delta;
        self.delta()
    }

    //--- Query API --------------------------------------------------------

    /// Scaled delta time of the last frame, in seconds.
    pub fn delta(&self) -> f32 {
        (self.delta_seconds * self.time_scale) as f32
    }

    /// Real measured delta time of the last frame, ignoring time scale.
    pub fn unscaled_delta(&self) -> f32 {
        self.delta_seconds as f32
    }

    /// Current time-scale factor.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Configured FPS cap; 0 means uncapped.
    pub fn target_fps(&self) -> u32 {
        self.target_fps
    }

    //--- Configuration ----------------------------------------------------

    /// Sets the time-scale factor. Negative values are clamped to 0.
    pub fn set_time_scale(&mut self, scale: f64) {
        if scale < 0.0 {
            warn!("time scale cannot be negative ({}), clamping to 0", scale);
            self.time_scale = 0.0;
        } else {
            self.time_scale = scale;
        }
    }

    /// Sets the FPS cap. 0 disables capping.
    pub fn set_target_fps(&mut self, fps: u32) {
        self.target_fps = fps;
        if fps == 0 {
            self.target_frame_duration = 0.0;
            info!("frame rate cap disabled");
        } else {
            self.target_frame_duration = 1.0 / f64::from(fps);
            info!("frame rate capped at {} fps ({:.4}s per frame)", fps, self.target_frame_duration);
        }
    }
}

impl Default for GameClock {
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

    #[test]
    fn first_tick_returns_small_delta() {
        let mut clock = GameClock::new();
        let dt = clock.tick();
        assert!(dt >= 0.0);
        assert!(dt < 1.0, "fresh clock should not report a huge delta");
    }

    #[test]
    fn time_scale_scales_delta_but_not_unscaled() {
        let mut clock = GameClock::new();
        clock.set_time_scale(0.0);
        std::thread::sleep(Duration::from_millis(2));
        let dt = clock.tick();
        assert_eq!(dt, 0.0);
        assert!(clock.unscaled_delta() > 0.0);
    }

    #[test]
    fn negative_time_scale_clamps_to_zero() {
        let mut clock = GameClock::new();
        clock.set_time_scale(-2.0);
        assert_eq!(clock.time_scale(), 0.0);
    }

    #[test]
    fn zero_fps_means_uncapped() {
        let mut clock = GameClock::new();
        clock.set_target_fps(0);
        assert_eq!(clock.target_fps(), 0);

        let before = Instant::now();
        clock.tick();
        // An uncapped tick should return almost immediately.
        assert!(before.elapsed() < Duration::from_millis(50));
    }

    #[test]
    fn fps_cap_stretches_short_frames() {
        let mut clock = GameClock::new();
        clock.tick();
        clock.set_target_fps(100); // 10ms budget

        let before = Instant::now();
        let dt = clock.tick();
        let elapsed = before.elapsed();

        assert!(
            elapsed >= Duration::from_millis(5),
            "capped tick returned too quickly: {:?}",
            elapsed
        );
        assert!(dt >= 0.005, "delta should reflect the slept-out budget");
    }
}
