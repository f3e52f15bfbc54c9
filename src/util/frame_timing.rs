use web_time::Instant;

/// Frame clock producing per-frame delta time with a smoothed FPS readout.
pub struct FrameClock {
    /// Last frame timestamp
    last_frame: Instant,
    /// Upper bound on a single frame's delta, in seconds
    max_delta: f32,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_DELTA)
    }
}

impl FrameClock {
    /// Quarter of a second: a stall longer than this moves the camera as if
    /// only this much time had passed.
    pub const DEFAULT_MAX_DELTA: f32 = 0.25;

    /// Create a clock whose deltas never exceed `max_delta` seconds.
    #[must_use]
    pub fn new(max_delta: f32) -> Self {
        Self {
            last_frame: Instant::now(),
            max_delta: max_delta.max(0.0),
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,
        }
    }

    /// Call once per frame. Returns seconds since the previous call, in
    /// `[0, max_delta]`.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        if elapsed > 0.0 {
            let instant_fps = 1.0 / elapsed;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        elapsed.min(self.max_delta)
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}
