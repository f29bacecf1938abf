pub const DEFAULT_DURATION_MS: f64 = 2000.0;

/// Ease-out-exponential: a fast start decelerating toward the target,
/// exactly 1.0 at progress 1 so the final display lands on the target.
pub fn ease_out_expo(progress: f64) -> f64 {
    if progress >= 1.0 {
        1.0
    } else {
        1.0 - 2f64.powf(-10.0 * progress)
    }
}

/// Count-up from 0 to `target` over a fixed duration.
///
/// Runs at most once: after the animation has fired, `trigger` is a no-op
/// until `reset` re-arms the instance and clears the display.
#[derive(Clone, Debug)]
pub struct CountUp {
    target: u32,
    duration_ms: f64,
    elapsed_ms: f64,
    display: u32,
    running: bool,
    has_animated: bool,
}

impl CountUp {
    pub fn new(target: u32, duration_ms: f64) -> Self {
        Self {
            target,
            duration_ms,
            elapsed_ms: 0.0,
            display: 0,
            running: false,
            has_animated: false,
        }
    }

    pub fn with_default_duration(target: u32) -> Self {
        Self::new(target, DEFAULT_DURATION_MS)
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn display(&self) -> u32 {
        self.display
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start the animation. Returns false, and does nothing, if this
    /// instance already animated.
    pub fn trigger(&mut self) -> bool {
        if self.has_animated {
            return false;
        }
        self.has_animated = true;
        self.running = true;
        self.elapsed_ms = 0.0;
        true
    }

    /// Clear the animated flag and the display so the counter can run again.
    pub fn reset(&mut self) {
        self.has_animated = false;
        self.running = false;
        self.elapsed_ms = 0.0;
        self.display = 0;
    }

    /// Advance by a frame delta. Returns the new display value while the
    /// animation runs, with the final frame exactly the target, and `None`
    /// once idle.
    pub fn advance(&mut self, dt_ms: f64) -> Option<u32> {
        if !self.running {
            return None;
        }
        self.elapsed_ms += dt_ms;
        let progress = (self.elapsed_ms / self.duration_ms).min(1.0);
        self.display = (ease_out_expo(progress) * f64::from(self.target)).floor() as u32;
        if progress >= 1.0 {
            self.display = self.target;
            self.running = false;
        }
        Some(self.display)
    }
}
