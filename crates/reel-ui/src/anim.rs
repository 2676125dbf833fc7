//! Smoothing for indicator visuals.
//!
//! The engine writes indicator targets instantly; the viewer eases toward
//! them so width and color changes read as motion rather than jumps.

/// A float that exponentially approaches its target.
#[derive(Debug, Clone)]
pub struct AnimFloat {
    pub current: f32,
    pub target: f32,
    /// Convergence rate per second (higher = faster).
    pub speed: f32,
}

impl AnimFloat {
    pub fn new(value: f32, speed: f32) -> Self {
        Self {
            current: value,
            target: value,
            speed,
        }
    }

    /// Retarget and advance by `dt` seconds in one call.
    pub fn follow(&mut self, target: f32, dt: f32) -> f32 {
        self.target = target;
        self.tick(dt)
    }

    /// Advance by `dt` seconds and return the current value.
    pub fn tick(&mut self, dt: f32) -> f32 {
        let blend = 1.0 - (-self.speed * dt.max(0.0)).exp();
        self.current += (self.target - self.current) * blend;
        if self.done() {
            self.current = self.target;
        }
        self.current
    }

    pub fn done(&self) -> bool {
        (self.current - self.target).abs() < 0.001
    }
}
