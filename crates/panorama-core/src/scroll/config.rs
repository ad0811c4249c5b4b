//! L4 Atomic Layer: Configuration helpers for smooth scrolling
//!
//! Re-exports `ScrollConfig` from the crate config and adds derived values.

use std::time::Duration;

pub use crate::config::ScrollConfig;

/// Extension trait for ScrollConfig with utility methods
pub trait ScrollConfigExt {
    /// Get the frame interval for the animation FPS
    fn frame_interval(&self) -> Duration;

    /// Upper bound on the number of steps needed to settle across `distance`
    fn frames_to_settle(&self, distance: f64) -> u32;
}

impl ScrollConfigExt for ScrollConfig {
    #[inline]
    fn frame_interval(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis(1000 / self.animation_fps as u64)
        }
    }

    fn frames_to_settle(&self, distance: f64) -> u32 {
        let distance = distance.abs();
        if distance < self.settle_threshold {
            return 1;
        }
        let rate = self.convergence_rate.clamp(f64::EPSILON, 1.0);
        if rate >= 1.0 {
            return 2;
        }
        // gap after n moves is distance * (1 - rate)^n; one more step snaps
        let moves = (self.settle_threshold / distance).ln() / (1.0 - rate).ln();
        moves.ceil().max(0.0) as u32 + 1
    }
}
