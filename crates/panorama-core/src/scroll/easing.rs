//! L4 Atomic Layer: Exponential convergence for scroll animation
//!
//! Each frame covers a fixed fraction of the remaining distance, so motion
//! starts fast and glides into the target.

/// One convergence step: move `rate` of the way from `current` to `target`
///
/// # Arguments
/// * `current` - Current animated offset
/// * `target` - Offset being converged toward
/// * `rate` - Fraction of the remaining distance covered, in (0, 1]
#[inline]
pub fn approach(current: f64, target: f64, rate: f64) -> f64 {
    current + (target - current) * rate
}

/// Whether the remaining distance is small enough to snap
#[inline]
pub fn is_settled(current: f64, target: f64, threshold: f64) -> bool {
    (target - current).abs() < threshold
}
