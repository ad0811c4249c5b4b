//! L4 Atomic Layer: Progress calculation for the scroll indicator

use super::host::Geometry;

/// Largest reachable offset, never negative
#[inline]
pub fn max_offset(geometry: Geometry) -> f64 {
    (geometry.scrollable_width - geometry.visible_width).max(0.0)
}

/// Fraction of the scrollable distance covered by `offset`
///
/// Returns 0 when nothing overflows, otherwise a value clamped to [0, 1].
#[inline]
pub fn progress_ratio(offset: f64, max_offset: f64) -> f64 {
    if max_offset <= 0.0 {
        return 0.0;
    }
    (offset / max_offset).clamp(0.0, 1.0)
}

/// 1-based position readout for a progress indicator with `count` stops
///
/// Formats as two digits, e.g. `"03"`. The index stays within `[1, count]`
/// even at a ratio of exactly 1.0.
pub fn ordinal_label(ratio: f64, count: usize) -> String {
    if count == 0 {
        return "00".to_string();
    }
    let ratio = ratio.clamp(0.0, 1.0);
    let index = ((ratio * count as f64).floor() as usize + 1).min(count);
    format!("{:02}", index)
}
