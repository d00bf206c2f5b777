//! Response-timing analysis
//!
//! Converts a start/end timestamp pair and a question complexity tier into a
//! timing feature record. The plausible human response window scales linearly
//! with complexity: below it implies superhuman reaction, above it implies
//! abandonment or distraction (tolerated, but not natural).

use crate::types::TimingFeatures;

/// Lower bound of the plausible human window, per complexity tier (ms)
pub const EXPECTED_MIN_MS_PER_TIER: u64 = 1000;

/// Upper bound of the plausible human window, per complexity tier (ms)
pub const EXPECTED_MAX_MS_PER_TIER: u64 = 8000;

/// Fixed divisor approximating an average 3-character answer.
///
/// A coarse proxy for per-character typing speed; the actual answer text is
/// never measured.
pub const TYPING_SPEED_DIVISOR: f64 = 3.0;

/// Analyze response timing for a question answered between `start_time_ms`
/// and `end_time_ms`.
///
/// Total over well-formed inputs. A caller contract breach where
/// `end_time_ms < start_time_ms` clamps the response time to 0 so downstream
/// invariants hold.
pub fn analyze_timing(start_time_ms: u64, end_time_ms: u64, complexity_tier: u32) -> TimingFeatures {
    let response_time_ms = end_time_ms.saturating_sub(start_time_ms);
    let expected_min_ms = complexity_tier as u64 * EXPECTED_MIN_MS_PER_TIER;
    let expected_max_ms = complexity_tier as u64 * EXPECTED_MAX_MS_PER_TIER;

    TimingFeatures {
        response_time_ms,
        thinking_time_ms: response_time_ms.saturating_sub(expected_min_ms),
        typing_speed_ms_per_char: response_time_ms as f64 / TYPING_SPEED_DIVISOR,
        is_natural_timing: response_time_ms >= expected_min_ms
            && response_time_ms <= expected_max_ms,
    }
}
