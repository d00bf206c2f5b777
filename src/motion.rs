//! Pointer-motion analysis
//!
//! Converts an ordered trace of timestamped pointer samples plus a target
//! shape into a motion feature record: smoothness, speed variation, drawing
//! accuracy, and a natural-movement flag. Humans show moderate directional
//! jitter and irregular speed; scripted pointers tend toward perfectly
//! straight, perfectly timed paths.

use crate::shape;
use crate::types::{MotionFeatures, PointerSample, ShapeKind};

/// Minimum trace length for meaningful analysis; shorter traces yield the
/// zero-signal record
pub const MIN_TRACE_SAMPLES: usize = 10;

/// Scale factor applied to per-sample cumulative turning in the smoothness score
pub const ANGLE_PENALTY_SCALE: f64 = 10.0;

/// Smoothness above which movement can count as natural
pub const NATURAL_SMOOTHNESS_MIN: f64 = 30.0;

/// Speed variation above which movement can count as natural
pub const NATURAL_SPEED_VARIATION_MIN: f64 = 0.5;

/// Analyze a pointer trace against the target shape.
///
/// Walks the trace in overlapping triples, accumulating the absolute change
/// in segment direction (smoothness) and per-segment speeds (speed
/// variation). Zero-delta timestamp pairs are skipped rather than producing
/// an undefined speed. Either returns the short-circuit zero-signal record or
/// a fully populated one; never a partial result.
pub fn analyze_motion(samples: &[PointerSample], target_shape: ShapeKind) -> MotionFeatures {
    if samples.len() < MIN_TRACE_SAMPLES {
        return MotionFeatures::zero_signal();
    }

    let mut total_angle_change = 0.0;
    let mut speeds = Vec::new();

    for triple in samples.windows(3) {
        let (p1, p2, p3) = (&triple[0], &triple[1], &triple[2]);

        let angle_in = (p2.y - p1.y).atan2(p2.x - p1.x);
        let angle_out = (p3.y - p2.y).atan2(p3.x - p2.x);
        total_angle_change += (angle_out - angle_in).abs();

        let distance = ((p3.x - p2.x).powi(2) + (p3.y - p2.y).powi(2)).sqrt();
        let dt_ms = p3.timestamp_ms.saturating_sub(p2.timestamp_ms);
        if dt_ms > 0 {
            speeds.push(distance / dt_ms as f64);
        }
    }

    let smoothness =
        (100.0 - (total_angle_change / samples.len() as f64) * ANGLE_PENALTY_SCALE).max(0.0);
    let speed_variation = mean_absolute_deviation(&speeds);
    let drawing_accuracy = shape::estimate_accuracy(samples, target_shape);

    MotionFeatures {
        smoothness,
        natural_movement: smoothness > NATURAL_SMOOTHNESS_MIN
            && speed_variation > NATURAL_SPEED_VARIATION_MIN,
        drawing_accuracy,
        speed_variation,
    }
}

/// Mean absolute deviation from the mean; 0 for an empty series (degenerate
/// all-duplicate-timestamp traces).
fn mean_absolute_deviation(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean: f64 = values.iter().sum::<f64>() / n;
    values.iter().map(|v| (v - mean).abs()).sum::<f64>() / n
}
