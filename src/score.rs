//! Score aggregation
//!
//! Combines timing features, motion features, and the answer-correctness flag
//! into a final confidence score and human/bot verdict. Scoring is additive:
//! each satisfied rule contributes a fixed number of points and a rationale
//! string. Rule evaluation order fixes the rationale ordering; the numeric
//! total is order-independent. The rules of steps 1-5 sum to at most 100, so
//! the correctness bonus can overflow the scale and the final clamp is load
//! bearing.

use crate::types::{MotionFeatures, ScoreResult, TimingFeatures};

/// Points for a response inside the plausible human window
pub const NATURAL_TIMING_POINTS: i32 = 40;

/// Points for a trace flagged as natural movement
pub const NATURAL_MOVEMENT_POINTS: i32 = 30;

/// Points for a smooth drawing pattern
pub const SMOOTH_PATTERN_POINTS: i32 = 15;

/// Points for human-like speed variation
pub const SPEED_VARIATION_POINTS: i32 = 10;

/// Points for good shape accuracy
pub const SHAPE_ACCURACY_POINTS: i32 = 5;

/// Bonus for answering the question correctly
pub const CORRECT_ANSWER_POINTS: i32 = 10;

/// Penalty for an incorrect answer (floored so the running total stays >= 0)
pub const INCORRECT_ANSWER_PENALTY: i32 = 20;

/// Response time below which the "too fast" rationale fires (ms)
pub const TOO_FAST_THRESHOLD_MS: u64 = 500;

/// Response time above which the "too slow" rationale fires (ms)
pub const TOO_SLOW_THRESHOLD_MS: u64 = 30_000;

/// Smoothness above which the drawing pattern counts as smooth
pub const SMOOTH_PATTERN_MIN: f64 = 50.0;

/// Speed variation above which the variation bonus applies
pub const SPEED_VARIATION_MIN: f64 = 0.5;

/// Drawing accuracy above which the accuracy bonus applies
pub const SHAPE_ACCURACY_MIN: f64 = 60.0;

/// Confidence at or above which the session is judged human
pub const HUMAN_CONFIDENCE_THRESHOLD: u8 = 70;

/// Aggregate both feature records and the correctness flag into the terminal
/// score. Total over any well-formed feature pair; never fails.
pub fn aggregate(
    timing: &TimingFeatures,
    motion: &MotionFeatures,
    answered_correctly: bool,
) -> ScoreResult {
    let mut confidence: i32 = 0;
    let mut reasons = Vec::new();

    if timing.is_natural_timing {
        confidence += NATURAL_TIMING_POINTS;
        reasons.push("Natural response timing".to_string());
    } else if timing.response_time_ms < TOO_FAST_THRESHOLD_MS {
        reasons.push("Response too fast for human".to_string());
    } else if timing.response_time_ms > TOO_SLOW_THRESHOLD_MS {
        reasons.push("Response too slow".to_string());
    }

    if motion.natural_movement {
        confidence += NATURAL_MOVEMENT_POINTS;
        reasons.push("Natural mouse movement detected".to_string());
    }

    if motion.smoothness > SMOOTH_PATTERN_MIN {
        confidence += SMOOTH_PATTERN_POINTS;
        reasons.push("Smooth drawing pattern".to_string());
    }

    if motion.speed_variation > SPEED_VARIATION_MIN {
        confidence += SPEED_VARIATION_POINTS;
        reasons.push("Human-like speed variation".to_string());
    }

    if motion.drawing_accuracy > SHAPE_ACCURACY_MIN {
        confidence += SHAPE_ACCURACY_POINTS;
        reasons.push("Good shape accuracy".to_string());
    }

    if answered_correctly {
        confidence += CORRECT_ANSWER_POINTS;
        reasons.push("Answered question correctly".to_string());
    } else {
        confidence = (confidence - INCORRECT_ANSWER_PENALTY).max(0);
        reasons.push("Incorrect answer provided".to_string());
    }

    let confidence = confidence.clamp(0, 100) as u8;

    ScoreResult {
        is_human: confidence >= HUMAN_CONFIDENCE_THRESHOLD,
        confidence,
        reasons,
    }
}
