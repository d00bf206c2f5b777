//! Core types for the Verimotion scoring pipeline
//!
//! This module defines the data structures that flow through each stage of the
//! pipeline: raw challenge sessions, derived feature records, and the verdict
//! payload. All derived records are immutable value types; each pipeline stage
//! returns a fresh record and never mutates its input.

use serde::{Deserialize, Serialize};

/// Target shape presented for the tracing challenge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Circle,
    Square,
    Triangle,
}

impl ShapeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Square => "square",
            ShapeKind::Triangle => "triangle",
        }
    }
}

/// A single timestamped pointer position captured by the drawing collaborator.
///
/// Samples arrive in chronological order; timestamps are monotonic
/// milliseconds and must be non-decreasing across the trace.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerSample {
    /// Horizontal position (canvas coordinates)
    pub x: f64,
    /// Vertical position (canvas coordinates)
    pub y: f64,
    /// Capture time (monotonic milliseconds)
    pub timestamp_ms: u64,
}

/// Timing features derived from a question response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingFeatures {
    /// Total response duration (milliseconds)
    pub response_time_ms: u64,
    /// Time spent beyond the expected minimum for the question's complexity
    pub thinking_time_ms: u64,
    /// Coarse typing-speed proxy (milliseconds per character, fixed 3-char answer model)
    pub typing_speed_ms_per_char: f64,
    /// Whether the response fell within the plausible human window
    pub is_natural_timing: bool,
}

/// Motion features derived from a pointer trace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotionFeatures {
    /// Inverse measure of cumulative directional jitter (0-100)
    pub smoothness: f64,
    /// Whether the trace shows human-like smoothness and speed irregularity
    pub natural_movement: bool,
    /// Shape-specific goodness-of-fit heuristic (0-100)
    pub drawing_accuracy: f64,
    /// Mean absolute deviation of per-segment pointer speed
    pub speed_variation: f64,
}

impl MotionFeatures {
    /// The fixed record returned when a trace carries too few samples to
    /// analyze. Degrades toward "bot-like" rather than failing.
    pub fn zero_signal() -> Self {
        Self {
            smoothness: 0.0,
            natural_movement: false,
            drawing_accuracy: 0.0,
            speed_variation: 0.0,
        }
    }
}

/// Terminal scoring output: verdict, confidence, and rationale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Whether the session is judged human (confidence >= 70)
    pub is_human: bool,
    /// Estimated likelihood of human origin (0-100)
    pub confidence: u8,
    /// Human-readable rationale, in fixed rule-evaluation order
    pub reasons: Vec<String>,
}

/// A completed challenge session submitted by the UI collaborators.
///
/// The question collaborator supplies the timestamps, complexity tier, and
/// answer pair; the drawing collaborator supplies the pointer trace and the
/// shape that was presented as the tracing target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChallengeSession {
    /// Unique session identifier
    pub session_id: String,
    /// Question display time (monotonic milliseconds)
    pub start_time_ms: u64,
    /// Answer submission time (monotonic milliseconds)
    pub end_time_ms: u64,
    /// Question complexity weighting: 1 for simple recall, 2 for arithmetic,
    /// 3 for multi-step logic
    pub complexity_tier: u32,
    /// Answer the user submitted
    pub submitted_answer: String,
    /// Expected answer for the presented question
    pub expected_answer: String,
    /// Shape presented as the tracing target
    pub target_shape: ShapeKind,
    /// Pointer trace captured while drawing
    pub samples: Vec<PointerSample>,
}

/// Everything the results collaborator needs from one verification attempt:
/// the verdict plus both intermediate feature records and the correctness flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChallengeOutcome {
    pub verdict: ScoreResult,
    pub timing: TimingFeatures,
    pub motion: MotionFeatures,
    pub answered_correctly: bool,
}

/// Verdict payload producer metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerdictProducer {
    pub name: String,
    pub version: String,
    pub instance_id: String,
}

/// Verdict payload provenance information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerdictProvenance {
    pub session_id: String,
    pub computed_at_utc: String,
}

/// Complete verdict payload emitted to the results collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerdictPayload {
    pub report_version: String,
    pub producer: VerdictProducer,
    pub provenance: VerdictProvenance,
    pub verdict: ScoreResult,
    pub timing: TimingFeatures,
    pub motion: MotionFeatures,
    pub answered_correctly: bool,
}
