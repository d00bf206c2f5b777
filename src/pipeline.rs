//! Scoring pipeline orchestration
//!
//! This module provides the public API for challenge scoring. It orchestrates
//! the full pipeline from challenge session JSON to verdict payload JSON.

use crate::encoder::ReportEncoder;
use crate::error::EngineError;
use crate::motion::analyze_motion;
use crate::score::aggregate;
use crate::session::{answers_match, parse_session, sorted_samples, validate_session};
use crate::timing::analyze_timing;
use crate::types::{ChallengeOutcome, ChallengeSession};

/// Evaluate a completed challenge session.
///
/// Pure and deterministic: timing and motion analysis run independently on
/// their raw inputs, and the aggregator combines their outputs with the
/// correctness flag. Returns the verdict plus both intermediate feature
/// records for display.
pub fn evaluate(session: &ChallengeSession) -> ChallengeOutcome {
    let answered_correctly = answers_match(&session.submitted_answer, &session.expected_answer);

    let timing = analyze_timing(
        session.start_time_ms,
        session.end_time_ms,
        session.complexity_tier,
    );

    let samples = sorted_samples(session);
    let motion = analyze_motion(&samples, session.target_shape);

    let verdict = aggregate(&timing, &motion, answered_correctly);

    ChallengeOutcome {
        verdict,
        timing,
        motion,
        answered_correctly,
    }
}

/// Convert challenge session JSON to a verdict payload JSON (stateless,
/// one-shot).
///
/// # Example
/// ```ignore
/// let verdict_json = verify_session(session_json)?;
/// ```
pub fn verify_session(session_json: &str) -> Result<String, EngineError> {
    // Stage 1: Parse and validate session JSON
    let session = parse_session(session_json)?;
    validate_session(&session)?;

    // Stage 2: Evaluate the scoring pipeline
    let outcome = evaluate(&session);

    // Stage 3: Encode the verdict payload (fresh encoder for stateless call)
    let encoder = ReportEncoder::new();
    encoder.encode_to_json(&session.session_id, &outcome)
}

/// Engine for scoring many sessions with a stable producer instance ID.
///
/// Scoring itself is stateless; the engine only pins the instance ID stamped
/// into each verdict payload.
pub struct VerificationEngine {
    encoder: ReportEncoder,
}

impl Default for VerificationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl VerificationEngine {
    /// Create a new engine with a unique instance ID
    pub fn new() -> Self {
        Self {
            encoder: ReportEncoder::new(),
        }
    }

    /// Create an engine with a specific instance ID
    pub fn with_instance_id(instance_id: String) -> Self {
        Self {
            encoder: ReportEncoder::with_instance_id(instance_id),
        }
    }

    /// Process a challenge session JSON and return the verdict payload JSON
    pub fn process(&self, session_json: &str) -> Result<String, EngineError> {
        let session = parse_session(session_json)?;
        validate_session(&session)?;

        let outcome = evaluate(&session);

        self.encoder.encode_to_json(&session.session_id, &outcome)
    }
}
