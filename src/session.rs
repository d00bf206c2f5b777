//! Challenge session adapter
//!
//! Parses challenge session JSON from the UI collaborators, validates the
//! parts the core cannot degrade around, and computes the answer-correctness
//! flag that feeds the aggregator.

use crate::error::EngineError;
use crate::types::{ChallengeSession, PointerSample};

/// Parse a challenge session JSON string into a `ChallengeSession`
pub fn parse_session(json: &str) -> Result<ChallengeSession, EngineError> {
    serde_json::from_str(json)
        .map_err(|e| EngineError::ParseError(format!("Failed to parse challenge session: {}", e)))
}

/// Validate structural requirements of a session.
///
/// Only properties the scoring core cannot degrade around are rejected here.
/// A reversed timestamp pair or a short trace is tolerated: the analyzers
/// clamp and zero-signal respectively.
pub fn validate_session(session: &ChallengeSession) -> Result<(), EngineError> {
    if session.complexity_tier == 0 {
        return Err(EngineError::InvalidSession(
            "complexity_tier must be at least 1".to_string(),
        ));
    }
    if session.expected_answer.trim().is_empty() {
        return Err(EngineError::InvalidSession(
            "expected_answer must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Return the session's pointer trace in timestamp order.
///
/// The drawing collaborator promises chronological order; sorting here keeps
/// the triple walk well defined if that promise slips.
pub fn sorted_samples(session: &ChallengeSession) -> Vec<PointerSample> {
    let mut samples = session.samples.clone();
    samples.sort_by_key(|s| s.timestamp_ms);
    samples
}

/// Case-insensitive, whitespace-trimmed answer equality
pub fn answers_match(submitted: &str, expected: &str) -> bool {
    submitted.trim().to_lowercase() == expected.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ShapeKind;

    fn sample_session_json() -> &'static str {
        r#"{
            "session_id": "sess-42",
            "start_time_ms": 1000,
            "end_time_ms": 5000,
            "complexity_tier": 2,
            "submitted_answer": " Orange ",
            "expected_answer": "orange",
            "target_shape": "circle",
            "samples": [
                { "x": 10.0, "y": 20.0, "timestamp_ms": 100 },
                { "x": 12.0, "y": 22.0, "timestamp_ms": 120 }
            ]
        }"#
    }

    #[test]
    fn test_parse_session() {
        let session = parse_session(sample_session_json()).unwrap();

        assert_eq!(session.session_id, "sess-42");
        assert_eq!(session.complexity_tier, 2);
        assert_eq!(session.target_shape, ShapeKind::Circle);
        assert_eq!(session.samples.len(), 2);
        assert_eq!(session.samples[1].timestamp_ms, 120);
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = parse_session("not valid json");
        assert!(matches!(result, Err(EngineError::ParseError(_))));
    }

    #[test]
    fn test_validate_rejects_zero_tier() {
        let mut session = parse_session(sample_session_json()).unwrap();
        session.complexity_tier = 0;
        assert!(validate_session(&session).is_err());
    }

    #[test]
    fn test_validate_rejects_blank_expected_answer() {
        let mut session = parse_session(sample_session_json()).unwrap();
        session.expected_answer = "   ".to_string();
        assert!(validate_session(&session).is_err());
    }

    #[test]
    fn test_validate_tolerates_reversed_timestamps() {
        // Timing analyzer clamps; the adapter does not reject
        let mut session = parse_session(sample_session_json()).unwrap();
        session.start_time_ms = 9000;
        assert!(validate_session(&session).is_ok());
    }

    #[test]
    fn test_sorted_samples_orders_by_timestamp() {
        let mut session = parse_session(sample_session_json()).unwrap();
        session.samples.reverse();

        let sorted = sorted_samples(&session);
        assert_eq!(sorted[0].timestamp_ms, 100);
        assert_eq!(sorted[1].timestamp_ms, 120);
    }

    #[test]
    fn test_answers_match_trims_and_ignores_case() {
        assert!(answers_match("  WEDNESDAY ", "wednesday"));
        assert!(answers_match("7", "7"));
        assert!(!answers_match("tuesday", "wednesday"));
        assert!(!answers_match("", "orange"));
    }
}
