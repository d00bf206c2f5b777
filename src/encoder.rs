//! Verdict report encoder
//!
//! Encodes a challenge outcome into the verdict payload handed to the results
//! collaborator, stamped with producer and provenance metadata.

use crate::error::EngineError;
use crate::types::{ChallengeOutcome, VerdictPayload, VerdictProducer, VerdictProvenance};
use crate::{ENGINE_VERSION, PRODUCER_NAME};
use chrono::Utc;
use uuid::Uuid;

/// Current verdict report schema version
pub const REPORT_VERSION: &str = "1.0.0";

/// Verdict report encoder
pub struct ReportEncoder {
    instance_id: String,
}

impl Default for ReportEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportEncoder {
    /// Create a new encoder with a unique instance ID
    pub fn new() -> Self {
        Self {
            instance_id: Uuid::new_v4().to_string(),
        }
    }

    /// Create an encoder with a specific instance ID
    pub fn with_instance_id(instance_id: String) -> Self {
        Self { instance_id }
    }

    /// Encode a challenge outcome into a verdict payload
    pub fn encode(&self, session_id: &str, outcome: &ChallengeOutcome) -> VerdictPayload {
        let producer = VerdictProducer {
            name: PRODUCER_NAME.to_string(),
            version: ENGINE_VERSION.to_string(),
            instance_id: self.instance_id.clone(),
        };

        let provenance = VerdictProvenance {
            session_id: session_id.to_string(),
            computed_at_utc: Utc::now().to_rfc3339(),
        };

        VerdictPayload {
            report_version: REPORT_VERSION.to_string(),
            producer,
            provenance,
            verdict: outcome.verdict.clone(),
            timing: outcome.timing.clone(),
            motion: outcome.motion.clone(),
            answered_correctly: outcome.answered_correctly,
        }
    }

    /// Encode to a JSON string
    pub fn encode_to_json(
        &self,
        session_id: &str,
        outcome: &ChallengeOutcome,
    ) -> Result<String, EngineError> {
        let payload = self.encode(session_id, outcome);
        serde_json::to_string_pretty(&payload).map_err(EngineError::JsonError)
    }
}
