//! Verimotion - Behavioral scoring engine for human verification challenges
//!
//! Verimotion distinguishes human users from automated agents by scoring two
//! behavioral signals captured during a challenge: response timing on a
//! knowledge question, and freehand pointer-drawing kinematics when tracing a
//! target shape. The signals flow through a deterministic pipeline: session
//! adaptation → timing analysis + motion analysis → score aggregation →
//! report encoding.
//!
//! ## Modules
//!
//! - **Timing Analyzer**: Convert a start/end timestamp pair into timing features
//! - **Motion Analyzer**: Convert a timestamped pointer trace into motion features
//! - **Score Aggregator**: Combine both feature records and answer correctness
//!   into a confidence score and human/bot verdict

pub mod encoder;
pub mod error;
pub mod motion;
pub mod pipeline;
pub mod score;
pub mod session;
pub mod shape;
pub mod timing;
pub mod types;

pub use error::EngineError;
pub use motion::analyze_motion;
pub use pipeline::{evaluate, verify_session, VerificationEngine};
pub use score::aggregate;
pub use session::{answers_match, parse_session};
pub use timing::analyze_timing;
pub use types::{
    ChallengeOutcome, ChallengeSession, MotionFeatures, PointerSample, ScoreResult, ShapeKind,
    TimingFeatures, VerdictPayload,
};

/// Engine version embedded in all verdict payloads
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Producer name for verdict payloads
pub const PRODUCER_NAME: &str = "verimotion";
