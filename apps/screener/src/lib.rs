//! Resume screening engine: extracts structured candidate records from PDF
//! resumes and scores them against parsed job-description requirements under
//! configurable category weights.
//!
//! The HTTP surface (upload handling, routing, CORS) lives in the embedding
//! application; this crate is the synchronous pipeline behind it:
//!
//! ```text
//! PDF bytes ──> extraction ──> CandidateRecord ─┐
//!                                               ├─> scoring ──> analytics
//! JD text ──> jd_parser ──> RequirementRecord ──┘
//! ```

pub mod config;
pub mod errors;
pub mod extraction;
pub mod models;
pub mod screening;

pub use config::EngineConfig;
pub use errors::EngineError;
pub use extraction::skills::SkillVocabulary;
pub use extraction::{parse_resume, parse_resume_batch, parse_resume_text};
pub use models::candidate::{BatchEntry, BatchOutcome, CandidateRecord};
pub use screening::analytics::{summarize_scores, AnalyticsSummary};
pub use screening::jd_parser::{parse_job_description, RequirementRecord};
pub use screening::qa::answer_question;
pub use screening::scoring::{score_batch, score_candidate, ScoreResult, WeightConfig};
