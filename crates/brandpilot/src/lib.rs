//! Scoring and normalization core for the brand content assistant.
//!
//! Three independent, side-effect free components live here: the profile
//! audit score ([`audit`]), the branding questionnaire completion aggregate
//! ([`branding`]), and the free-text and AI-response parsers ([`text`]).
//! The ambient modules ([`config`], [`error`], [`telemetry`]) back the HTTP
//! service and CLI that expose them.

pub mod audit;
pub mod branding;
pub mod config;
pub mod error;
pub mod telemetry;
pub mod text;

pub use audit::{
    calculate_audit_score, score_label, AuditReport, ProfileSnapshot, ScoreBand, ScoreLabel,
};
pub use branding::{calculate_branding_completion, BrandingCompletion, BrandingRawData};
pub use text::{
    parse_ai_response, parse_string_list, parse_to_array, parse_to_tags, safe_parse_json,
    MalformedAiResponse,
};
