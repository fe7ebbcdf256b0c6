//! Scoring and ranking of candidate profiles against job requirements

pub mod profile;
pub mod matcher;
pub mod result;
pub mod ranking;
pub mod engine;

pub use engine::ScoringEngine;
pub use profile::{CandidateProfile, JobProfile};
pub use result::{CandidateScore, ScoreResult, Scored};
