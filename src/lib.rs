//! Resume scorer library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod scoring;

pub use config::{ScoringConfig, ScoringWeights};
pub use error::{Result, ResumeScorerError};
pub use scoring::{CandidateProfile, CandidateScore, JobProfile, ScoreResult, Scored, ScoringEngine};
