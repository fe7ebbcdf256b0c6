//! Weighted scoring engine

use crate::config::ScoringConfig;
use crate::error::Result;
use crate::input::records::CandidateRecord;
use crate::scoring::matcher::{experience_match, keyword_match, skill_match};
use crate::scoring::profile::{CandidateProfile, JobProfile};
use crate::scoring::ranking;
use crate::scoring::result::{to_percentage, CandidateScore, ScoreResult, Scored};
use log::{debug, info};
use std::path::Path;
use std::sync::Arc;
use tokio::task::JoinSet;

/// Scores candidates against a job using a fixed configuration.
///
/// Scoring is a pure function of its inputs, so one engine can be shared
/// across threads behind an `Arc`.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Build an engine from an optional config file, using defaults when the
    /// file is absent or unusable.
    pub fn from_config_path(path: Option<&Path>) -> Self {
        Self::new(ScoringConfig::load_or_default(path))
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score one candidate against one job.
    pub fn score(&self, candidate: &CandidateProfile, job: &JobProfile) -> ScoreResult {
        let skills = candidate.skills();
        let required = job.required_skills();
        let preferred = job.preferred_skills();

        let required_score = skill_match(skills, required);
        let preferred_score = skill_match(skills, preferred);
        let experience_score = experience_match(
            candidate.experience(),
            job.min_experience(),
            self.config.exp_tolerance,
        );
        let keyword_score = keyword_match(candidate.keywords(), job.keywords());

        let weights = &self.config.weights;
        let total = required_score * weights.required_skills
            + preferred_score * weights.preferred_skills
            + experience_score * weights.experience
            + keyword_score * weights.keyword_density;

        ScoreResult {
            total_score: to_percentage(total),
            rskillscore: to_percentage(required_score),
            pskillscore: to_percentage(preferred_score),
            experience_score: to_percentage(experience_score),
            keyword_score: to_percentage(keyword_score),
            matched_rskills: required.intersection(skills).cloned().collect(),
            matched_pskills: preferred.intersection(skills).cloned().collect(),
            missing_rskills: required.difference(skills).cloned().collect(),
            resume_exp: candidate.experience(),
            required_exp: job.min_experience(),
        }
    }

    /// Score a candidate record, carrying its identity into the result.
    pub fn score_record(&self, record: &CandidateRecord, job: &JobProfile) -> CandidateScore {
        let score = self.score(&record.profile(), job);
        debug!(
            "Scored {} ({}): {:.2}",
            record.id(),
            record.display_name(),
            score.total_score
        );

        CandidateScore {
            resume_id: record.id().to_string(),
            name: record.display_name().to_string(),
            category: record.category.clone(),
            score,
        }
    }

    /// Score a batch of candidates in parallel on the blocking pool.
    ///
    /// The returned scores are in the same order as `candidates` regardless
    /// of which worker finishes first.
    pub async fn score_batch(
        self: &Arc<Self>,
        candidates: Vec<CandidateRecord>,
        job: &JobProfile,
    ) -> Result<Vec<CandidateScore>> {
        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        let workers = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        let chunk_size = candidates.len().div_ceil(workers).max(1);
        info!(
            "Scoring {} candidates across up to {} workers",
            candidates.len(),
            workers
        );

        let job = Arc::new(job.clone());
        let mut pending: Vec<(usize, CandidateRecord)> =
            candidates.into_iter().enumerate().collect();
        let mut tasks = JoinSet::new();

        while !pending.is_empty() {
            let rest = pending.split_off(chunk_size.min(pending.len()));
            let chunk = std::mem::replace(&mut pending, rest);
            let engine = Arc::clone(self);
            let job = Arc::clone(&job);

            tasks.spawn_blocking(move || {
                chunk
                    .into_iter()
                    .map(|(index, record)| (index, engine.score_record(&record, &job)))
                    .collect::<Vec<_>>()
            });
        }

        let mut scored = Vec::new();
        while let Some(joined) = tasks.join_next().await {
            scored.extend(joined?);
        }

        scored.sort_by_key(|(index, _)| *index);
        Ok(scored.into_iter().map(|(_, score)| score).collect())
    }

    /// Stable descending order by total score.
    pub fn rank<T: Scored>(&self, results: Vec<T>) -> Vec<T> {
        ranking::rank(results)
    }

    /// Keep results at or above `min_score`, or the configured threshold
    /// when none is given.
    pub fn filter<T: Scored>(&self, results: Vec<T>, min_score: Option<f64>) -> Vec<T> {
        ranking::filter(results, min_score.unwrap_or(self.config.min_score))
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(ScoringConfig::DEFAULT)
    }
}
