//! Integration tests for the resume scorer

use resume_scorer::input::InputManager;
use resume_scorer::{CandidateScore, ScoringConfig, ScoringEngine};
use std::path::Path;
use std::sync::Arc;

const JOB: &str = "tests/fixtures/job_data_scientist.json";
const DATASET: &str = "tests/fixtures/candidates.jsonl";

async fn score_dataset(engine: &Arc<ScoringEngine>) -> Vec<CandidateScore> {
    let manager = InputManager::new();
    let job = manager.load_job(Path::new(JOB)).await.unwrap().profile();
    let candidates = manager.load_candidates(Path::new(DATASET)).await.unwrap();
    engine.score_batch(candidates, &job).await.unwrap()
}

fn ids(scores: &[CandidateScore]) -> Vec<&str> {
    scores.iter().map(|s| s.resume_id.as_str()).collect()
}

#[tokio::test]
async fn test_dataset_scores_in_input_order() {
    let engine = Arc::new(ScoringEngine::default());
    let scored = score_dataset(&engine).await;

    // malformed line 4 is skipped, line 5 has no ResumeID
    assert_eq!(ids(&scored), vec!["R-001", "R-002", "RESUME_5", "R-004", "R-005"]);

    let totals: Vec<f64> = scored.iter().map(|s| s.score.total_score).collect();
    assert_eq!(totals, vec![87.5, 86.17, 29.83, 87.5, 100.0]);

    let cy = &scored[2];
    assert_eq!(cy.name, "Cy Tran");
    assert_eq!(cy.score.experience_score, 80.0);
    assert_eq!(cy.score.keyword_score, 53.33);
    assert_eq!(cy.score.missing_rskills.len(), 2);
}

#[tokio::test]
async fn test_filter_and_rank_dataset() {
    let engine = Arc::new(ScoringEngine::default());
    let scored = score_dataset(&engine).await;

    let ranked = engine.rank(engine.filter(scored, Some(50.0)));

    // R-001 and R-004 tie and keep their input order
    assert_eq!(ids(&ranked), vec!["R-005", "R-001", "R-004", "R-002"]);
    assert!(ranked.iter().all(|s| s.score.total_score >= 50.0));
}

#[tokio::test]
async fn test_default_threshold_keeps_everyone() {
    let engine = Arc::new(ScoringEngine::default());
    let scored = score_dataset(&engine).await;

    assert_eq!(engine.filter(scored, None).len(), 5);
}

#[tokio::test]
async fn test_config_file_drives_scoring() {
    let engine = Arc::new(ScoringEngine::from_config_path(Some(Path::new(
        "tests/fixtures/scoring.toml",
    ))));
    assert_eq!(engine.config().min_score, 50.0);
    assert_eq!(engine.config().exp_tolerance, 1);
    assert_eq!(engine.config().weights.preferred_skills, 0.25);

    let scored = score_dataset(&engine).await;
    let cy = scored.iter().find(|s| s.resume_id == "RESUME_5").unwrap();
    // two years short with a one year tolerance falls outside the band
    assert_eq!(cy.score.experience_score, 0.0);

    let ranked = engine.rank(engine.filter(scored, None));
    assert_eq!(ids(&ranked), vec!["R-005", "R-001", "R-004", "R-002"]);
    assert_eq!(ranked[0].score.total_score, 90.0);
    assert_eq!(ranked[3].score.total_score, 76.17);
}

#[test]
fn test_broken_config_falls_back_to_defaults() {
    let path = Path::new("tests/fixtures/broken_config.json");
    assert!(ScoringConfig::load(path).is_err());

    let engine = ScoringEngine::from_config_path(Some(path));
    assert_eq!(engine.config(), &ScoringConfig::DEFAULT);
}

#[tokio::test]
async fn test_directory_of_candidate_files() {
    let manager = InputManager::new();
    let job = manager.load_job(Path::new(JOB)).await.unwrap().profile();
    let candidates = manager
        .load_candidates(Path::new("tests/fixtures/candidates_dir"))
        .await
        .unwrap();

    let names: Vec<_> = candidates.iter().map(|c| c.display_name()).collect();
    assert_eq!(names, vec!["Alice", "Bob"]);
    assert_eq!(candidates[0].id(), "alice");

    let engine = Arc::new(ScoringEngine::default());
    let ranked = engine.rank(engine.score_batch(candidates, &job).await.unwrap());
    assert_eq!(ids(&ranked), vec!["alice", "B-1"]);
    assert_eq!(ranked[0].score.total_score, 68.83);
    assert_eq!(ranked[1].score.total_score, 15.0);
}

#[tokio::test]
async fn test_unsupported_candidate_file() {
    let manager = InputManager::new();
    let result = manager
        .load_candidates(Path::new("tests/fixtures/candidates_dir/notes.txt"))
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_nonexistent_file() {
    let manager = InputManager::new();
    let result = manager
        .load_candidates(Path::new("tests/fixtures/nonexistent.jsonl"))
        .await;
    assert!(result.is_err());
}
