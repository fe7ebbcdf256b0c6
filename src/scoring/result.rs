//! Score records produced by the engine

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Outcome of scoring one candidate against one job.
///
/// All scores are percentages in [0, 100] rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub total_score: f64,
    pub rskillscore: f64,
    pub pskillscore: f64,
    pub experience_score: f64,
    pub keyword_score: f64,
    pub matched_rskills: BTreeSet<String>,
    pub matched_pskills: BTreeSet<String>,
    pub missing_rskills: BTreeSet<String>,
    pub resume_exp: u32,
    pub required_exp: u32,
}

/// A score tagged with the identity of the candidate it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateScore {
    pub resume_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(flatten)]
    pub score: ScoreResult,
}

/// Anything that can be ranked or filtered by total score.
pub trait Scored {
    fn total_score(&self) -> f64;
}

impl Scored for ScoreResult {
    fn total_score(&self) -> f64 {
        self.total_score
    }
}

impl Scored for CandidateScore {
    fn total_score(&self) -> f64 {
        self.score.total_score
    }
}

/// Scale a [0, 1] fraction to a percentage with two-decimal precision.
///
/// Rounding is decided on the exact value of the percentage, with exact ties
/// going to the even hundredth (3.125 becomes 3.12, 9.375 becomes 9.38).
pub fn to_percentage(fraction: f64) -> f64 {
    let percent = fraction * 100.0;
    let scaled = percent * 100.0;
    let floor = scaled.floor();

    if scaled - floor != 0.5 {
        return scaled.round() / 100.0;
    }

    // `scaled` may itself be rounded; the fused residual says which side of
    // the tie the exact product lies on
    let residual = percent.mul_add(100.0, -scaled);
    let rounded = if residual > 0.0 {
        floor + 1.0
    } else if residual < 0.0 || floor % 2.0 == 0.0 {
        floor
    } else {
        floor + 1.0
    };
    rounded / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_percentage_rounding() {
        assert_eq!(to_percentage(1.0), 100.0);
        assert_eq!(to_percentage(0.0), 0.0);
        assert_eq!(to_percentage(0.861666), 86.17);
        assert_eq!(to_percentage(2.0 / 3.0), 66.67);
        assert_eq!(to_percentage(0.28), 28.0);
    }

    #[test]
    fn test_to_percentage_ties_go_to_even() {
        assert_eq!(to_percentage(1.0 / 32.0), 3.12);
        assert_eq!(to_percentage(5.0 / 32.0), 15.62);
        assert_eq!(to_percentage(3.0 / 32.0), 9.38);
        assert_eq!(to_percentage(7.0 / 32.0), 21.88);
        assert_eq!(to_percentage(0.125), 12.5);
    }

    #[test]
    fn test_candidate_score_serializes_flat() {
        let score = CandidateScore {
            resume_id: "R1".to_string(),
            name: "Ada".to_string(),
            category: None,
            score: ScoreResult {
                total_score: 50.0,
                rskillscore: 100.0,
                pskillscore: 0.0,
                experience_score: 100.0,
                keyword_score: 0.0,
                matched_rskills: ["rust".to_string()].into_iter().collect(),
                matched_pskills: BTreeSet::new(),
                missing_rskills: BTreeSet::new(),
                resume_exp: 3,
                required_exp: 2,
            },
        };

        let value = serde_json::to_value(&score).unwrap();
        assert_eq!(value["resume_id"], "R1");
        assert_eq!(value["total_score"], 50.0);
        assert_eq!(value["matched_rskills"][0], "rust");
        assert!(value.get("category").is_none());
        assert!(value.get("score").is_none());
    }
}
