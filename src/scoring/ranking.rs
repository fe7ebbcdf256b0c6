//! Batch ranking and threshold filtering

use crate::scoring::result::Scored;

/// Order results by descending total score.
///
/// The sort is stable: results with equal totals keep their input order.
pub fn rank<T: Scored>(mut results: Vec<T>) -> Vec<T> {
    results.sort_by(|a, b| b.total_score().total_cmp(&a.total_score()));
    results
}

/// Keep results whose total score is at least `min_score`, in input order.
pub fn filter<T: Scored>(results: Vec<T>, min_score: f64) -> Vec<T> {
    results
        .into_iter()
        .filter(|result| result.total_score() >= min_score)
        .collect()
}
