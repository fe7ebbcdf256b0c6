//! Sub-score calculators. Each returns a fraction in [0, 1].

use std::collections::HashSet;

/// Floor for any shortfall that stays within the tolerance band.
const TOLERANCE_FLOOR: f64 = 0.7;
/// Largest penalty a within-tolerance gap can approach.
const TOLERANCE_PENALTY: f64 = 0.3;
/// Cap on the repeated-mention bonus in keyword scoring.
const FREQUENCY_BONUS_CAP: f64 = 0.2;

/// Fraction of the job's skills the candidate has.
///
/// An empty job list earns full credit. Skills the candidate has beyond the
/// job's list have no effect. Comparison is case-insensitive.
pub fn skill_match<C, J>(candidate_skills: C, job_skills: J) -> f64
where
    C: IntoIterator,
    C::Item: AsRef<str>,
    J: IntoIterator,
    J::Item: AsRef<str>,
{
    let job = lowercase_set(job_skills);
    if job.is_empty() {
        return 1.0;
    }

    let candidate = lowercase_set(candidate_skills);
    let matched = job.intersection(&candidate).count();
    matched as f64 / job.len() as f64
}

/// Experience adequacy with a tolerance band of `tolerance` years.
///
/// Meeting the requirement (or having none) earns 1.0. A shortfall of at most
/// `tolerance` years decays linearly but never below 0.7. Larger shortfalls
/// fall back to `candidate / required * 0.7`.
pub fn experience_match(candidate_years: u32, required_years: u32, tolerance: u32) -> f64 {
    if required_years == 0 || candidate_years >= required_years {
        return 1.0;
    }

    let gap = required_years - candidate_years;
    if gap <= tolerance {
        let score = 1.0 - (gap as f64 / (tolerance as f64 + 1.0)) * TOLERANCE_PENALTY;
        return score.max(TOLERANCE_FLOOR);
    }

    let ratio = candidate_years as f64 / required_years as f64;
    (ratio * TOLERANCE_FLOOR).max(0.0)
}

/// Keyword coverage plus a capped bonus for repeated relevant mentions.
///
/// Coverage is the share of distinct job keywords present in the candidate's
/// keywords. The bonus is the share of the candidate's keyword sequence
/// (duplicates included) that hits a job keyword, capped at 0.2. The sum is
/// capped at 1.0.
pub fn keyword_match<C, J>(candidate_keywords: &[C], job_keywords: &[J]) -> f64
where
    C: AsRef<str>,
    J: AsRef<str>,
{
    let job = lowercase_set(job_keywords);
    if job.is_empty() {
        return 1.0;
    }

    let candidate: Vec<String> = candidate_keywords
        .iter()
        .map(|kw| kw.as_ref().to_lowercase())
        .collect();
    let candidate_set: HashSet<&str> = candidate.iter().map(String::as_str).collect();

    let matched = job
        .iter()
        .filter(|kw| candidate_set.contains(kw.as_str()))
        .count();
    let matched_ratio = matched as f64 / job.len() as f64;

    let frequency_bonus = if candidate.is_empty() {
        0.0
    } else {
        let relevant = candidate.iter().filter(|kw| job.contains(*kw)).count();
        (relevant as f64 / candidate.len() as f64).min(FREQUENCY_BONUS_CAP)
    };

    (matched_ratio + frequency_bonus).min(1.0)
}

fn lowercase_set<I>(items: I) -> HashSet<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    items
        .into_iter()
        .map(|item| item.as_ref().to_lowercase())
        .collect()
}
