//! Normalised candidate and job profiles consumed by the engine

use std::collections::BTreeSet;

/// What a candidate brings: skills, years of experience and extracted keywords.
///
/// Skills are lower-cased on construction. Keywords keep their original order
/// and duplicates since repetition feeds the keyword-density bonus.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateProfile {
    skills: BTreeSet<String>,
    experience: u32,
    keywords: Vec<String>,
}

/// What a job asks for. Skill sets and keywords are lower-cased on construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobProfile {
    required_skills: BTreeSet<String>,
    preferred_skills: BTreeSet<String>,
    keywords: Vec<String>,
    min_experience: u32,
}

impl CandidateProfile {
    pub fn new<S, K>(skills: S, experience: u32, keywords: K) -> Self
    where
        S: IntoIterator,
        S::Item: AsRef<str>,
        K: IntoIterator,
        K::Item: Into<String>,
    {
        Self {
            skills: lowercase_set(skills),
            experience,
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    pub fn skills(&self) -> &BTreeSet<String> {
        &self.skills
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

impl JobProfile {
    pub fn new<R, P, K>(required: R, preferred: P, keywords: K, min_experience: u32) -> Self
    where
        R: IntoIterator,
        R::Item: AsRef<str>,
        P: IntoIterator,
        P::Item: AsRef<str>,
        K: IntoIterator,
        K::Item: AsRef<str>,
    {
        Self {
            required_skills: lowercase_set(required),
            preferred_skills: lowercase_set(preferred),
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
            min_experience,
        }
    }

    pub fn required_skills(&self) -> &BTreeSet<String> {
        &self.required_skills
    }

    pub fn preferred_skills(&self) -> &BTreeSet<String> {
        &self.preferred_skills
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn min_experience(&self) -> u32 {
        self.min_experience
    }
}

fn lowercase_set<I>(items: I) -> BTreeSet<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    items
        .into_iter()
        .map(|item| item.as_ref().to_lowercase())
        .collect()
}
