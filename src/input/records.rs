//! Structured candidate and job records as they arrive from upstream extractors

use crate::scoring::profile::{CandidateProfile, JobProfile};
use serde::{Deserialize, Deserializer, Serialize};

/// One candidate row: dataset identity fields plus pre-extracted attributes.
///
/// Every field is optional on the wire. Missing or `null` collections become
/// empty and missing experience becomes zero. Identity fields accept numbers
/// as well as strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    #[serde(rename = "ResumeID", alias = "resume_id", default, deserialize_with = "scalar_as_string")]
    pub resume_id: Option<String>,

    #[serde(rename = "Name", alias = "name", default, deserialize_with = "scalar_as_string")]
    pub name: Option<String>,

    #[serde(
        rename = "Email",
        alias = "email",
        default,
        deserialize_with = "scalar_as_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub email: Option<String>,

    #[serde(
        rename = "Phone",
        alias = "phone",
        default,
        deserialize_with = "scalar_as_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub phone: Option<String>,

    #[serde(
        rename = "Category",
        alias = "category",
        default,
        deserialize_with = "scalar_as_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub experience: u32,

    #[serde(default, deserialize_with = "null_as_default")]
    pub keywords: Vec<String>,
}

/// Job requirements keyed the way upstream job parsers emit them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(alias = "required_skills", default, deserialize_with = "null_as_default")]
    pub rskills: Vec<String>,

    #[serde(alias = "preferred_skills", default, deserialize_with = "null_as_default")]
    pub pskills: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub keywords: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub min_experience: u32,
}

impl CandidateRecord {
    pub fn profile(&self) -> CandidateProfile {
        CandidateProfile::new(&self.skills, self.experience, self.keywords.iter().cloned())
    }

    /// Fill in an identifier when the record did not carry one. An explicit
    /// empty identifier is kept.
    pub fn with_default_id(mut self, id: impl Into<String>) -> Self {
        if self.resume_id.is_none() {
            self.resume_id = Some(id.into());
        }
        self
    }

    pub fn id(&self) -> &str {
        self.resume_id.as_deref().unwrap_or_default()
    }

    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or("Unknown")
    }
}

impl JobRecord {
    pub fn profile(&self) -> JobProfile {
        JobProfile::new(&self.rskills, &self.pskills, &self.keywords, self.min_experience)
    }
}

/// Strings pass through, `null` is absent, any other value is stringified.
fn scalar_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_record_dataset_keys() {
        let record: CandidateRecord = serde_json::from_str(
            r#"{"ResumeID": "R-7", "Name": "Grace", "Category": "Data",
                "skills": ["Python"], "experience": 4, "keywords": ["python", "sql"]}"#,
        )
        .unwrap();

        assert_eq!(record.id(), "R-7");
        assert_eq!(record.display_name(), "Grace");
        assert_eq!(record.category.as_deref(), Some("Data"));

        let profile = record.profile();
        assert!(profile.skills().contains("python"));
        assert_eq!(profile.experience(), 4);
        assert_eq!(profile.keywords().len(), 2);
    }

    #[test]
    fn test_candidate_record_missing_fields() {
        let record: CandidateRecord =
            serde_json::from_str(r#"{"skills": null, "experience": null}"#).unwrap();

        assert_eq!(record.id(), "");
        assert_eq!(record.display_name(), "Unknown");
        assert!(record.skills.is_empty());
        assert_eq!(record.experience, 0);
        assert!(record.keywords.is_empty());
    }

    #[test]
    fn test_with_default_id_keeps_existing() {
        let record = CandidateRecord {
            resume_id: Some("KEEP".to_string()),
            ..Default::default()
        };
        assert_eq!(record.with_default_id("RESUME_1").id(), "KEEP");
        assert_eq!(CandidateRecord::default().with_default_id("RESUME_1").id(), "RESUME_1");

        let blank = CandidateRecord {
            resume_id: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(blank.with_default_id("RESUME_1").id(), "");
    }

    #[test]
    fn test_numeric_identity_fields_are_stringified() {
        let record: CandidateRecord = serde_json::from_str(
            r#"{"ResumeID": 1001, "Name": "Ann", "Phone": 5550100, "Category": null}"#,
        )
        .unwrap();

        assert_eq!(record.id(), "1001");
        assert_eq!(record.display_name(), "Ann");
        assert_eq!(record.phone.as_deref(), Some("5550100"));
        assert!(record.category.is_none());
    }

    #[test]
    fn test_job_record_keys_and_aliases() {
        let job: JobRecord = serde_json::from_str(
            r#"{"rskills": ["Python", "Machine Learning"], "preferred_skills": ["SQL"],
                "min_experience": 2}"#,
        )
        .unwrap();

        let profile = job.profile();
        assert!(profile.required_skills().contains("machine learning"));
        assert!(profile.preferred_skills().contains("sql"));
        assert!(profile.keywords().is_empty());
        assert_eq!(profile.min_experience(), 2);
    }

    #[test]
    fn test_negative_experience_is_rejected() {
        assert!(serde_json::from_str::<CandidateRecord>(r#"{"experience": -3}"#).is_err());
    }
}
