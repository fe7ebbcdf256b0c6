//! Configuration management for the resume scorer

use crate::error::{Result, ResumeScorerError};
use log::{debug, info, warn};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::path::Path;

/// Scoring configuration. Fixed for the lifetime of one engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Default threshold (0-100 scale) used by `filter` when none is given.
    pub min_score: f64,
    /// Years of shortfall below the requirement that still earn at least 0.7.
    #[serde(deserialize_with = "whole_years")]
    pub exp_tolerance: u32,
    pub weights: ScoringWeights,
}

/// Blend weights for the four sub-scores. Not normalised.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    #[serde(alias = "rskills")]
    pub required_skills: f64,
    #[serde(alias = "pskills")]
    pub preferred_skills: f64,
    pub experience: f64,
    pub keyword_density: f64,
}

impl ScoringConfig {
    /// Built-in configuration used whenever no usable config source exists.
    pub const DEFAULT: ScoringConfig = ScoringConfig {
        min_score: 0.0,
        exp_tolerance: 2,
        weights: ScoringWeights {
            required_skills: 0.5,
            preferred_skills: 0.25,
            experience: 0.15,
            keyword_density: 0.1,
        },
    };

    /// Read and validate a configuration file.
    ///
    /// `.toml` files are parsed as TOML, anything else as JSON. Keys that are
    /// absent keep their default value.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("toml"))
            .unwrap_or(false);

        let config: ScoringConfig = if is_toml {
            toml::from_str(&content)?
        } else {
            serde_json::from_str(&content).map_err(|e| {
                ResumeScorerError::Configuration(format!("Failed to parse config: {}", e))
            })?
        };

        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if one is given, falling back to [`ScoringConfig::DEFAULT`].
    ///
    /// Never fails: a read, parse or validation error is logged and the
    /// defaults are returned instead.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            debug!("No scoring configuration supplied, using defaults");
            return Self::DEFAULT;
        };

        match Self::load(path) {
            Ok(config) => {
                info!("Loaded scoring configuration from {}", path.display());
                config
            }
            Err(e) => {
                warn!(
                    "Error loading config {}: {}. Falling back to defaults",
                    path.display(),
                    e
                );
                Self::DEFAULT
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        let weights = [
            ("required_skills", self.weights.required_skills),
            ("preferred_skills", self.weights.preferred_skills),
            ("experience", self.weights.experience),
            ("keyword_density", self.weights.keyword_density),
        ];

        for (name, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(ResumeScorerError::Configuration(format!(
                    "Weight '{}' must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        if !self.min_score.is_finite() {
            return Err(ResumeScorerError::Configuration(format!(
                "min_score must be a finite number, got {}",
                self.min_score
            )));
        }

        Ok(())
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| {
            ResumeScorerError::Configuration(format!("Failed to serialize config: {}", e))
        })
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }
}

/// Accept `2` as well as `2.0`; fractional or negative values are rejected.
fn whole_years<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Ok(value as u32)
    } else {
        Err(de::Error::custom(format!(
            "exp_tolerance must be a non-negative whole number of years, got {}",
            value
        )))
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        ScoringConfig::DEFAULT.weights
    }
}
