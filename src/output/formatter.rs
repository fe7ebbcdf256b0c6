//! Output formatters for ranked score lists

use crate::error::{Result, ResumeScorerError};
use crate::scoring::result::CandidateScore;
use colored::{Color, Colorize};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
}

/// Trait for formatting a list of candidate scores
pub trait OutputFormatter {
    fn format_scores(&self, scores: &[CandidateScore]) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with optional colours and per-skill detail
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for piping results into other tools
pub struct JsonFormatter {
    pretty: bool,
}

/// Picks the formatter for a requested output format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_score_badge(&self, score: f64) -> String {
        let (badge, color) = match score {
            s if s >= 90.0 => ("EXCELLENT", Color::Green),
            s if s >= 80.0 => ("VERY GOOD", Color::BrightGreen),
            s if s >= 70.0 => ("GOOD", Color::Yellow),
            s if s >= 60.0 => ("FAIR", Color::BrightYellow),
            s if s >= 50.0 => ("BELOW AVG", Color::Red),
            _ => ("POOR", Color::BrightRed),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_skill_list(skills: &BTreeSet<String>) -> String {
        if skills.is_empty() {
            "-".to_string()
        } else {
            skills.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_scores(&self, scores: &[CandidateScore]) -> Result<String> {
        if scores.is_empty() {
            return Ok(self.colorize("No candidates met the score threshold.\n", Color::Yellow));
        }

        let mut output = String::new();
        let heading = format!("Ranked candidates ({})", scores.len());
        if self.use_colors {
            output.push_str(&format!("{}\n\n", heading.color(Color::Blue).bold()));
        } else {
            output.push_str(&format!("{}\n\n", heading));
        }

        for (rank, candidate) in scores.iter().enumerate() {
            let score = &candidate.score;
            output.push_str(&format!(
                "{:>3}. {} ({}) {:>7.2}% {}\n",
                rank + 1,
                candidate.name,
                self.colorize(&candidate.resume_id, Color::BrightBlack),
                score.total_score,
                self.format_score_badge(score.total_score),
            ));

            if self.detailed {
                output.push_str(&format!(
                    "     required {:.2}% | preferred {:.2}% | experience {:.2}% ({}/{} yrs) | keywords {:.2}%\n",
                    score.rskillscore,
                    score.pskillscore,
                    score.experience_score,
                    score.resume_exp,
                    score.required_exp,
                    score.keyword_score,
                ));
                output.push_str(&format!(
                    "     matched required: {}\n",
                    self.colorize(&Self::format_skill_list(&score.matched_rskills), Color::Green)
                ));
                output.push_str(&format!(
                    "     matched preferred: {}\n",
                    self.colorize(&Self::format_skill_list(&score.matched_pskills), Color::Cyan)
                ));
                output.push_str(&format!(
                    "     missing required: {}\n",
                    self.colorize(&Self::format_skill_list(&score.missing_rskills), Color::Red)
                ));
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_scores(&self, scores: &[CandidateScore]) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(scores)?)
        } else {
            Ok(serde_json::to_string(scores)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, true)
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
        }
    }

    pub fn generate_report(&self, scores: &[CandidateScore], format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_scores(scores),
            OutputFormat::Json => self.json_formatter.format_scores(scores),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(file_path, content).map_err(|e| {
        ResumeScorerError::OutputFormatting(format!(
            "Failed to write report to '{}': {}",
            file_path.display(),
            e
        ))
    })
}
