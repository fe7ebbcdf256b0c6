//! CLI interface for the resume scorer

use crate::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "resume-scorer")]
#[command(about = "Score and rank resumes against job requirements")]
#[command(long_about = "Rank pre-extracted candidate profiles against a job description using weighted required-skill, preferred-skill, experience and keyword-density scores")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Scoring configuration file path (TOML or JSON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a single candidate against a job description
    Score {
        /// Path to candidate record (JSON)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job requirements (JSON)
        #[arg(short, long)]
        job: PathBuf,

        /// Output format: console, json
        #[arg(short, long, default_value = "console")]
        output: String,
    },

    /// Score, filter and rank a batch of candidates
    Rank {
        /// Candidate dataset: JSONL file, JSON file, or directory of either
        #[arg(long)]
        candidates: PathBuf,

        /// Path to job requirements (JSON)
        #[arg(short, long)]
        job: PathBuf,

        /// Minimum total score to keep (defaults to the configured min_score)
        #[arg(short, long)]
        min_score: Option<f64>,

        /// Keep every candidate regardless of score
        #[arg(long, conflicts_with = "min_score")]
        all: bool,

        /// Only show the best N candidates
        #[arg(short, long)]
        top: Option<usize>,

        /// Include sub-scores and skill breakdowns in console output
        #[arg(short, long)]
        detailed: bool,

        /// Output format: console, json
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Fail on malformed candidate records instead of skipping them
        #[arg(long)]
        strict: bool,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show effective scoring configuration
    Show,

    /// Write the default configuration to a file
    Init {
        /// Destination path
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        _ => Err(format!("Invalid output format: {}. Supported: console, json", format)),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
