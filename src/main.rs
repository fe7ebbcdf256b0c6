//! Resume scorer: rank candidates against job requirements

use clap::Parser;
use log::{error, info};
use resume_scorer::cli::{self, Cli, Commands, ConfigAction};
use resume_scorer::input::InputManager;
use resume_scorer::output::formatter::save_report_to_file;
use resume_scorer::output::ReportGenerator;
use resume_scorer::{Result, ResumeScorerError, ScoringConfig, ScoringEngine};
use std::process;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level)
    ).init();

    // Config problems are logged and fall back to defaults, never fatal
    let engine = Arc::new(ScoringEngine::from_config_path(cli.config.as_deref()));

    // Execute command
    if let Err(e) = run_command(cli.command, engine).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, engine: Arc<ScoringEngine>) -> Result<()> {
    match command {
        Commands::Score { resume, job, output } => {
            cli::validate_file_extension(&resume, &["json", "jsonl", "ndjson"])
                .map_err(|e| ResumeScorerError::InvalidInput(format!("Resume file: {}", e)))?;
            cli::validate_file_extension(&job, &["json"])
                .map_err(|e| ResumeScorerError::InvalidInput(format!("Job description file: {}", e)))?;

            let output_format = cli::parse_output_format(&output)
                .map_err(ResumeScorerError::InvalidInput)?;

            let manager = InputManager::new();
            let job_profile = manager.load_job(&job).await?.profile();
            let record = manager
                .load_candidates(&resume)
                .await?
                .into_iter()
                .next()
                .ok_or_else(|| ResumeScorerError::InvalidInput(format!(
                    "No candidate record found in {}",
                    resume.display()
                )))?;

            let score = engine.score_record(&record, &job_profile);
            let report = ReportGenerator::with_options(true, true, true)
                .generate_report(&[score], output_format)?;
            println!("{}", report);
        }

        Commands::Rank {
            candidates,
            job,
            min_score,
            all,
            top,
            detailed,
            output,
            save,
            strict,
        } => {
            cli::validate_file_extension(&job, &["json"])
                .map_err(|e| ResumeScorerError::InvalidInput(format!("Job description file: {}", e)))?;

            let output_format = cli::parse_output_format(&output)
                .map_err(ResumeScorerError::InvalidInput)?;

            let manager = InputManager::new().with_strict(strict);
            let job_profile = manager.load_job(&job).await?.profile();
            let records = manager.load_candidates(&candidates).await?;

            let scored = engine.score_batch(records, &job_profile).await?;
            let scored_count = scored.len();

            let kept = if all {
                scored
            } else {
                engine.filter(scored, min_score)
            };
            let mut ranked = engine.rank(kept);
            info!("{}", ranking_summary(ranked.len(), scored_count, all));

            if let Some(limit) = top {
                ranked.truncate(limit);
            }

            let generator = ReportGenerator::with_options(save.is_none(), detailed, true);
            let report = generator.generate_report(&ranked, output_format)?;

            match save {
                Some(path) => {
                    save_report_to_file(&report, &path)?;
                    println!("Saved {} ranked candidates to {}", ranked.len(), path.display());
                }
                None => print!("{}", report),
            }
        }

        Commands::Config { action } => match action.unwrap_or(ConfigAction::Show) {
            ConfigAction::Show => {
                println!("{}", engine.config().to_toml_string()?);
            }
            ConfigAction::Init { path, force } => {
                if path.exists() && !force {
                    return Err(ResumeScorerError::InvalidInput(format!(
                        "{} already exists; pass --force to overwrite",
                        path.display()
                    )));
                }
                ScoringConfig::DEFAULT.save(&path)?;
                println!("Wrote default scoring configuration to {}", path.display());
            }
        },
    }

    Ok(())
}

fn ranking_summary(kept: usize, scored: usize, all: bool) -> String {
    if all {
        format!("Ranked all {} candidates (threshold disabled)", scored)
    } else {
        format!("{} of {} candidates at or above threshold", kept, scored)
    }
}
