//! Input manager for loading candidate and job records

use crate::error::{Result, ResumeScorerError};
use crate::input::file_detector::FileType;
use crate::input::records::{CandidateRecord, JobRecord};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use tokio::fs;

pub struct InputManager {
    strict: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self { strict: false }
    }

    /// In strict mode a malformed line or file aborts the load instead of
    /// being logged and skipped.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Load a single job requirements record from a JSON file.
    pub async fn load_job(&self, path: &Path) -> Result<JobRecord> {
        Self::ensure_exists(path)?;

        let content = fs::read_to_string(path).await?;
        let job: JobRecord = serde_json::from_str(&content).map_err(|e| {
            ResumeScorerError::InvalidInput(format!(
                "Failed to parse job description '{}': {}",
                path.display(),
                e
            ))
        })?;

        info!(
            "Loaded job {} ({} required, {} preferred skills)",
            job.title.as_deref().unwrap_or("<untitled>"),
            job.rskills.len(),
            job.pskills.len()
        );
        Ok(job)
    }

    /// Load candidates from a `.jsonl` dataset, a `.json` file, or a
    /// directory containing such files.
    pub async fn load_candidates(&self, path: &Path) -> Result<Vec<CandidateRecord>> {
        Self::ensure_exists(path)?;

        let metadata = fs::metadata(path).await?;
        let candidates = if metadata.is_dir() {
            self.load_directory(path).await?
        } else if metadata.is_file() {
            self.load_file(path).await?
        } else {
            return Err(ResumeScorerError::InvalidInput(format!(
                "Not a file or directory: {}",
                path.display()
            )));
        };

        info!("Loaded {} candidates from {}", candidates.len(), path.display());
        Ok(candidates)
    }

    async fn load_directory(&self, dir: &Path) -> Result<Vec<CandidateRecord>> {
        let mut entries = fs::read_dir(dir).await?;
        let mut files: Vec<PathBuf> = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            // follows symlinks; dangling links are skipped
            match fs::metadata(&path).await {
                Ok(metadata) if metadata.is_file() => {}
                _ => continue,
            }
            match self.detect_file_type(&path) {
                Ok(FileType::Jsonl) | Ok(FileType::Json) => files.push(path),
                _ => debug!("Skipping non-record file: {}", path.display()),
            }
        }

        // read_dir order is platform dependent
        files.sort();

        let mut candidates = Vec::new();
        for file in files {
            match self.load_file(&file).await {
                Ok(mut loaded) => candidates.append(&mut loaded),
                Err(e) if self.strict => return Err(e),
                Err(e) => warn!("Error loading {}: {}", file.display(), e),
            }
        }

        Ok(candidates)
    }

    async fn load_file(&self, path: &Path) -> Result<Vec<CandidateRecord>> {
        let file_type = self.detect_file_type(path)?;
        if file_type == FileType::Unknown {
            return Err(ResumeScorerError::UnsupportedFormat(format!(
                "Unsupported file type for: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path).await?;
        match file_type {
            FileType::Jsonl => {
                info!("Reading JSONL dataset: {}", path.display());
                self.parse_jsonl(&content, path)
            }
            _ => {
                debug!("Reading candidate file: {}", path.display());
                Self::parse_json(&content, &Self::file_stem(path))
            }
        }
    }

    fn parse_jsonl(&self, content: &str, source: &Path) -> Result<Vec<CandidateRecord>> {
        let mut candidates = Vec::new();

        for (index, line) in content.lines().enumerate() {
            let line_num = index + 1;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match serde_json::from_str::<CandidateRecord>(line) {
                Ok(record) => {
                    candidates.push(record.with_default_id(format!("RESUME_{}", line_num)))
                }
                Err(e) if self.strict => {
                    return Err(ResumeScorerError::InvalidInput(format!(
                        "{}:{}: {}",
                        source.display(),
                        line_num,
                        e
                    )));
                }
                Err(e) => warn!(
                    "Error parsing line {} of {}: {}",
                    line_num,
                    source.display(),
                    e
                ),
            }
        }

        Ok(candidates)
    }

    fn parse_json(content: &str, stem: &str) -> Result<Vec<CandidateRecord>> {
        let value: serde_json::Value = serde_json::from_str(content)?;

        match value {
            serde_json::Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(index, item)| -> Result<CandidateRecord> {
                    let record: CandidateRecord = serde_json::from_value(item)?;
                    Ok(record.with_default_id(format!("{}_{}", stem, index + 1)))
                })
                .collect(),
            other => {
                let record: CandidateRecord = serde_json::from_value(other)?;
                Ok(vec![record.with_default_id(stem)])
            }
        }
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| ResumeScorerError::InvalidInput(
                format!("File has no extension: {}", path.display())
            ))?;

        Ok(FileType::from_extension(extension))
    }

    fn ensure_exists(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(ResumeScorerError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }
        Ok(())
    }

    fn file_stem(path: &Path) -> String {
        path.file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "RESUME".to_string())
    }
}
