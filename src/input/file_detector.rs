//! File type detection

#[derive(Debug, Clone, PartialEq)]
pub enum FileType {
    /// One JSON record per line
    Jsonl,
    /// A single JSON record or an array of records
    Json,
    Unknown,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "jsonl" | "ndjson" => FileType::Jsonl,
            "json" => FileType::Json,
            _ => FileType::Unknown,
        }
    }
}
