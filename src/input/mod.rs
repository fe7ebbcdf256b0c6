//! Input processing module
//! Loads pre-extracted candidate and job records from disk

pub mod file_detector;
pub mod records;
pub mod manager;

pub use manager::InputManager;
pub use records::{CandidateRecord, JobRecord};
