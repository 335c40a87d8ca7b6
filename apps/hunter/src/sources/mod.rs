//! Input sources for the pipeline: resume text and job posting records.
//!
//! The traits are the seams the matching core depends on, so tests and
//! future backends (a jobs API, a database) can swap in without touching
//! the scorer.

pub mod jobs;
pub mod resume;

pub use jobs::CsvJobSource;
pub use resume::FileResumeSource;

use crate::errors::PipelineError;
use crate::matching::JobPosting;

/// Yields the resume's UTF-8 text from some backing store.
pub trait ResumeSource {
    fn load(&self) -> Result<String, PipelineError>;
}

/// Yields an ordered sequence of job postings from some backing store.
/// Implementations must preserve the backing store's record order.
pub trait JobSource {
    fn load(&self) -> Result<Vec<JobPosting>, PipelineError>;
}
