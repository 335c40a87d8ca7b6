//! Resume-to-job relevance matching.
//!
//! `scoring` holds the pure scorer and ranker; `posting` holds the record
//! model and the normalization boundary; `find_matching_jobs` is the
//! composition point over injected sources.

pub mod posting;
pub mod scoring;

pub use posting::{JobPosting, RawRecord};

use tracing::{error, info, warn};

use crate::sources::{JobSource, ResumeSource};

/// Loads the resume and the postings, then returns the top matches.
///
/// Upstream failures never propagate past this function: an unreadable
/// resume, an empty resume, or an empty posting collection each degrade to
/// an empty result with the condition logged. Callers that need to
/// distinguish hard failures should use the sources and `scoring::rank`
/// directly.
pub fn find_matching_jobs(
    resume_source: &dyn ResumeSource,
    job_source: &dyn JobSource,
    max_results: usize,
) -> Vec<JobPosting> {
    let resume_text = match resume_source.load() {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read resume: {e}");
            return Vec::new();
        }
    };
    if resume_text.trim().is_empty() {
        warn!("Resume text is empty, nothing to match against");
        return Vec::new();
    }

    let postings = match job_source.load() {
        Ok(postings) => postings,
        Err(e) => {
            error!("Failed to load job postings: {e}");
            return Vec::new();
        }
    };
    if postings.is_empty() {
        warn!("No job postings loaded");
        return Vec::new();
    }

    info!("Ranking {} postings against the resume", postings.len());
    scoring::rank(postings, &resume_text, max_results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PipelineError;

    struct FixedResume(Result<String, ()>);

    impl ResumeSource for FixedResume {
        fn load(&self) -> Result<String, PipelineError> {
            self.0
                .clone()
                .map_err(|_| PipelineError::Extraction("unreadable".to_string()))
        }
    }

    struct FixedJobs(Vec<JobPosting>);

    impl JobSource for FixedJobs {
        fn load(&self) -> Result<Vec<JobPosting>, PipelineError> {
            Ok(self.0.clone())
        }
    }

    fn titled(title: &str) -> JobPosting {
        JobPosting {
            title: Some(title.to_string()),
            ..JobPosting::default()
        }
    }

    #[test]
    fn test_unreadable_resume_yields_empty_result() {
        let matches = find_matching_jobs(
            &FixedResume(Err(())),
            &FixedJobs(vec![titled("rust engineer")]),
            10,
        );
        assert!(matches.is_empty());
    }

    #[test]
    fn test_empty_resume_yields_empty_result() {
        let matches = find_matching_jobs(
            &FixedResume(Ok("  \n".to_string())),
            &FixedJobs(vec![titled("rust engineer")]),
            10,
        );
        assert!(matches.is_empty());
    }

    #[test]
    fn test_no_postings_yields_empty_result() {
        let matches = find_matching_jobs(
            &FixedResume(Ok("rust tokio".to_string())),
            &FixedJobs(Vec::new()),
            10,
        );
        assert!(matches.is_empty());
    }

    #[test]
    fn test_happy_path_ranks_postings() {
        let matches = find_matching_jobs(
            &FixedResume(Ok("rust tokio async".to_string())),
            &FixedJobs(vec![titled("java developer"), titled("rust tokio engineer")]),
            1,
        );
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].title.as_deref(), Some("rust tokio engineer"));
        assert_eq!(matches[0].match_score, 2);
    }
}
