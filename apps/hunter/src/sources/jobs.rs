//! CSV job posting source.
//!
//! Reads a headered CSV, turns each row into a raw record, and normalizes
//! it through the posting boundary. Rows keep file order; missing or extra
//! columns are tolerated.

use std::path::PathBuf;

use serde_json::Value;
use tracing::info;

use super::JobSource;
use crate::errors::PipelineError;
use crate::matching::{JobPosting, RawRecord};

pub struct CsvJobSource {
    path: PathBuf,
}

impl CsvJobSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl JobSource for CsvJobSource {
    fn load(&self) -> Result<Vec<JobPosting>, PipelineError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)?;
        let headers = reader.headers()?.clone();

        let mut postings = Vec::new();
        for row in reader.records() {
            let row = row?;
            let record: RawRecord = headers
                .iter()
                .zip(row.iter())
                .map(|(header, value)| (header.to_string(), Value::String(value.to_string())))
                .collect();
            postings.push(JobPosting::from_record(&record));
        }

        info!(
            "Loaded {} job postings from {}",
            postings.len(),
            self.path.display()
        );
        Ok(postings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn csv_source(contents: &str) -> (tempfile::NamedTempFile, CsvJobSource) {
        let mut file = tempfile::NamedTempFile::with_suffix(".csv").unwrap();
        write!(file, "{contents}").unwrap();
        let source = CsvJobSource::new(file.path());
        (file, source)
    }

    #[test]
    fn test_loads_rows_in_file_order() {
        let (_file, source) = csv_source(
            "Job Title,Job Description,skills,location,Role\n\
             Data Analyst,Analyze data,\"Python, SQL\",Berlin,Analyst\n\
             ML Engineer,Train models,python pytorch,Remote,Engineer\n",
        );
        let postings = source.load().unwrap();
        assert_eq!(postings.len(), 2);
        assert_eq!(postings[0].title.as_deref(), Some("Data Analyst"));
        assert_eq!(postings[0].skills.as_deref(), Some("Python, SQL"));
        assert_eq!(postings[1].title.as_deref(), Some("ML Engineer"));
        assert_eq!(postings[1].location.as_deref(), Some("Remote"));
    }

    #[test]
    fn test_missing_columns_become_absent_fields() {
        let (_file, source) = csv_source("Job Title\nData Analyst\n");
        let postings = source.load().unwrap();
        assert_eq!(postings[0].title.as_deref(), Some("Data Analyst"));
        assert_eq!(postings[0].skills, None);
        assert_eq!(postings[0].location, None);
    }

    #[test]
    fn test_short_rows_are_tolerated() {
        let (_file, source) = csv_source("Job Title,skills\nEngineer\n");
        let postings = source.load().unwrap();
        assert_eq!(postings[0].title.as_deref(), Some("Engineer"));
        assert_eq!(postings[0].skills, None);
    }

    #[test]
    fn test_unknown_columns_are_ignored() {
        let (_file, source) = csv_source("Job Title,salary\nEngineer,100000\n");
        let postings = source.load().unwrap();
        assert_eq!(postings[0].title.as_deref(), Some("Engineer"));
    }

    #[test]
    fn test_header_only_file_yields_empty_collection() {
        let (_file, source) = csv_source("Job Title,skills\n");
        assert!(source.load().unwrap().is_empty());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let source = CsvJobSource::new("/nonexistent/jobs.csv");
        assert!(source.load().is_err());
    }
}
