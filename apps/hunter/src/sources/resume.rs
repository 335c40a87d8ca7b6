//! Filesystem resume source. Plain text files are read as UTF-8; PDF files
//! go through `pdf-extract`.

use std::fs;
use std::path::PathBuf;

use tracing::info;

use super::ResumeSource;
use crate::errors::PipelineError;

pub struct FileResumeSource {
    path: PathBuf,
}

impl FileResumeSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn is_pdf(&self) -> bool {
        self.path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
    }
}

impl ResumeSource for FileResumeSource {
    fn load(&self) -> Result<String, PipelineError> {
        let text = if self.is_pdf() {
            pdf_extract::extract_text(&self.path).map_err(|e| {
                PipelineError::Extraction(format!(
                    "failed to extract text from {}: {e}",
                    self.path.display()
                ))
            })?
        } else {
            fs::read_to_string(&self.path)?
        };
        info!("Loaded resume from {}", self.path.display());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_loads_plain_text_resume() {
        let mut file = tempfile::NamedTempFile::with_suffix(".txt").unwrap();
        write!(file, "python machine learning sql").unwrap();

        let source = FileResumeSource::new(file.path());
        assert_eq!(source.load().unwrap(), "python machine learning sql");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let source = FileResumeSource::new("/nonexistent/resume.txt");
        assert!(source.load().is_err());
    }

    #[test]
    fn test_pdf_detection_is_case_insensitive() {
        assert!(FileResumeSource::new("resume.PDF").is_pdf());
        assert!(FileResumeSource::new("resume.pdf").is_pdf());
        assert!(!FileResumeSource::new("resume.txt").is_pdf());
        assert!(!FileResumeSource::new("resume").is_pdf());
    }
}
