//! Job posting records and the raw-record normalization boundary.
//!
//! Job sources (CSV rows, scraped listings, JSON dumps) produce records of
//! arbitrary shape. `JobPosting::from_record` is the single place that
//! tolerates that: it maps known header aliases onto a fixed set of optional
//! text fields and coerces non-string values to text. Past this boundary the
//! rest of the crate works with plain typed data.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw record shape produced by job sources: field name to value.
pub type RawRecord = BTreeMap<String, Value>;

/// One job listing. All text fields are optional; a missing field scores as
/// empty text, never as an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub role: Option<String>,
    pub skills: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    /// Keyword overlap against the resume. Written by `scoring::rank`,
    /// zero until then.
    #[serde(default)]
    pub match_score: u32,
}

impl JobPosting {
    /// Normalizes an arbitrary record into a posting.
    ///
    /// Header matching is case-insensitive and tolerant of the common
    /// spellings seen in job CSVs (`Job Title`, `job_title`, `title`, ...).
    /// Unknown fields are dropped. Numeric and boolean values become their
    /// textual representation; null and blank values become `None`.
    pub fn from_record(record: &RawRecord) -> Self {
        let mut posting = JobPosting::default();

        for (name, value) in record {
            let Some(text) = coerce_text(value) else {
                continue;
            };
            match normalize_header(name).as_str() {
                "title" | "job title" => posting.title = Some(text),
                "company" | "company name" => posting.company = Some(text),
                "location" => posting.location = Some(text),
                "role" => posting.role = Some(text),
                "skills" | "key skills" => posting.skills = Some(text),
                "description" | "job description" | "snippet" => {
                    posting.description = Some(text)
                }
                "url" | "link" | "job link" => posting.url = Some(text),
                _ => {}
            }
        }

        posting
    }

    /// The fixed field set read by the relevance scorer, in scoring order.
    pub fn checked_fields(&self) -> [Option<&str>; 5] {
        [
            self.skills.as_deref(),
            self.title.as_deref(),
            self.description.as_deref(),
            self.location.as_deref(),
            self.role.as_deref(),
        ]
    }
}

fn normalize_header(name: &str) -> String {
    name.trim().to_lowercase().replace(['_', '-'], " ")
}

/// Coerces a record value to text. Non-string scalars become their decimal or
/// boolean form; null and whitespace-only strings are treated as absent.
fn coerce_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::Null => return None,
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    };
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(pairs: &[(&str, Value)]) -> RawRecord {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_csv_header_aliases_map_to_fields() {
        let posting = JobPosting::from_record(&record(&[
            ("Job Title", json!("Data Analyst")),
            ("Job Description", json!("Analyze data")),
            ("skills", json!("Python, SQL")),
            ("location", json!("Berlin")),
            ("Role", json!("Analyst")),
            ("Company", json!("Acme")),
        ]));
        assert_eq!(posting.title.as_deref(), Some("Data Analyst"));
        assert_eq!(posting.description.as_deref(), Some("Analyze data"));
        assert_eq!(posting.skills.as_deref(), Some("Python, SQL"));
        assert_eq!(posting.location.as_deref(), Some("Berlin"));
        assert_eq!(posting.role.as_deref(), Some("Analyst"));
        assert_eq!(posting.company.as_deref(), Some("Acme"));
    }

    #[test]
    fn test_snippet_maps_to_description() {
        let posting =
            JobPosting::from_record(&record(&[("snippet", json!("Short job summary"))]));
        assert_eq!(posting.description.as_deref(), Some("Short job summary"));
    }

    #[test]
    fn test_underscored_headers_match() {
        let posting = JobPosting::from_record(&record(&[("job_title", json!("Engineer"))]));
        assert_eq!(posting.title.as_deref(), Some("Engineer"));
    }

    #[test]
    fn test_numeric_value_coerced_to_text() {
        let posting = JobPosting::from_record(&record(&[("location", json!(94103))]));
        assert_eq!(posting.location.as_deref(), Some("94103"));
    }

    #[test]
    fn test_null_and_blank_values_absent() {
        let posting = JobPosting::from_record(&record(&[
            ("skills", json!(null)),
            ("location", json!("   ")),
        ]));
        assert_eq!(posting.skills, None);
        assert_eq!(posting.location, None);
    }

    #[test]
    fn test_unknown_fields_dropped() {
        let posting = JobPosting::from_record(&record(&[("salary_band", json!("E5"))]));
        assert_eq!(posting, JobPosting::default());
    }

    #[test]
    fn test_match_score_defaults_to_zero() {
        let posting = JobPosting::from_record(&record(&[("title", json!("Engineer"))]));
        assert_eq!(posting.match_score, 0);
    }

    #[test]
    fn test_checked_fields_order_is_fixed() {
        let posting = JobPosting {
            skills: Some("a".to_string()),
            title: Some("b".to_string()),
            description: Some("c".to_string()),
            location: Some("d".to_string()),
            role: Some("e".to_string()),
            ..JobPosting::default()
        };
        assert_eq!(
            posting.checked_fields(),
            [Some("a"), Some("b"), Some("c"), Some("d"), Some("e")]
        );
    }
}
