//! Report rendering and artifact writing.
//!
//! The pipeline's observable output is a handful of plain-text and JSON
//! files (`improved_resume.txt`, `resume_gaps.txt`, the match table, the
//! interview prep sheet). Rendering is pure; `write_file` creates missing
//! parent directories before writing.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use chrono::Utc;
use tracing::info;

use crate::cluster::JobCluster;
use crate::enhance::EnhancementReport;
use crate::errors::PipelineError;
use crate::matching::JobPosting;

/// Writes `content` to `path`, creating missing parent directories.
pub fn write_file(path: &Path, content: &str) -> Result<(), PipelineError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, content)?;
    info!("Wrote {}", path.display());
    Ok(())
}

/// Renders ranked matches as an aligned plain-text table.
pub fn render_matches(postings: &[JobPosting]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Job matches (generated {})", Utc::now().to_rfc3339());
    let _ = writeln!(out);

    if postings.is_empty() {
        let _ = writeln!(out, "No matching jobs found.");
        return out;
    }

    let _ = writeln!(out, "{:<5} {:<6} {:<35} {:<20} {}", "rank", "score", "title", "company", "location");
    for (i, posting) in postings.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:<5} {:<6} {:<35} {:<20} {}",
            i + 1,
            posting.match_score,
            posting.title.as_deref().unwrap_or("-"),
            posting.company.as_deref().unwrap_or("-"),
            posting.location.as_deref().unwrap_or("-"),
        );
    }
    out
}

/// Renders ranked matches as pretty-printed JSON.
pub fn render_matches_json(postings: &[JobPosting]) -> Result<String, PipelineError> {
    serde_json::to_string_pretty(postings)
        .map_err(|e| PipelineError::Internal(anyhow::anyhow!("serializing matches: {e}")))
}

/// Renders the gap list, one gap per line.
pub fn render_gaps(report: &EnhancementReport) -> String {
    if report.gaps.is_empty() {
        return "No gaps detected.\n".to_string();
    }
    let mut out = String::new();
    for gap in &report.gaps {
        let _ = writeln!(out, "- {gap}");
    }
    out
}

/// Renders per-cluster interview prep: a role/company header followed by
/// the generated questions.
pub fn render_interview_prep(sections: &[(JobCluster, Vec<String>)]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Interview prep (generated {})", Utc::now().to_rfc3339());

    for (cluster, questions) in sections {
        if cluster.postings.is_empty() {
            continue;
        }
        let title = cluster.postings[0].title.as_deref().unwrap_or("(untitled role)");
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "## Cluster {}: {} ({} postings)",
            cluster.id,
            title,
            cluster.postings.len()
        );
        if questions.is_empty() {
            let _ = writeln!(out, "No questions generated.");
        }
        for question in questions {
            let _ = writeln!(out, "- {question}");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn titled(title: &str, score: u32) -> JobPosting {
        JobPosting {
            title: Some(title.to_string()),
            match_score: score,
            ..JobPosting::default()
        }
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/report.txt");
        write_file(&path, "hello").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_render_matches_lists_scores_in_order() {
        let rendered = render_matches(&[titled("Rust Engineer", 7), titled("Data Analyst", 3)]);
        assert!(rendered.contains("Rust Engineer"));
        assert!(rendered.contains("Data Analyst"));
        let rust = rendered.find("Rust Engineer").unwrap();
        let analyst = rendered.find("Data Analyst").unwrap();
        assert!(rust < analyst);
    }

    #[test]
    fn test_render_matches_empty_collection() {
        assert!(render_matches(&[]).contains("No matching jobs found."));
    }

    #[test]
    fn test_render_matches_json_round_trips() {
        let json = render_matches_json(&[titled("Rust Engineer", 7)]).unwrap();
        let parsed: Vec<JobPosting> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0].match_score, 7);
    }

    #[test]
    fn test_render_gaps_bullets_each_gap() {
        let report = EnhancementReport {
            improved_resume: String::new(),
            gaps: vec!["Kubernetes".to_string(), "Terraform".to_string()],
            upskill_recommendations: BTreeMap::new(),
        };
        let rendered = render_gaps(&report);
        assert!(rendered.contains("- Kubernetes"));
        assert!(rendered.contains("- Terraform"));
    }

    #[test]
    fn test_render_interview_prep_skips_empty_clusters() {
        let sections = vec![
            (
                JobCluster {
                    id: 0,
                    postings: vec![titled("Rust Engineer", 0)],
                },
                vec!["Why Rust?".to_string()],
            ),
            (
                JobCluster {
                    id: 1,
                    postings: Vec::new(),
                },
                Vec::new(),
            ),
        ];
        let rendered = render_interview_prep(&sections);
        assert!(rendered.contains("Cluster 0"));
        assert!(rendered.contains("- Why Rust?"));
        assert!(!rendered.contains("Cluster 1"));
    }
}
