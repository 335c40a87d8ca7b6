//! Resume enhancement: rewrite for a target role, detect gaps against a job
//! description, and suggest upskilling subfields for each gap.
//!
//! Flow of `enhance_and_suggest`: improve resume, detect gaps against the
//! IMPROVED text, then map each gap to subtopics. Gap detection reads the
//! improved resume on purpose: the gaps reported to the user should be the
//! ones that survive the rewrite.

pub mod prompts;

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::info;

use crate::errors::PipelineError;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{parse_json_response, TextModel};
use crate::enhance::prompts::{
    DETECT_GAPS_TEMPLATE, ENHANCE_SYSTEM, IMPROVE_RESUME_TEMPLATE, SUGGEST_SUBFIELDS_TEMPLATE,
};

/// Result of the full enhancement pass.
#[derive(Debug, Clone, Serialize)]
pub struct EnhancementReport {
    pub improved_resume: String,
    pub gaps: Vec<String>,
    pub upskill_recommendations: BTreeMap<String, Vec<String>>,
}

/// Rewrites the resume for clarity and alignment with `target_role`.
pub async fn improve_resume(
    model: &dyn TextModel,
    resume_text: &str,
    target_role: &str,
) -> Result<String, PipelineError> {
    let prompt = IMPROVE_RESUME_TEMPLATE
        .replace("{role}", target_role)
        .replace("{resume}", resume_text);
    let improved = model.complete(&prompt, ENHANCE_SYSTEM).await?;
    Ok(improved.trim().to_string())
}

/// Lists skills, experience, and certifications the resume is missing
/// relative to the job description. One gap per reply line.
pub async fn detect_gaps(
    model: &dyn TextModel,
    resume_text: &str,
    job_description: &str,
) -> Result<Vec<String>, PipelineError> {
    let prompt = DETECT_GAPS_TEMPLATE
        .replace("{resume}", resume_text)
        .replace("{job}", job_description);
    let reply = model.complete(&prompt, ENHANCE_SYSTEM).await?;
    Ok(parse_lines(&reply))
}

/// Maps each missing skill to 3-5 subtopics worth learning. Returns an
/// empty map without calling the model when there are no gaps.
pub async fn suggest_subfields(
    model: &dyn TextModel,
    gaps: &[String],
) -> Result<BTreeMap<String, Vec<String>>, PipelineError> {
    if gaps.is_empty() {
        return Ok(BTreeMap::new());
    }
    let prompt = SUGGEST_SUBFIELDS_TEMPLATE.replace("{skills}", &gaps.join(", "));
    let reply = model.complete(&prompt, JSON_ONLY_SYSTEM).await?;
    let recommendations = parse_json_response(&reply)
        .map_err(|e| PipelineError::Llm(format!("upskill suggestions were not valid JSON: {e}")))?;
    Ok(recommendations)
}

/// Runs the full enhancement pass: improve, detect gaps, suggest subfields.
pub async fn enhance_and_suggest(
    model: &dyn TextModel,
    resume_text: &str,
    job_description: &str,
    target_role: &str,
) -> Result<EnhancementReport, PipelineError> {
    let improved_resume = improve_resume(model, resume_text, target_role).await?;
    info!("Resume improved for role '{target_role}'");

    let gaps = detect_gaps(model, &improved_resume, job_description).await?;
    info!("Detected {} gaps against the job description", gaps.len());

    let upskill_recommendations = suggest_subfields(model, &gaps).await?;

    Ok(EnhancementReport {
        improved_resume,
        gaps,
        upskill_recommendations,
    })
}

/// Splits a plain-text LLM reply into trimmed, non-empty lines, dropping
/// leading bullet markers the model sometimes adds anyway.
fn parse_lines(reply: &str) -> Vec<String> {
    reply
        .lines()
        .map(|line| line.trim().trim_start_matches(['-', '*']).trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
