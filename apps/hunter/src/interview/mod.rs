//! Interview preparation: turns a cluster of similar postings into a short
//! list of tailored technical interview questions.

pub mod prompts;

use std::collections::BTreeSet;

use tracing::info;

use crate::cluster::JobCluster;
use crate::errors::PipelineError;
use crate::llm_client::TextModel;
use crate::interview::prompts::{INTERVIEW_Q_TEMPLATE, INTERVIEW_SYSTEM};

/// Generates interview questions for one cluster of jobs. Empty clusters
/// yield an empty list without an LLM call.
pub async fn generate_interview_questions(
    model: &dyn TextModel,
    cluster: &JobCluster,
) -> Result<Vec<String>, PipelineError> {
    let Some(prompt) = build_interview_prompt(cluster) else {
        return Ok(Vec::new());
    };

    let reply = model.complete(&prompt, INTERVIEW_SYSTEM).await?;
    let questions: Vec<String> = reply
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    info!(
        "Generated {} interview questions for cluster {}",
        questions.len(),
        cluster.id
    );
    Ok(questions)
}

/// Builds the interview prompt from a cluster summary: the deduplicated
/// company list in stable order and the first posting's title as the
/// representative role. Returns `None` for an empty cluster.
fn build_interview_prompt(cluster: &JobCluster) -> Option<String> {
    let first = cluster.postings.first()?;

    let companies: BTreeSet<&str> = cluster
        .postings
        .iter()
        .filter_map(|p| p.company.as_deref())
        .collect();
    let companies = companies.into_iter().collect::<Vec<_>>().join(", ");

    let role = first
        .title
        .as_deref()
        .or(first.role.as_deref())
        .unwrap_or_default();

    Some(
        INTERVIEW_Q_TEMPLATE
            .replace("{companies}", &companies)
            .replace("{role}", role),
    )
}
