//! Lexical relevance scoring between a resume and job postings.
//!
//! The score is the summed size of the unique-token intersection between the
//! resume and each checked posting field. Tokens are lowercased and split on
//! whitespace only; punctuation is NOT stripped, so `"Python,"` does not
//! match `"python"`. This under-counts real overlap and is a known
//! limitation kept for parity with the historical ranking output.

use std::collections::HashSet;

use super::posting::JobPosting;

/// Default number of ranked postings returned to callers.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Scores one posting against the resume text.
///
/// Pure and deterministic: identical inputs always produce the identical
/// score. Missing fields contribute zero; an empty resume scores zero
/// against every posting.
pub fn score(posting: &JobPosting, resume_text: &str) -> u32 {
    let resume_lower = resume_text.to_lowercase();
    let resume_tokens: HashSet<&str> = resume_lower.split_whitespace().collect();
    score_against(posting, &resume_tokens)
}

/// Scores against a pre-tokenized resume, so `rank` tokenizes once per run
/// instead of once per posting.
fn score_against(posting: &JobPosting, resume_tokens: &HashSet<&str>) -> u32 {
    if resume_tokens.is_empty() {
        return 0;
    }

    let mut total = 0u32;
    for field in posting.checked_fields() {
        let Some(value) = field else {
            continue;
        };
        let lowered = value.to_lowercase();
        let field_tokens: HashSet<&str> = lowered.split_whitespace().collect();
        total += field_tokens.intersection(resume_tokens).count() as u32;
    }
    total
}

/// Scores every posting, attaches `match_score`, and returns the top
/// `max_results` postings sorted by descending score.
///
/// The sort is stable: postings with equal scores keep their input order.
/// The output is always a subsequence of the input of length
/// `min(max_results, postings.len())`; `max_results == 0` therefore yields
/// an empty vector (the CLI rejects 0 before it gets here).
pub fn rank(
    mut postings: Vec<JobPosting>,
    resume_text: &str,
    max_results: usize,
) -> Vec<JobPosting> {
    let resume_lower = resume_text.to_lowercase();
    let resume_tokens: HashSet<&str> = resume_lower.split_whitespace().collect();

    for posting in &mut postings {
        posting.match_score = score_against(posting, &resume_tokens);
    }

    // Vec::sort_by is stable, which is what keeps equal-score ties in
    // input order.
    postings.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    postings.truncate(max_results);
    postings
}
