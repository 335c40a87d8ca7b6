//! Groups job postings into topical clusters from their description text.
//!
//! TF-IDF over descriptions, then seeded k-means. Deterministic: the seed is
//! fixed, vocabulary layout is sorted, and ties break by index, so the same
//! postings always land in the same clusters.

mod kmeans;
mod tfidf;

use serde::Serialize;
use tracing::info;

use crate::matching::JobPosting;

/// Fixed clustering seed, so repeated runs over the same CSV agree.
const CLUSTER_SEED: u64 = 42;

/// One topical group of postings.
#[derive(Debug, Clone, Serialize)]
pub struct JobCluster {
    pub id: usize,
    pub postings: Vec<JobPosting>,
}

/// Clusters postings into at most `n_clusters` groups.
///
/// `n_clusters` is clamped to `1..=postings.len()`; empty input yields no
/// clusters. Clusters that end up empty are still returned, so cluster ids
/// are always `0..k`. Postings without a description cluster on their title.
pub fn cluster_jobs(postings: Vec<JobPosting>, n_clusters: usize) -> Vec<JobCluster> {
    if postings.is_empty() {
        return Vec::new();
    }
    let k = n_clusters.clamp(1, postings.len());

    let documents: Vec<String> = postings.iter().map(cluster_text).collect();
    let vectors = tfidf::vectorize(&documents);
    let labels = kmeans::kmeans(&vectors, k, CLUSTER_SEED);

    let mut clusters: Vec<JobCluster> = (0..k)
        .map(|id| JobCluster {
            id,
            postings: Vec::new(),
        })
        .collect();
    for (posting, label) in postings.into_iter().zip(labels) {
        clusters[label].postings.push(posting);
    }

    info!(
        "Clustered postings into {} groups: {:?}",
        k,
        clusters.iter().map(|c| c.postings.len()).collect::<Vec<_>>()
    );
    clusters
}

fn cluster_text(posting: &JobPosting) -> String {
    posting
        .description
        .as_deref()
        .or(posting.title.as_deref())
        .unwrap_or_default()
        .to_string()
}
