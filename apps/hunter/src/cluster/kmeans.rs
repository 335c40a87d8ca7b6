//! Seeded k-means over dense vectors.
//!
//! Small-input Lloyd's algorithm with k-means++ initialization. The RNG is
//! seeded by the caller, so the whole routine is deterministic for a fixed
//! input. Assignment ties break toward the lower centroid index.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const MAX_ITERATIONS: usize = 100;

/// Assigns each vector to one of `k` clusters. Returns one label per input
/// vector, in input order. `k` must be in `1..=vectors.len()`.
pub fn kmeans(vectors: &[Vec<f64>], k: usize, seed: u64) -> Vec<usize> {
    debug_assert!(k >= 1 && k <= vectors.len());

    let mut rng = StdRng::seed_from_u64(seed);
    let mut centroids = plus_plus_init(vectors, k, &mut rng);
    let mut labels = vec![0usize; vectors.len()];

    for _ in 0..MAX_ITERATIONS {
        let mut changed = false;
        for (i, vector) in vectors.iter().enumerate() {
            let nearest = nearest_centroid(vector, &centroids);
            if labels[i] != nearest {
                labels[i] = nearest;
                changed = true;
            }
        }
        if !changed {
            break;
        }

        for (cluster, centroid) in centroids.iter_mut().enumerate() {
            let members: Vec<&Vec<f64>> = vectors
                .iter()
                .zip(&labels)
                .filter(|(_, &label)| label == cluster)
                .map(|(v, _)| v)
                .collect();
            // An emptied cluster keeps its previous centroid
            if members.is_empty() {
                continue;
            }
            for value in centroid.iter_mut() {
                *value = 0.0;
            }
            for member in &members {
                for (value, m) in centroid.iter_mut().zip(member.iter()) {
                    *value += m;
                }
            }
            let count = members.len() as f64;
            for value in centroid.iter_mut() {
                *value /= count;
            }
        }
    }

    labels
}

/// k-means++ seeding: first centroid uniform, the rest sampled proportional
/// to squared distance from the nearest chosen centroid.
fn plus_plus_init(vectors: &[Vec<f64>], k: usize, rng: &mut StdRng) -> Vec<Vec<f64>> {
    let mut centroids = Vec::with_capacity(k);
    centroids.push(vectors[rng.random_range(0..vectors.len())].clone());

    while centroids.len() < k {
        let distances: Vec<f64> = vectors
            .iter()
            .map(|v| {
                centroids
                    .iter()
                    .map(|c| squared_distance(v, c))
                    .fold(f64::INFINITY, f64::min)
            })
            .collect();
        let total: f64 = distances.iter().sum();

        let next = if total > 0.0 {
            let mut target = rng.random::<f64>() * total;
            let mut chosen = vectors.len() - 1;
            for (i, d) in distances.iter().enumerate() {
                target -= d;
                if target <= 0.0 {
                    chosen = i;
                    break;
                }
            }
            chosen
        } else {
            // All points coincide with a centroid; any pick is equivalent
            rng.random_range(0..vectors.len())
        };
        centroids.push(vectors[next].clone());
    }

    centroids
}

fn nearest_centroid(vector: &[f64], centroids: &[Vec<f64>]) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for (i, centroid) in centroids.iter().enumerate() {
        let distance = squared_distance(vector, centroid);
        if distance < best_distance {
            best_distance = distance;
            best = i;
        }
    }
    best
}

fn squared_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
}
