//! Relevance Ranker — scores every chunk against the persona/job query and
//! keeps the best `TOP_N`.
//!
//! Ties keep chunk order (document, page, block): the sort is stable and
//! chunks arrive in that order from the extractor.

use anyhow::anyhow;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::chunk::{Chunk, RankedChunk};

/// Maximum number of ranked entries in a report.
pub const TOP_N: usize = 10;

/// Scores each document against the query; one score per document, same order.
pub trait RelevanceScorer: Send + Sync {
    fn score(&self, query: &str, documents: &[&str]) -> Result<Vec<f64>, AppError>;
}

/// Ranks `chunks` by descending similarity to `query`. Rank 1 is the best match.
/// An empty chunk set yields an empty ranking without calling the scorer.
pub fn rank_chunks(
    query: &str,
    chunks: &[Chunk],
    scorer: &dyn RelevanceScorer,
    top_n: usize,
) -> Result<Vec<RankedChunk>, AppError> {
    if chunks.is_empty() {
        warn!("No qualifying chunks found; ranking is empty");
        return Ok(Vec::new());
    }

    let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
    let scores = scorer.score(query, &texts)?;
    if scores.len() != chunks.len() {
        return Err(AppError::Internal(anyhow!(
            "scorer returned {} score(s) for {} chunk(s)",
            scores.len(),
            chunks.len()
        )));
    }

    let mut order: Vec<usize> = (0..chunks.len()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));
    order.truncate(top_n);

    let ranked: Vec<RankedChunk> = order
        .into_iter()
        .enumerate()
        .map(|(pos, idx)| RankedChunk {
            chunk: chunks[idx].clone(),
            rank: (pos + 1) as u32,
            score: scores[idx],
        })
        .collect();

    info!(
        "Ranked {} of {} chunk(s) for query {:?}",
        ranked.len(),
        chunks.len(),
        query
    );
    Ok(ranked)
}
