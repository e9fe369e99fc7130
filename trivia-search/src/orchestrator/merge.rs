//! Merge per-engine hit lists into one duplicate-free ranking.
//!
//! Hits are interleaved by rank (every engine's first hit, then every
//! engine's second hit, ...) with ties broken by engine order. A URL is kept
//! at its first position; later hits for the same normalised URL are dropped.

use std::collections::HashSet;

use crate::types::SearchHit;

use super::url_normalize::normalize_url;

/// Interleave `per_engine` lists by rank, drop duplicates, keep `limit`.
///
/// The outer slice order is the engine priority order. Returned hits have
/// their `rank` rewritten to the merged position.
pub fn merge_ranked(per_engine: Vec<Vec<SearchHit>>, limit: usize) -> Vec<SearchHit> {
    let mut tagged: Vec<(usize, usize, SearchHit)> = per_engine
        .into_iter()
        .enumerate()
        .flat_map(|(engine_idx, hits)| {
            hits.into_iter()
                .enumerate()
                .map(move |(pos, hit)| (pos, engine_idx, hit))
        })
        .collect();
    tagged.sort_by_key(|(pos, engine_idx, _)| (*pos, *engine_idx));

    let mut seen = HashSet::new();
    tagged
        .into_iter()
        .map(|(_, _, hit)| hit)
        .filter(|hit| seen.insert(normalize_url(&hit.url)))
        .take(limit)
        .enumerate()
        .map(|(rank, hit)| SearchHit { rank, ..hit })
        .collect()
}
