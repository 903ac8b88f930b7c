//! Size-windowed approximate matching by Jaccard index.
//!
//! The full quadratic scan is avoided with a size pre-filter: a target is
//! only a candidate for a source of size `s` when its own size falls within
//! `s * size_tolerance` of `s`. The window is anchored on the source size,
//! so the relation is not symmetric in general.

use rayon::prelude::*;

use crate::community::{Community, CommunityCollection};
use crate::config::MatchConfig;
use crate::types::MatchRecord;

/// Result of the similarity phase: kept matches plus the pruning diagnostic.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityOutcome {
    /// Similar matches, stable-sorted by Jaccard index descending. Ties keep
    /// their encounter order (ascending source id, then target id).
    pub matches: Vec<MatchRecord>,
    /// Number of pairs that survived the size pre-filter and were actually
    /// evaluated. Returned as data, never printed.
    pub pairs_evaluated: usize,
}

/// Scan for Similar matches across the two collections.
///
/// For each candidate pair the intersection size is computed first and a
/// zero intersection skips the pair before any union or Jaccard work; that
/// cheap-reject ordering is kept for performance parity with the exhaustive
/// phase, not just correctness. A pair is kept when its Jaccard index meets
/// `cfg.min_jaccard`.
///
/// The caller is expected to have validated `cfg`; the engine entry point
/// does so before either phase runs.
pub fn similar_matches(
    list1: &CommunityCollection,
    list2: &CommunityCollection,
    cfg: &MatchConfig,
) -> SimilarityOutcome {
    let scan_row = |source: &Community| scan_source(source, list2, cfg);

    let rows: Vec<(Vec<MatchRecord>, usize)> = if cfg.use_parallel {
        list1
            .iter()
            .collect::<Vec<_>>()
            .into_par_iter()
            .map(scan_row)
            .collect()
    } else {
        list1.iter().map(scan_row).collect()
    };

    let mut pairs_evaluated = 0;
    let mut matches = Vec::new();
    for (row, evaluated) in rows {
        pairs_evaluated += evaluated;
        matches.extend(row);
    }

    // Stable: ties preserve the ascending (source, target) encounter order.
    matches.sort_by(|a, b| {
        b.jaccard_index
            .partial_cmp(&a.jaccard_index)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    SimilarityOutcome {
        matches,
        pairs_evaluated,
    }
}

/// Evaluate all windowed candidates for one source community.
fn scan_source(
    source: &Community,
    targets: &CommunityCollection,
    cfg: &MatchConfig,
) -> (Vec<MatchRecord>, usize) {
    let source_size = source.size() as f64;
    let window = source_size * cfg.size_tolerance;

    let mut kept = Vec::new();
    let mut evaluated = 0;

    for target in targets {
        if (target.size() as f64 - source_size).abs() > window {
            continue;
        }
        evaluated += 1;

        let intersection = source.intersection_count(target);
        if intersection == 0 {
            continue;
        }

        let union = source.size() + target.size() - intersection;
        let record = MatchRecord::similar(source, target, intersection, union);
        if record.jaccard_index >= cfg.min_jaccard {
            kept.push(record);
        }
    }

    (kept, evaluated)
}
