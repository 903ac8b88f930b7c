//! Exhaustive exact-relation scan: Perfect, Subset, and Superset matches.
//!
//! Every ordered pair across the two collections is evaluated, so the cost is
//! O(n * m * avg_set_size). This phase is deliberately exhaustive for
//! correctness; the size-windowed pruning lives in the similarity phase.

use rayon::prelude::*;

use crate::community::{Community, CommunityCollection};
use crate::config::MatchConfig;
use crate::signature::signature;
use crate::types::MatchRecord;

/// Scan all ordered pairs and report exact relations.
///
/// Output order is ascending source id, then ascending target id, as
/// encountered. The parallel path reconstructs the same order, so the flag
/// never changes output content.
///
/// Empty communities follow the containment rule: two empty communities are
/// Perfect, and an empty community is a Subset of every non-empty one with
/// `overlap_count = 0` and `jaccard_index = 0.0`. Zero-overlap containment
/// records are emitted, not suppressed.
pub fn exact_matches(
    list1: &CommunityCollection,
    list2: &CommunityCollection,
    cfg: &MatchConfig,
) -> Vec<MatchRecord> {
    // Target signatures are reused across every source row.
    let target_signatures: Vec<String> = list2.iter().map(signature).collect();

    let scan_row = |source: &Community| -> Vec<MatchRecord> {
        let source_sig = signature(source);
        list2
            .iter()
            .zip(target_signatures.iter())
            .filter_map(|(target, target_sig)| classify_pair(source, &source_sig, target, target_sig))
            .collect()
    };

    if cfg.use_parallel {
        let rows: Vec<Vec<MatchRecord>> = list1
            .iter()
            .collect::<Vec<_>>()
            .into_par_iter()
            .map(scan_row)
            .collect();
        rows.into_iter().flatten().collect()
    } else {
        list1.iter().flat_map(scan_row).collect()
    }
}

/// Classify one ordered pair, or `None` when no exact relation holds.
///
/// The three conditions are checked in priority order so they stay mutually
/// exclusive: equality first, then source-in-target, then target-in-source.
fn classify_pair(
    source: &Community,
    source_sig: &str,
    target: &Community,
    target_sig: &str,
) -> Option<MatchRecord> {
    if source_sig == target_sig {
        Some(MatchRecord::perfect(source, target))
    } else if source.is_subset_of(target) {
        Some(MatchRecord::subset(source, target))
    } else if target.is_subset_of(source) {
        Some(MatchRecord::superset(source, target))
    } else {
        None
    }
}
