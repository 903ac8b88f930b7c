//! Merge of the exact and similarity phases into one deduplicated result.

use std::collections::HashSet;

use crate::similarity::SimilarityOutcome;
use crate::types::MatchRecord;

/// Combined result of one matching run.
#[derive(Debug, Clone, PartialEq)]
pub struct CombinedMatches {
    /// Exact records in their own order, followed by the surviving similar
    /// records in their own order. No `(source_id, target_id)` pair appears
    /// twice.
    pub matches: Vec<MatchRecord>,
    /// Pruning diagnostic forwarded from the similarity phase.
    pub pairs_evaluated: usize,
}

/// Concatenate exact and similarity results, dropping any similar record
/// whose pair was already reported by the exact phase.
///
/// An exact match is never duplicated as Similar, even when the pair would
/// independently clear the similarity threshold.
pub fn combine(exact: Vec<MatchRecord>, similar: SimilarityOutcome) -> CombinedMatches {
    let exact_pairs: HashSet<(usize, usize)> = exact.iter().map(MatchRecord::pair_key).collect();

    let mut matches = exact;
    matches.extend(
        similar
            .matches
            .into_iter()
            .filter(|rec| !exact_pairs.contains(&rec.pair_key())),
    );

    CombinedMatches {
        matches,
        pairs_evaluated: similar.pairs_evaluated,
    }
}
