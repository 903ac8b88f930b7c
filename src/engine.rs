//! Validated entry point running both phases and the projection.

use std::time::Instant;

use tracing::{Level, info, warn};

use crate::combine::combine;
use crate::community::CommunityCollection;
use crate::config::MatchConfig;
use crate::exact::exact_matches;
use crate::project::{FlatMatch, project};
use crate::similarity::similar_matches;
use crate::types::{MatchError, MatchRecord};

/// Everything produced by one matching run.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchOutcome {
    /// Deduplicated combined matches: exact records first (ascending source
    /// then target id), then surviving similar records (Jaccard descending).
    pub matches: Vec<MatchRecord>,
    /// Flattened, Jaccard-descending reporter rows derived from `matches`.
    pub report: Vec<FlatMatch>,
    /// Similarity-phase pairs that survived the size pre-filter.
    pub pairs_evaluated: usize,
}

/// Match two community collections against each other.
///
/// Runs the exhaustive exact phase, then the size-windowed similarity phase,
/// deduplicates across the two, and projects the reporter rows. The inputs
/// are borrowed immutably and never modified; both collections must be
/// passed explicitly, there is no process-wide loaded state. Empty
/// collections are valid and simply yield an empty outcome.
///
/// The configuration is validated before any pairwise work begins;
/// out-of-range thresholds are rejected, not clamped.
pub fn match_communities(
    list1: &CommunityCollection,
    list2: &CommunityCollection,
    cfg: &MatchConfig,
) -> Result<MatchOutcome, MatchError> {
    let start = Instant::now();

    if let Err(err) = cfg.validate() {
        warn!(error = %err, "match_rejected");
        return Err(err);
    }

    let span = tracing::span!(
        Level::INFO,
        "comatch.match",
        source_communities = list1.len(),
        target_communities = list2.len(),
    );
    let _guard = span.enter();

    let exact = exact_matches(list1, list2, cfg);
    let similar = similar_matches(list1, list2, cfg);

    let exact_count = exact.len();
    let similar_count = similar.matches.len();

    let combined = combine(exact, similar);
    let report = project(&combined.matches);

    let elapsed_micros = start.elapsed().as_micros();
    info!(
        exact_matches = exact_count,
        similar_matches = similar_count,
        combined_matches = combined.matches.len(),
        pairs_evaluated = combined.pairs_evaluated,
        elapsed_micros,
        "match_complete"
    );

    Ok(MatchOutcome {
        matches: combined.matches,
        report,
        pairs_evaluated: combined.pairs_evaluated,
    })
}
