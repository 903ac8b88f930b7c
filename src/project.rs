//! Flattening of combined matches into the reporter contract.
//!
//! Reporters (tabular print, CSV export, etc.) live outside the core; the
//! flat, Jaccard-descending sequence produced here is the only thing they
//! consume. [`FlatMatch`] derives `Serialize` so a reporter can emit JSON or
//! CSV rows without any help from this crate.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{MatchRecord, OverlapType};

/// Coarse class of a match as presented to reporters.
///
/// Perfect, Subset, and Superset all collapse to `Identical`; the fine
/// distinction remains available on the underlying [`MatchRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchClass {
    Identical,
    Similar,
}

impl fmt::Display for MatchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchClass::Identical => write!(f, "Identical"),
            MatchClass::Similar => write!(f, "Similar"),
        }
    }
}

impl From<OverlapType> for MatchClass {
    fn from(overlap: OverlapType) -> Self {
        if overlap.is_exact() {
            MatchClass::Identical
        } else {
            MatchClass::Similar
        }
    }
}

/// One row of the flattened result set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatMatch {
    pub match_type: MatchClass,
    pub source_id: usize,
    pub target_id: usize,
    pub jaccard_index: f64,
    pub overlap_count: usize,
    pub source_size: usize,
    pub target_size: usize,
}

impl From<&MatchRecord> for FlatMatch {
    fn from(rec: &MatchRecord) -> Self {
        Self {
            match_type: rec.overlap_type.into(),
            source_id: rec.source_id,
            target_id: rec.target_id,
            jaccard_index: rec.jaccard_index,
            overlap_count: rec.overlap_count,
            source_size: rec.source_size,
            target_size: rec.target_size,
        }
    }
}

/// Flatten combined matches and stable-sort them by Jaccard descending.
///
/// Ties preserve the combined-result order (exact phase first, then similar).
pub fn project(matches: &[MatchRecord]) -> Vec<FlatMatch> {
    let mut flat: Vec<FlatMatch> = matches.iter().map(FlatMatch::from).collect();
    flat.sort_by(|a, b| {
        b.jaccard_index
            .partial_cmp(&a.jaccard_index)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    flat
}
