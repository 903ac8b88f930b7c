//! Core record and error types for the matching layer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::community::Community;

/// How a source community relates to a target community.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlapType {
    /// Identical member sets.
    Perfect,
    /// Source members fully contained in the target, not equal.
    Subset,
    /// Target members fully contained in the source, not equal.
    Superset,
    /// Non-containing pair whose Jaccard index clears the caller threshold.
    Similar,
}

impl OverlapType {
    /// Whether this outcome came from the exact phase.
    pub fn is_exact(self) -> bool {
        !matches!(self, OverlapType::Similar)
    }
}

/// One scored relation between a source and a target community.
///
/// All fields are carried uniformly on every record regardless of phase, so
/// downstream consumers never need fallback logic for missing fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// 1-based id of the community in the first collection.
    pub source_id: usize,
    /// 1-based id of the community in the second collection.
    pub target_id: usize,
    /// `|A ∩ B| / |A ∪ B|`, in [0, 1].
    pub jaccard_index: f64,
    pub overlap_type: OverlapType,
    /// `|A ∩ B|`; never exceeds `min(source_size, target_size)`.
    pub overlap_count: usize,
    pub source_size: usize,
    pub target_size: usize,
    /// Members characterizing the match (shared set for Perfect, contained
    /// set for Subset/Superset), sorted ascending. Absent for Similar.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub representative_members: Option<Vec<String>>,
}

impl MatchRecord {
    /// Perfect match: identical member sets.
    pub(crate) fn perfect(source: &Community, target: &Community) -> Self {
        Self {
            source_id: source.id,
            target_id: target.id,
            jaccard_index: 1.0,
            overlap_type: OverlapType::Perfect,
            overlap_count: source.size(),
            source_size: source.size(),
            target_size: target.size(),
            representative_members: Some(source.members.iter().cloned().collect()),
        }
    }

    /// Subset match: all of `source` is contained in `target`.
    pub(crate) fn subset(source: &Community, target: &Community) -> Self {
        Self {
            source_id: source.id,
            target_id: target.id,
            jaccard_index: jaccard(source.size(), source.union_count(target)),
            overlap_type: OverlapType::Subset,
            overlap_count: source.size(),
            source_size: source.size(),
            target_size: target.size(),
            representative_members: Some(source.members.iter().cloned().collect()),
        }
    }

    /// Superset match: all of `target` is contained in `source`.
    pub(crate) fn superset(source: &Community, target: &Community) -> Self {
        Self {
            source_id: source.id,
            target_id: target.id,
            jaccard_index: jaccard(target.size(), source.union_count(target)),
            overlap_type: OverlapType::Superset,
            overlap_count: target.size(),
            source_size: source.size(),
            target_size: target.size(),
            representative_members: Some(target.members.iter().cloned().collect()),
        }
    }

    /// Similar match with a precomputed intersection and union size.
    pub(crate) fn similar(
        source: &Community,
        target: &Community,
        intersection: usize,
        union: usize,
    ) -> Self {
        Self {
            source_id: source.id,
            target_id: target.id,
            jaccard_index: jaccard(intersection, union),
            overlap_type: OverlapType::Similar,
            overlap_count: intersection,
            source_size: source.size(),
            target_size: target.size(),
            representative_members: None,
        }
    }

    /// Deduplication key for the combiner.
    pub fn pair_key(&self) -> (usize, usize) {
        (self.source_id, self.target_id)
    }
}

/// Jaccard index from precomputed intersection and union sizes.
///
/// An all-empty pair (union 0) only arises for two empty communities, which
/// the exact phase classifies as Perfect before any division happens; 0.0
/// here keeps the function total.
pub(crate) fn jaccard(intersection: usize, union: usize) -> f64 {
    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}

/// Errors returned by the matching layer.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MatchError {
    #[error("invalid config: size_tolerance must be finite and >= 0 (got {value})")]
    InvalidSizeTolerance { value: f64 },

    #[error("invalid config: min_jaccard must be finite and within [0, 1] (got {value})")]
    InvalidMinJaccard { value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jaccard_zero_union_is_zero() {
        assert_eq!(jaccard(0, 0), 0.0);
    }

    #[test]
    fn jaccard_full_overlap_is_one() {
        assert_eq!(jaccard(3, 3), 1.0);
    }

    #[test]
    fn perfect_record_fields() {
        let a = Community::new(1, ["A", "B", "C"]);
        let b = Community::new(4, ["C", "B", "A"]);
        let rec = MatchRecord::perfect(&a, &b);
        assert_eq!(rec.source_id, 1);
        assert_eq!(rec.target_id, 4);
        assert_eq!(rec.jaccard_index, 1.0);
        assert_eq!(rec.overlap_count, 3);
        assert_eq!(
            rec.representative_members,
            Some(vec!["A".into(), "B".into(), "C".into()])
        );
    }

    #[test]
    fn subset_record_fields() {
        let small = Community::new(1, ["A", "B"]);
        let big = Community::new(2, ["A", "B", "C"]);
        let rec = MatchRecord::subset(&small, &big);
        assert_eq!(rec.overlap_type, OverlapType::Subset);
        assert_eq!(rec.overlap_count, 2);
        assert!((rec.jaccard_index - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(rec.representative_members, Some(vec!["A".into(), "B".into()]));
    }

    #[test]
    fn superset_mirrors_subset() {
        let small = Community::new(2, ["A", "B"]);
        let big = Community::new(1, ["A", "B", "C"]);
        let rec = MatchRecord::superset(&big, &small);
        assert_eq!(rec.overlap_type, OverlapType::Superset);
        assert_eq!(rec.overlap_count, 2);
        assert_eq!(rec.source_size, 3);
        assert_eq!(rec.target_size, 2);
        assert_eq!(rec.representative_members, Some(vec!["A".into(), "B".into()]));
    }

    #[test]
    fn overlap_count_never_exceeds_smaller_side() {
        let a = Community::new(1, ["A", "B", "C"]);
        let b = Community::new(2, ["B", "C", "D", "E"]);
        let rec = MatchRecord::similar(&a, &b, a.intersection_count(&b), a.union_count(&b));
        assert!(rec.overlap_count <= rec.source_size.min(rec.target_size));
    }

    #[test]
    fn exactness_by_overlap_type() {
        assert!(OverlapType::Perfect.is_exact());
        assert!(OverlapType::Subset.is_exact());
        assert!(OverlapType::Superset.is_exact());
        assert!(!OverlapType::Similar.is_exact());
    }

    #[test]
    fn record_serde_roundtrip() {
        let a = Community::new(1, ["A", "B"]);
        let b = Community::new(2, ["A", "B", "C"]);
        let rec = MatchRecord::subset(&a, &b);
        let json = serde_json::to_string(&rec).unwrap();
        let back: MatchRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(rec, back);
    }
}
