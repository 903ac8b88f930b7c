//! # Community Overlap Matching (`comatch`)
//!
//! ## Purpose
//!
//! `comatch` compares two independently produced partitions of entities into
//! groups ("communities", e.g. protein complexes derived from two different
//! network-analysis runs) and determines how groups in one partition relate
//! to groups in the other: identical member sets, nested (subset/superset),
//! or merely similar by Jaccard index.
//!
//! Matching runs in two phases. The exact phase is an exhaustive pairwise
//! scan for Perfect, Subset, and Superset relations. The similarity phase is
//! a size-windowed Jaccard scan that prunes candidates whose sizes differ
//! too much from the source community before doing any set work. The
//! combiner deduplicates across the phases so no community pair is reported
//! twice, and the projection flattens everything into the sorted record
//! sequence an external reporter consumes.
//!
//! ## Core Types
//!
//! - [`Community`] / [`CommunityCollection`]: the loader contract, an ordered
//!   sequence of index-addressable member-identifier sets.
//! - [`MatchConfig`]: `size_tolerance`, `min_jaccard`, and `use_parallel`.
//! - [`MatchRecord`] / [`OverlapType`]: one scored relation per pair.
//! - [`FlatMatch`] / [`MatchClass`]: reporter rows, Jaccard descending.
//! - [`MatchOutcome`]: combined matches, reporter rows, and the
//!   similarity-phase pruning diagnostic.
//!
//! ## Example Usage
//!
//! ```
//! use comatch::{CommunityCollection, MatchConfig, match_communities};
//!
//! let run_a = CommunityCollection::from_member_lists(vec![
//!     vec!["P53", "MDM2", "ATM"],
//!     vec!["BRCA1", "BARD1"],
//! ]);
//! let run_b = CommunityCollection::from_member_lists(vec![
//!     vec!["P53", "MDM2", "ATM", "CHEK2"],
//!     vec!["BRCA1", "BARD1"],
//! ]);
//!
//! let cfg = MatchConfig::new()
//!     .with_size_tolerance(0.5)
//!     .with_min_jaccard(0.3);
//! let outcome = match_communities(&run_a, &run_b, &cfg).expect("valid config");
//!
//! for row in &outcome.report {
//!     println!(
//!         "{} {}->{} jaccard={:.2}",
//!         row.match_type, row.source_id, row.target_id, row.jaccard_index
//!     );
//! }
//! ```
//!
//! ## Determinism
//!
//! The whole pipeline is a pure function of `(list1, list2, config)`. The
//! `use_parallel` flag only changes wall-clock time; parallel and sequential
//! runs produce identical, identically ordered results. The library emits
//! structured `tracing` events but performs no other I/O; installing a
//! subscriber is the caller's business.

pub mod combine;
pub mod community;
pub mod config;
pub mod engine;
pub mod exact;
pub mod project;
pub mod signature;
pub mod similarity;
pub mod types;

pub use crate::combine::{CombinedMatches, combine};
pub use crate::community::{Community, CommunityCollection};
pub use crate::config::MatchConfig;
pub use crate::engine::{MatchOutcome, match_communities};
pub use crate::exact::exact_matches;
pub use crate::project::{FlatMatch, MatchClass, project};
pub use crate::signature::{SIGNATURE_DELIMITER, signature};
pub use crate::similarity::{SimilarityOutcome, similar_matches};
pub use crate::types::{MatchError, MatchRecord, OverlapType};
