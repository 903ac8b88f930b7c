//! Configuration surface for the matching engine.
//!
//! [`MatchConfig`] is intentionally free of any I/O or environment-dependent
//! behavior so the whole pipeline is a pure function of
//! `(list1, list2, config)`. It is cheap to clone and serde-friendly so it
//! can be embedded in higher-level configs or passed across process
//! boundaries.

use serde::{Deserialize, Serialize};

use crate::types::MatchError;

/// Tuning knobs for one matching run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Half-width of the similarity candidate window, as a fraction of the
    /// source community's size. A target of size `t` is a candidate for a
    /// source of size `s` when `|t - s| <= s * size_tolerance`. The window is
    /// anchored on the source size, so it is not symmetric in general.
    pub size_tolerance: f64,
    /// Minimum Jaccard index for a pair to be reported as Similar.
    pub min_jaccard: f64,
    /// Parallelize the outer pair loops of both matchers. Output content and
    /// ordering are identical either way; only wall-clock time changes.
    pub use_parallel: bool,
}

impl MatchConfig {
    /// Create a configuration with the default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the similarity size window. Typical values: 0.3-1.0.
    /// Larger values evaluate more candidate pairs.
    pub fn with_size_tolerance(mut self, size_tolerance: f64) -> Self {
        self.size_tolerance = size_tolerance;
        self
    }

    /// Set the minimum Jaccard index for Similar matches.
    pub fn with_min_jaccard(mut self, min_jaccard: f64) -> Self {
        self.min_jaccard = min_jaccard;
        self
    }

    /// Enable or disable parallel pair evaluation.
    pub fn with_parallel(mut self, use_parallel: bool) -> Self {
        self.use_parallel = use_parallel;
        self
    }

    /// Validate thresholds before any pairwise work begins.
    ///
    /// Out-of-range values are rejected, never clamped.
    pub fn validate(&self) -> Result<(), MatchError> {
        if !self.size_tolerance.is_finite() || self.size_tolerance < 0.0 {
            return Err(MatchError::InvalidSizeTolerance {
                value: self.size_tolerance,
            });
        }
        if !self.min_jaccard.is_finite() || !(0.0..=1.0).contains(&self.min_jaccard) {
            return Err(MatchError::InvalidMinJaccard {
                value: self.min_jaccard,
            });
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            size_tolerance: 0.5,
            min_jaccard: 0.3,
            use_parallel: false,
        }
    }
}
