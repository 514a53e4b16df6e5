use crate::RankError;
use algograph::graph::VertexId;
use std::collections::{BTreeMap, HashMap};

pub const DEFAULT_DAMPING: f64 = 0.85;
pub const DEFAULT_SAMPLES: usize = 10_000;
pub const DEFAULT_EPSILON: f64 = 0.0001;
pub const DEFAULT_MAX_PASSES: usize = 10_000;

/// Probability mass per vertex of a [`crate::LinkGraph`].
pub type Distribution = HashMap<VertexId, f64, ahash::RandomState>;

/// Probability mass per page name, in lexicographic page order.
pub type RankDistribution = BTreeMap<String, f64>;

/// Next-page probabilities from one page, keyed by page name.
pub type TransitionDistribution = BTreeMap<String, f64>;

pub fn norm_1<'a, I: IntoIterator<Item = &'a f64>>(v: I) -> f64 {
    v.into_iter().map(|x| x.abs()).sum()
}

pub fn max_abs<'a, I: IntoIterator<Item = &'a f64>>(v: I) -> f64 {
    v.into_iter().fold(0.0, |acc, x| acc.max(x.abs()))
}

/// Rounds to five decimal digits.
pub fn round5(x: f64) -> f64 {
    (x * 1e5).round() / 1e5
}

pub fn check_damping(damping: f64) -> Result<f64, RankError> {
    if damping > 0.0 && damping < 1.0 {
        Ok(damping)
    } else {
        Err(RankError::InvalidDamping { damping })
    }
}
