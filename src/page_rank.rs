//! PageRank estimators over a [`LinkGraph`](crate::LinkGraph).
//!
//! [`transition`] is the random-surfer model both estimators share.
//! [`sampled::SampledPageRank`] walks it and counts visits;
//! [`iterated::IteratedPageRank`] relaxes the fixed-point equations until
//! every page moves less than the convergence threshold in one pass.

pub mod iterated;
pub mod sampled;
mod traits;
mod transition;

pub use self::traits::*;
pub use self::transition::{transition, TransitionModel};

use crate::*;
use rand::Rng;

/// Estimates PageRank from `samples` steps of a random surfer.
pub fn sample<R: Rng>(
    graph: &LinkGraph,
    damping: f64,
    samples: usize,
    rng: R,
) -> Result<RankDistribution, RankError> {
    let cfg = sampled::Config { damping, samples };
    let res = sampled::SampledPageRank::new(graph, &cfg, rng)?.calc()?;
    Ok(res.named(graph))
}

/// Estimates PageRank by iterating until convergence, with the default
/// threshold and pass bound.
pub fn iterate(graph: &LinkGraph, damping: f64) -> Result<RankDistribution, RankError> {
    let cfg = iterated::Config {
        damping,
        ..Default::default()
    };
    let res = iterated::IteratedPageRank::new(graph, &cfg)?.calc()?;
    Ok(res.named(graph))
}
