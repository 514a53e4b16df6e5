use super::*;
use algograph::graph::VertexId;
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// PageRank by fixed-point relaxation.
///
/// Every pass computes all ranks from the previous pass's snapshot (Jacobi
/// order). A dangling page spreads its rank over every page, itself
/// included, so each pass preserves total mass.
pub struct IteratedPageRank<'a> {
    graph: &'a LinkGraph,
    damping: f64,
    epsilon: f64,
    max_passes: usize,
    transitions: BTreeMap<(VertexId, VertexId), f64>,
    dangling: Vec<VertexId>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub damping: f64,
    pub epsilon: f64,
    pub max_passes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            epsilon: DEFAULT_EPSILON,
            max_passes: DEFAULT_MAX_PASSES,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Outcome {
    pub page_rank: Distribution,
    pub delta: Distribution,
    pub passes: usize,
}

impl<'a> IteratedPageRank<'a> {
    pub fn new(g: &'a LinkGraph, config: &Config) -> Result<Self, RankError> {
        let damping = check_damping(config.damping)?;
        let epsilon = config.epsilon;
        if !(epsilon.is_finite() && epsilon > 0.0) {
            return Err(RankError::InvalidEpsilon { epsilon });
        }
        if g.is_empty() {
            return Err(RankError::EmptyGraph);
        }
        let mut transitions = BTreeMap::new();
        let mut dangling = vec![];
        for u in g.vertices() {
            let sinks = g.successors(&u);
            if sinks.is_empty() {
                dangling.push(u);
                continue;
            }
            let unit = damping / (sinks.len() as f64);
            for v in sinks {
                transitions.insert((u, v), unit);
            }
        }
        Ok(Self {
            graph: g,
            damping,
            epsilon,
            max_passes: config.max_passes,
            transitions,
            dangling,
        })
    }

    /// One relaxation pass over `p`.
    pub fn relax(&self, p: &Distribution) -> Distribution {
        let n = self.graph.len() as f64;
        let rank_of = |v: &VertexId| p.get(v).copied().unwrap_or(0.0);
        let dangling: f64 = self.dangling.iter().map(rank_of).sum();
        let base = (1.0 - self.damping) / n + self.damping * dangling / n;
        let mut r: Distribution = self.graph.vertices().map(|v| (v, base)).collect();
        for ((v0, v1), w) in self.transitions.iter() {
            if let Some(to) = r.get_mut(v1) {
                *to += rank_of(v0) * w;
            }
        }
        r
    }
}

impl PageRank for IteratedPageRank<'_> {
    type Result = self::Outcome;

    fn calc(&self) -> std::result::Result<Self::Result, RankError> {
        let n = self.graph.len() as f64;
        let mut p: Distribution = self.graph.vertices().map(|v| (v, 1.0 / n)).collect();
        let mut max_delta = f64::INFINITY;
        for pass in 1..=self.max_passes {
            let r = self.relax(&p);
            let delta: Distribution = self
                .graph
                .vertices()
                .map(|v| {
                    let a = p.get(&v).copied().unwrap_or(0.0);
                    let b = r.get(&v).copied().unwrap_or(0.0);
                    (v, b - a)
                })
                .collect();
            max_delta = max_abs(delta.values());
            trace!(pass, max_delta, "relaxation pass");

            // relaxing `p` again yields `r`, within `epsilon` on every page
            if delta.values().all(|d| d.abs() < self.epsilon) {
                debug!(passes = pass, total = norm_1(p.values()), "converged");
                return Ok(Self::Result {
                    page_rank: p,
                    delta,
                    passes: pass,
                });
            }
            p = r;
        }
        Err(RankError::NotConverged {
            passes: self.max_passes,
            max_delta,
        })
    }
}

impl PageRankResult for self::Outcome {
    fn page_rank(&self) -> &Distribution {
        &self.page_rank
    }

    fn debug<'a>(&'a self, graph: &'a LinkGraph) -> impl std::fmt::Debug + 'a {
        OutcomeDebug {
            graph,
            result: self,
        }
    }
}

pub struct OutcomeDebug<'a> {
    graph: &'a LinkGraph,
    result: &'a self::Outcome,
}

impl std::fmt::Debug for OutcomeDebug<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for v in self.graph.vertices() {
            let page = self.graph.page(&v).unwrap_or_default();
            let p = self.result.page_rank.get(&v).copied().unwrap_or_default();
            let d = self.result.delta.get(&v).copied().unwrap_or_default();
            writeln!(f, "{page}: {p:?}, {d:?}")?;
        }
        Ok(())
    }
}
