use super::*;
use algograph::graph::VertexId;
use rand::{seq::IndexedRandom, Rng};
use std::{cell::RefCell, collections::HashMap};
use tracing::debug;

/// Monte-Carlo PageRank: a random surfer takes `samples` steps and each
/// page's rank is the share of steps spent on it.
pub struct SampledPageRank<'a, R> {
    graph: &'a LinkGraph,
    samples: usize,
    transitions: HashMap<VertexId, Vec<(VertexId, f64)>, ahash::RandomState>,
    rng: RefCell<R>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub damping: f64,
    pub samples: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            samples: DEFAULT_SAMPLES,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Outcome {
    pub page_rank: Distribution,
    pub visits: HashMap<VertexId, usize, ahash::RandomState>,
    pub samples: usize,
}

impl<'a, R: Rng> SampledPageRank<'a, R> {
    pub fn new(g: &'a LinkGraph, config: &Config, rng: R) -> Result<Self, RankError> {
        let model = TransitionModel::new(g, config.damping)?;
        if config.samples == 0 {
            return Err(RankError::InvalidSampleCount {
                samples: config.samples,
            });
        }
        // walk tables keep five decimals
        let transitions = g
            .vertices()
            .map(|u| -> Result<_, RankError> {
                let xs = model.next_from(&u)?;
                let xs: Vec<_> = xs.into_iter().map(|(v, p)| (v, round5(p))).collect();
                Ok((u, xs))
            })
            .collect::<Result<_, _>>()?;
        Ok(Self {
            graph: g,
            samples: config.samples,
            transitions,
            rng: RefCell::new(rng),
        })
    }

    /// Inverse-CDF draw of the page after `u` for a uniform `r` in [0, 1).
    fn step(&self, u: VertexId, r: f64) -> VertexId {
        let Some(xs) = self.transitions.get(&u) else {
            return u;
        };
        let mut acc = 0.0;
        for (v, w) in xs.iter() {
            acc += w;
            if acc > r {
                return *v;
            }
        }
        // rounded probabilities may sum to slightly under 1
        xs.last().map_or(u, |(v, _)| *v)
    }
}

impl<R: Rng> PageRank for SampledPageRank<'_, R> {
    type Result = self::Outcome;

    fn calc(&self) -> std::result::Result<Self::Result, RankError> {
        let vertices: Vec<_> = self.graph.vertices().collect();
        let mut rng = self.rng.borrow_mut();
        let mut visits: HashMap<_, _, ahash::RandomState> =
            vertices.iter().map(|v| (*v, 0usize)).collect();
        let mut cur = *vertices.choose(&mut *rng).ok_or(RankError::EmptyGraph)?;
        for _ in 0..self.samples {
            *visits.entry(cur).or_insert(0) += 1;
            let r: f64 = rng.random();
            cur = self.step(cur, r);
        }
        let n = self.samples as f64;
        let page_rank = visits.iter().map(|(v, c)| (*v, *c as f64 / n)).collect();
        debug!(
            samples = self.samples,
            pages = vertices.len(),
            "sampled random surfer"
        );
        Ok(Self::Result {
            page_rank,
            visits,
            samples: self.samples,
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
            let c = self.result.visits.get(&v).copied().unwrap_or_default();
            writeln!(f, "{page}: {p:?}, {c}/{}", self.result.samples)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{cycle_with_chord, RandomCorpus};
    use quickcheck_macros::quickcheck;
    use rand::{rngs::SmallRng, SeedableRng};

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(3407)
    }

    #[test]
    fn agrees_with_iteration() {
        let g = cycle_with_chord();
        let sampled = sample(&g, 0.85, 100_000, rng()).unwrap();
        let iterated = iterate(&g, 0.85).unwrap();
        assert_eq!(sampled.len(), 4);
        for (page, p) in iterated.iter() {
            let q = sampled[page];
            assert!((p - q).abs() < 0.02, "{page}: iterated={p}, sampled={q}");
        }
    }

    #[test]
    fn visits_add_up() {
        let g = cycle_with_chord();
        let cfg = Config {
            damping: 0.85,
            samples: 1000,
        };
        let res = SampledPageRank::new(&g, &cfg, rng()).unwrap().calc().unwrap();
        assert_eq!(res.visits.values().sum::<usize>(), 1000);
        assert_eq!(res.page_rank.len(), 4);
    }

    #[test]
    fn unvisited_pages_keep_zero_entry() {
        let g = LinkGraph::from_links([("a", vec!["b"]), ("b", vec!["a"]), ("island", vec!["a"])]);
        let ranks = sample(&g, 0.5, 1, rng()).unwrap();
        assert_eq!(ranks.len(), 3);
        assert_eq!(ranks.values().filter(|p| **p == 1.0).count(), 1);
        assert_eq!(ranks.values().filter(|p| **p == 0.0).count(), 2);
    }

    #[test]
    fn seeded_runs_repeat() {
        let g = cycle_with_chord();
        let a = sample(&g, 0.85, 5000, rng()).unwrap();
        let b = sample(&g, 0.85, 5000, rng()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_zero_samples() {
        let g = cycle_with_chord();
        assert!(matches!(
            sample(&g, 0.85, 0, rng()),
            Err(RankError::InvalidSampleCount { samples: 0 })
        ));
    }

    #[test]
    fn rejects_empty_graph() {
        let g = LinkGraph::from_links(Vec::<(String, Vec<String>)>::new());
        assert!(matches!(
            sample(&g, 0.85, 10, rng()),
            Err(RankError::EmptyGraph)
        ));
    }

    #[test]
    fn step_falls_back_to_last_page() {
        let g = LinkGraph::from_links([("a", Vec::<&str>::new()), ("b", vec![]), ("c", vec![])]);
        let spr = SampledPageRank::new(&g, &Config::default(), rng()).unwrap();
        let a = g.vertex("a").unwrap();
        let c = g.vertex("c").unwrap();
        // 3 * 0.33333 = 0.99999
        assert_eq!(spr.step(a, 0.999995), c);
        assert_eq!(spr.step(a, 0.0), a);
    }

    #[quickcheck]
    fn sums_to_one(c: RandomCorpus) {
        let g = c.graph();
        let ranks = sample(&g, c.damping, 500, rng()).unwrap();
        assert_eq!(ranks.len(), g.len());
        let sum: f64 = ranks.values().sum();
        assert!((sum - 1.0).abs() < 1e-4, "sum={sum}");
    }
}
