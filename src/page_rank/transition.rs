use crate::*;
use algograph::graph::VertexId;

/// The random-surfer model: from a page, follow one of its links with
/// probability `damping`, otherwise jump to any page uniformly.
///
/// A dangling page (no outbound links) jumps uniformly with probability 1,
/// whatever the damping factor.
#[derive(Debug, Clone, Copy)]
pub struct TransitionModel<'a> {
    graph: &'a LinkGraph,
    damping: f64,
}

impl<'a> TransitionModel<'a> {
    pub fn new(graph: &'a LinkGraph, damping: f64) -> Result<Self, RankError> {
        let damping = check_damping(damping)?;
        if graph.is_empty() {
            return Err(RankError::EmptyGraph);
        }
        Ok(Self { graph, damping })
    }

    pub fn damping(&self) -> f64 {
        self.damping
    }

    /// Next-page probabilities from `u`, one entry per page in vertex order.
    pub fn next_from(&self, u: &VertexId) -> Result<Vec<(VertexId, f64)>, RankError> {
        if !self.graph.contains(u) {
            return Err(RankError::UnknownPage {
                page: format!("{u:?}"),
            });
        }
        let n = self.graph.len() as f64;
        let links = self.graph.successors(u);
        let (follow, jump) = if links.is_empty() {
            (0.0, 1.0 / n)
        } else {
            (self.damping / links.len() as f64, (1.0 - self.damping) / n)
        };
        Ok(self
            .graph
            .vertices()
            .map(|v| {
                let p = if links.contains(&v) { follow + jump } else { jump };
                (v, p)
            })
            .collect())
    }
}

/// Next-page distribution from `page`, keyed by page name.
pub fn transition(
    graph: &LinkGraph,
    page: &str,
    damping: f64,
) -> Result<TransitionDistribution, RankError> {
    let model = TransitionModel::new(graph, damping)?;
    let u = graph.vertex(page).ok_or_else(|| RankError::UnknownPage {
        page: page.to_string(),
    })?;
    Ok(model
        .next_from(&u)?
        .into_iter()
        .filter_map(|(v, p)| graph.page(&v).map(|name| (name.to_string(), p)))
        .collect())
}
