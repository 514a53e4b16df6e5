use crate::*;
use algograph::graph::{directed, GrowableGraph, QueryableGraph, VertexId};
use std::{
    collections::{BTreeMap, BTreeSet, HashMap},
    fmt,
};
use tracing::debug;

/// A closed hyperlink corpus: every page and the in-corpus pages it links to.
///
/// Pages receive vertex ids in lexicographic order of their names, so
/// iterating vertices visits pages in a stable order. Self-links and links
/// to pages that are not keys are dropped at construction; the graph is
/// immutable afterwards.
pub struct LinkGraph {
    graph: directed::TreeBackedGraph,
    pages: BTreeMap<VertexId, String>,
    vertices: HashMap<String, VertexId, ahash::RandomState>,
}

impl LinkGraph {
    pub fn from_links<I, P, L, T>(links: I) -> Self
    where
        I: IntoIterator<Item = (P, L)>,
        P: Into<String>,
        L: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let links: BTreeMap<String, BTreeSet<String>> = {
            let mut merged: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
            for (page, targets) in links {
                merged
                    .entry(page.into())
                    .or_default()
                    .extend(targets.into_iter().map(Into::into));
            }
            merged
        };

        let mut graph = directed::TreeBackedGraph::new();
        let mut pages = BTreeMap::new();
        let mut vertices = HashMap::with_hasher(ahash::RandomState::new());
        for page in links.keys() {
            let v = graph.add_vertex();
            pages.insert(v, page.clone());
            vertices.insert(page.clone(), v);
        }

        let mut dropped = 0usize;
        for (page, targets) in links.iter() {
            let u = vertices[page];
            for target in targets.iter() {
                match vertices.get(target) {
                    Some(v) if *v != u => {
                        graph.add_edge(u, *v);
                    }
                    _ => dropped += 1,
                }
            }
        }
        debug!(
            pages = graph.vertex_size(),
            links = graph.edge_size(),
            dropped,
            "built link graph"
        );

        Self {
            graph,
            pages,
            vertices,
        }
    }

    pub fn len(&self) -> usize {
        self.graph.vertex_size()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn link_count(&self) -> usize {
        self.graph.edge_size()
    }

    pub fn contains(&self, v: &VertexId) -> bool {
        self.graph.contains_vertex(v)
    }

    pub fn vertex(&self, page: &str) -> Option<VertexId> {
        self.vertices.get(page).copied()
    }

    pub fn page(&self, v: &VertexId) -> Option<&str> {
        self.pages.get(v).map(String::as_str)
    }

    /// Vertices in lexicographic page order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.pages.keys().copied()
    }

    pub fn pages(&self) -> impl Iterator<Item = &str> + '_ {
        self.pages.values().map(String::as_str)
    }

    /// Pages `v` links to. Empty for a vertex outside the graph.
    pub fn successors(&self, v: &VertexId) -> BTreeSet<VertexId> {
        if !self.contains(v) {
            return BTreeSet::new();
        }
        self.graph.out_edges(v).map(|e| e.sink).collect()
    }

    pub fn out_degree(&self, v: &VertexId) -> usize {
        if !self.contains(v) {
            return 0;
        }
        self.graph.out_edges(v).count()
    }

    /// Outbound links of `page` by name.
    pub fn links(&self, page: &str) -> Result<BTreeSet<&str>, RankError> {
        let u = self.vertex(page).ok_or_else(|| RankError::UnknownPage {
            page: page.to_string(),
        })?;
        Ok(self
            .successors(&u)
            .iter()
            .filter_map(|v| self.page(v))
            .collect())
    }

    /// Re-keys a vertex distribution by page name. Vertices foreign to this
    /// graph are skipped.
    pub fn named(&self, dist: &Distribution) -> RankDistribution {
        dist.iter()
            .filter_map(|(v, p)| self.page(v).map(|page| (page.to_string(), *p)))
            .collect()
    }
}

impl fmt::Debug for LinkGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (v, page) in self.pages.iter() {
            let targets: Vec<_> = self
                .successors(v)
                .iter()
                .filter_map(|w| self.page(w))
                .collect();
            map.entry(page, &targets);
        }
        map.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::RandomCorpus;
    use quickcheck_macros::quickcheck;

    #[test]
    fn drops_self_and_foreign_links() {
        let g = LinkGraph::from_links([
            ("a.html", vec!["a.html", "b.html", "missing.html"]),
            ("b.html", vec!["a.html"]),
        ]);
        assert_eq!(g.len(), 2);
        assert_eq!(g.link_count(), 2);
        assert_eq!(g.links("a.html").unwrap(), BTreeSet::from(["b.html"]));
        assert_eq!(g.links("b.html").unwrap(), BTreeSet::from(["a.html"]));
    }

    #[test]
    fn duplicate_keys_merge() {
        let g = LinkGraph::from_links([
            ("a", vec!["b"]),
            ("b", vec![]),
            ("a", vec!["c", "b"]),
            ("c", vec![]),
        ]);
        assert_eq!(g.len(), 3);
        assert_eq!(g.links("a").unwrap(), BTreeSet::from(["b", "c"]));
    }

    #[test]
    fn pages_are_ordered() {
        let g = LinkGraph::from_links([("c", vec!["a"]), ("a", vec![]), ("b", vec!["c"])]);
        let pages: Vec<_> = g.pages().collect();
        assert_eq!(pages, ["a", "b", "c"]);
        let named: Vec<_> = g.vertices().filter_map(|v| g.page(&v)).collect();
        assert_eq!(named, pages);
    }

    #[test]
    fn unknown_page() {
        let g = LinkGraph::from_links([("a", vec!["b"]), ("b", vec![])]);
        assert!(matches!(
            g.links("z"),
            Err(RankError::UnknownPage { page }) if page == "z"
        ));
        assert!(g.vertex("z").is_none());
    }

    #[test]
    fn empty() {
        let g = LinkGraph::from_links(Vec::<(String, Vec<String>)>::new());
        assert!(g.is_empty());
        assert_eq!(g.vertices().count(), 0);
    }

    #[quickcheck]
    fn links_stay_in_corpus(c: RandomCorpus) {
        let g = c.graph();
        for v in g.vertices() {
            let succ = g.successors(&v);
            assert!(!succ.contains(&v));
            assert!(succ.iter().all(|w| g.contains(w)));
            assert_eq!(succ.len(), g.out_degree(&v));
        }
    }
}
