use crate::LinkGraph;
use quickcheck::{Arbitrary, Gen};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone)]
pub struct RandomCorpus {
    pub links: BTreeMap<String, BTreeSet<String>>,
    pub damping: f64,
}

impl RandomCorpus {
    pub fn graph(&self) -> LinkGraph {
        LinkGraph::from_links(self.links.clone())
    }
}

impl Arbitrary for RandomCorpus {
    fn arbitrary(g: &mut Gen) -> Self {
        const N: usize = 40;

        let n = usize::arbitrary(g) % N + 1;
        let pages: Vec<String> = (0..n).map(|i| format!("{i}.html")).collect();
        let mut links: BTreeMap<_, BTreeSet<_>> =
            pages.iter().map(|p| (p.clone(), BTreeSet::new())).collect();
        for _ in 0..(n * 2) {
            let u = &pages[usize::arbitrary(g) % n];
            let v = &pages[usize::arbitrary(g) % n];
            if let Some(targets) = links.get_mut(u) {
                targets.insert(v.clone());
            }
        }
        let damping = (u8::arbitrary(g) % 99 + 1) as f64 / 100.0;
        Self { links, damping }
    }
}

/// A directed 4-cycle with one extra cross-link.
pub fn cycle_with_chord() -> LinkGraph {
    LinkGraph::from_links([
        ("1.html", vec!["2.html", "3.html"]),
        ("2.html", vec!["3.html"]),
        ("3.html", vec!["4.html"]),
        ("4.html", vec!["1.html"]),
    ])
}
