use crate::*;

pub trait PageRank {
    type Result: PageRankResult;

    fn calc(&self) -> std::result::Result<Self::Result, RankError>;
}

pub trait PageRankResult {
    fn page_rank(&self) -> &Distribution;
    fn debug<'a>(&'a self, graph: &'a LinkGraph) -> impl std::fmt::Debug + 'a;

    fn named(&self, graph: &LinkGraph) -> RankDistribution {
        graph.named(self.page_rank())
    }
}
