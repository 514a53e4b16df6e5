pub mod crawl;
pub use self::crawl::crawl;
mod error;
pub use self::error::RankError;
mod link_graph;
pub use self::link_graph::LinkGraph;
pub mod report;
mod common;
pub use self::common::*;

pub mod page_rank;

#[cfg(test)]
mod corpus;
