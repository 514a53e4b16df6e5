mod cli;
mod logging;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use pagerank_estimator::{
    crawl,
    page_rank::{iterated, sampled, PageRank, PageRankResult},
    report,
};
use rand::{rngs::StdRng, SeedableRng};
use tracing::{info, trace};

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let graph = crawl(&cli.corpus)
        .with_context(|| format!("failed to crawl {}", cli.corpus.display()))?;
    info!(
        pages = graph.len(),
        links = graph.link_count(),
        "crawled corpus"
    );

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let cfg = sampled::Config {
        damping: cli.damping,
        samples: cli.samples,
    };
    let ranks = sampled::SampledPageRank::new(&graph, &cfg, rng)?.calc()?;
    trace!("sampled:\n{:?}", ranks.debug(&graph));
    print!(
        "{}",
        report::render(
            &format!("PageRank Results from Sampling (n = {})", cli.samples),
            &ranks.named(&graph),
        )
    );

    let cfg = iterated::Config {
        damping: cli.damping,
        ..Default::default()
    };
    let ranks = iterated::IteratedPageRank::new(&graph, &cfg)?.calc()?;
    info!(passes = ranks.passes, "iteration converged");
    trace!("iterated:\n{:?}", ranks.debug(&graph));
    print!(
        "{}",
        report::render("PageRank Results from Iteration", &ranks.named(&graph))
    );
    Ok(())
}
