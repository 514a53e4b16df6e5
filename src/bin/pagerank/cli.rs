use std::path::PathBuf;

use clap::Parser;
use pagerank_estimator::{DEFAULT_DAMPING, DEFAULT_SAMPLES};

/// Rank the pages of an HTML corpus by sampling and by iteration.
#[derive(Parser)]
#[command(
    name = "pagerank",
    version,
    about = "Estimate PageRank of a directory of HTML pages"
)]
pub struct Cli {
    /// Directory holding the corpus' `.html` files.
    pub corpus: PathBuf,

    /// Probability of following a link instead of jumping to a random page.
    #[arg(short, long, default_value_t = DEFAULT_DAMPING)]
    pub damping: f64,

    /// Number of random-surfer steps for the sampling estimator.
    #[arg(short = 'n', long, default_value_t = DEFAULT_SAMPLES)]
    pub samples: usize,

    /// Seed for the sampling estimator; OS entropy when omitted.
    #[arg(long, env = "PAGERANK_SEED")]
    pub seed: Option<u64>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
