//! Error types for the pagerank-estimator crate.

use std::path::PathBuf;

/// Error type for all fallible operations in the crate.
#[derive(Debug, thiserror::Error)]
pub enum RankError {
    /// Returned when an estimator is given a graph without pages.
    #[error("link graph has no pages")]
    EmptyGraph,

    /// Returned when a page is not a key of the link graph.
    #[error("page not in link graph: {page}")]
    UnknownPage {
        /// The requested page.
        page: String,
    },

    /// Returned when the damping factor is outside (0, 1).
    #[error("invalid damping factor: {damping} (must be in (0, 1))")]
    InvalidDamping {
        /// The rejected damping factor.
        damping: f64,
    },

    /// Returned when the sampler is asked for zero samples.
    #[error("invalid sample count: {samples} (must be at least 1)")]
    InvalidSampleCount {
        /// The rejected sample count.
        samples: usize,
    },

    /// Returned when the convergence threshold is not finite and positive.
    #[error("invalid convergence threshold: {epsilon} (must be finite and > 0)")]
    InvalidEpsilon {
        /// The rejected threshold.
        epsilon: f64,
    },

    /// Returned when the iterative estimator runs out of passes.
    #[error("no convergence after {passes} passes (largest change {max_delta})")]
    NotConverged {
        /// Number of passes run.
        passes: usize,
        /// Largest per-page change in the last pass.
        max_delta: f64,
    },

    /// Returned when a corpus file cannot be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// The unreadable file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Returned when the corpus directory cannot be listed.
    #[error("failed to walk corpus directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// Returned when the link pattern fails to compile.
    #[error("invalid link pattern: {0}")]
    Pattern(#[from] regex::Error),
}
