use crate::RankDistribution;
use std::iter;

/// Renders `ranks` under `title`, one `  page: rank` line per page in
/// lexicographic order, ranks to four decimals.
pub fn render(title: &str, ranks: &RankDistribution) -> String {
    iter::once(title.to_string())
        .chain(ranks.iter().map(|(page, rank)| format!("  {page}: {rank:.4}")))
        .map(|line| line + "\n")
        .collect()
}
