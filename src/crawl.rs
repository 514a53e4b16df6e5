use crate::*;
use regex::Regex;
use std::{
    collections::{BTreeMap, BTreeSet},
    fs,
    path::Path,
};
use tracing::debug;
use walkdir::WalkDir;

const ANCHOR_HREF: &str = r#"<a\s+(?:[^>]*?)href="([^"]*)""#;

/// Builds a link graph from the `.html` files directly inside `dir`.
///
/// Each file is a page named by its file name. Its links are the `href`
/// targets of its anchor tags; self-links and targets outside the directory
/// are dropped. Sub-directories are not visited.
pub fn crawl<P: AsRef<Path>>(dir: P) -> Result<LinkGraph, RankError> {
    let re = Regex::new(ANCHOR_HREF)?;
    let mut pages: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    let walk = WalkDir::new(dir.as_ref())
        .min_depth(1)
        .max_depth(1)
        .follow_links(true);
    for entry in walk {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        if !name.ends_with(".html") {
            continue;
        }
        let contents = fs::read_to_string(entry.path()).map_err(|source| RankError::Io {
            path: entry.path().to_path_buf(),
            source,
        })?;
        let links = extract_links(&re, &contents);
        debug!(page = name, links = links.len(), "parsed page");
        pages.insert(name.to_string(), links);
    }
    Ok(LinkGraph::from_links(pages))
}

fn extract_links(re: &Regex, contents: &str) -> BTreeSet<String> {
    re.captures_iter(contents)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
