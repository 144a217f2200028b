//! Candidate-path input resolution.
//!
//! The generators run both against the live source tree and against a
//! previously exported copy of it, so required inputs are never a single
//! hard-coded path. Each input has an ordered list of candidate
//! locations; the first that exists wins. When none exist the run aborts
//! with [`InputNotFound`], whose message names every path tried.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// A required input is missing from every configured candidate location.
///
/// Fatal: raised before any output is written, so a failed run leaves
/// the output tree untouched.
#[derive(Error, Debug)]
#[error("cannot find {what} in any of: {}", format_candidates(.candidates))]
pub struct InputNotFound {
    what: String,
    candidates: Vec<PathBuf>,
}

impl InputNotFound {
    pub fn new(what: &str, candidates: Vec<PathBuf>) -> Self {
        Self {
            what: what.to_string(),
            candidates,
        }
    }
}

fn format_candidates(candidates: &[PathBuf]) -> String {
    candidates
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Pick the first candidate satisfying `exists`.
///
/// The predicate is injected so resolution stays a pure function over
/// the candidate list — unit tests probe priority order without touching
/// the filesystem.
pub fn resolve_with<F>(candidates: &[PathBuf], exists: F) -> Option<PathBuf>
where
    F: Fn(&Path) -> bool,
{
    candidates.iter().find(|p| exists(p.as_path())).cloned()
}

/// Resolve against the real filesystem.
pub fn resolve(candidates: &[PathBuf]) -> Option<PathBuf> {
    resolve_with(candidates, Path::exists)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn first_existing_candidate_wins() {
        let candidates = paths(&["a/TOC.md", "b/TOC.md"]);
        let found = resolve_with(&candidates, |p| p.starts_with("b"));
        assert_eq!(found, Some(PathBuf::from("b/TOC.md")));
    }

    #[test]
    fn earlier_candidate_shadows_later() {
        let candidates = paths(&["a/TOC.md", "b/TOC.md"]);
        let found = resolve_with(&candidates, |_| true);
        assert_eq!(found, Some(PathBuf::from("a/TOC.md")));
    }

    #[test]
    fn none_when_nothing_exists() {
        let candidates = paths(&["a/TOC.md", "b/TOC.md"]);
        assert_eq!(resolve_with(&candidates, |_| false), None);
    }

    #[test]
    fn empty_candidate_list_resolves_to_none() {
        assert_eq!(resolve_with(&[], |_| true), None);
    }

    #[test]
    fn error_message_lists_every_candidate() {
        let err = InputNotFound::new("manual TOC", paths(&["a/TOC.md", "b/TOC.md"]));
        let msg = err.to_string();
        assert!(msg.contains("manual TOC"));
        assert!(msg.contains("a/TOC.md"));
        assert!(msg.contains("b/TOC.md"));
    }
}
