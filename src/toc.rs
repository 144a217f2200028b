//! Manual TOC parsing.
//!
//! The table of contents is a plain-text outline maintained by the
//! manual's authors:
//!
//! ```text
//! Product Manual — Table of Contents
//!
//! 1. Getting Started
//!    - Sign in for the first time
//!    - Reset a password
//! 2. Billing & Invoices
//!    - Create an invoice
//! ```
//!
//! Numbered lines (`N. Title`) open a section; dash or `•` lines attach
//! task bullets to the open section; every other line is ignored. The
//! declared number is kept verbatim — duplicates, gaps, and out-of-order
//! numbering pass through, because the number is a label the authors
//! chose, not a position this parser assigns.
//!
//! Line classification lives in two standalone matchers so the scan
//! itself is a plain fold over lines with an explicit
//! `(done, open section)` accumulator, flushed once after the last line.

use crate::config::SiteConfig;
use crate::locate::{self, InputNotFound};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TocError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    NotFound(#[from] InputNotFound),
}

/// One numbered entry of the table of contents.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Declared ordinal from the heading line. A label, not a position.
    pub index: u32,
    /// Heading text with surrounding whitespace trimmed. Never empty.
    pub title: String,
    /// Task bullets in encounter order. May be empty.
    pub bullets: Vec<String>,
}

/// Match a heading line: optional indent, digits, `.`, whitespace, title.
///
/// `"  4.  Billing & Invoices  "` → `Some((4, "Billing & Invoices"))`.
/// Returns `None` for lines without a numeric prefix, without whitespace
/// after the dot, or with nothing but whitespace where the title goes.
fn match_heading(line: &str) -> Option<(u32, &str)> {
    let s = line.trim_start();
    let digits_end = s.find(|c: char| !c.is_ascii_digit())?;
    if digits_end == 0 {
        return None;
    }
    let (digits, rest) = s.split_at(digits_end);
    let rest = rest.strip_prefix('.')?;
    let title = rest.strip_prefix(|c: char| c.is_whitespace())?.trim();
    if title.is_empty() {
        return None;
    }
    Some((digits.parse().ok()?, title))
}

/// Match a bullet line: optional indent, `-` or `•`, whitespace, text.
///
/// `"  - Create an invoice  "` → `Some("Create an invoice")`.
fn match_bullet(line: &str) -> Option<&str> {
    let s = line.trim_start();
    let rest = s.strip_prefix(['-', '•'])?;
    let text = rest.strip_prefix(|c: char| c.is_whitespace())?.trim();
    if text.is_empty() {
        return None;
    }
    Some(text)
}

/// Parse the full TOC text into ordered sections.
///
/// Handles both `\n` and `\r\n` line endings. A document with no
/// headings parses to an empty vec — that is valid input, not an error.
/// Bullets encountered before the first heading have no section to
/// attach to and are discarded.
pub fn parse(input: &str) -> Vec<Section> {
    let (mut sections, open) = input.lines().fold(
        (Vec::new(), None::<Section>),
        |(mut done, mut open), line| {
            if let Some((index, title)) = match_heading(line) {
                if let Some(finished) = open.take() {
                    done.push(finished);
                }
                open = Some(Section {
                    index,
                    title: title.to_string(),
                    bullets: Vec::new(),
                });
            } else if let Some(text) = match_bullet(line)
                && let Some(section) = open.as_mut()
            {
                section.bullets.push(text.to_string());
            }
            (done, open)
        },
    );
    // The last section never sees a following heading; flush it here.
    if let Some(finished) = open {
        sections.push(finished);
    }
    sections
}

/// Candidate TOC locations under `root`, in priority order.
pub fn candidate_paths(root: &Path, config: &SiteConfig) -> Vec<PathBuf> {
    config.toc_candidates.iter().map(|c| root.join(c)).collect()
}

/// Resolve, read, and parse the TOC.
pub fn load(root: &Path, config: &SiteConfig) -> Result<Vec<Section>, TocError> {
    let candidates = candidate_paths(root, config);
    let toc_path = locate::resolve(&candidates)
        .ok_or_else(|| InputNotFound::new("manual TOC", candidates))?;
    let raw = fs::read_to_string(toc_path)?;
    Ok(parse(&raw))
}
