//! Example-page generation.
//!
//! Takes the parsed TOC sections and writes the examples area of the
//! site: one task-driven page per section, an index page linking them in
//! TOC order, and the `examples-sidebar.json` descriptor for navigation.
//!
//! ## Output Structure
//!
//! ```text
//! website/docs/examples/
//! ├── index.md                     # Examples index, one link per section
//! ├── 01-getting-started.md
//! ├── 02-billing-invoices.md
//! └── ...
//! website/docs/.vitepress/generated/
//! └── examples-sidebar.json        # { text, items: [{ text, link }] }
//! ```
//!
//! ## Ordering
//!
//! Per-section pages are written first; the index and the sidebar
//! descriptor land only after every page succeeded, so navigation never
//! points at a page a failed run did not produce.
//!
//! Rendering functions are pure (sections in, text out); all I/O lives
//! in [`run`] and [`write_site`]. Titles and bullets are trusted authored
//! content and are substituted verbatim — no markdown escaping.

use crate::config::SiteConfig;
use crate::slug;
use crate::toc::{self, Section, TocError};
use crate::types::{Sidebar, SidebarItem};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Toc(#[from] TocError),
}

/// Site-absolute link for a section's page.
fn section_link(section: &Section) -> String {
    format!("/examples/{}", slug::page_slug(section.index, &section.title))
}

/// Render one example page body.
///
/// Fixed template with the section's title and bullets substituted in.
/// `toc_label` is the provenance marker naming the TOC the page was
/// derived from.
pub fn render_page(section: &Section, toc_label: &str) -> String {
    let tasks = if section.bullets.is_empty() {
        "- (Tasks forthcoming)".to_string()
    } else {
        section
            .bullets
            .iter()
            .map(|b| format!("- {b}"))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let body = format!(
        "---\n\
         outline: deep\n\
         generated_from: {toc_label}\n\
         status: draft\n\
         ---\n\
         \n\
         # How-To: {title}\n\
         \n\
         This page contains task-driven examples for \"{title}\" based on the manual's Table of Contents.\n\
         \n\
         ## Tasks in this section\n\
         {tasks}\n\
         \n\
         ## Prerequisites\n\
         - Basic familiarity with the product UI\n\
         - Appropriate roles and permissions\n\
         \n\
         ## Step-by-step walkthroughs\n\
         - Coming soon: detailed steps with sample requests and responses.\n\
         \n\
         ## Common pitfalls\n\
         - To be documented as examples are filled in\n\
         \n\
         ## Related education\n\
         - See the Education section for concepts: /education/\n\
         \n",
        title = section.title,
    );

    collapse_blank_runs(&body)
}

/// Collapse every run of three or more consecutive newlines to exactly
/// two (one blank line).
///
/// Idempotent: the output never contains such a run, so applying this on
/// a later regeneration pass changes nothing.
pub fn collapse_blank_runs(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut newlines = 0usize;
    for c in text.chars() {
        if c == '\n' {
            newlines += 1;
            if newlines <= 2 {
                out.push(c);
            }
        } else {
            newlines = 0;
            out.push(c);
        }
    }
    out
}

/// Render the examples index page: fixed header plus one link line per
/// section, in TOC order.
pub fn render_index(sections: &[Section]) -> String {
    let links = sections
        .iter()
        .map(|s| format!("- [{}. {}]({})", s.index, s.title, section_link(s)))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "---\n\
         outline: deep\n\
         ---\n\
         \n\
         # Examples\n\
         \n\
         Task-driven examples derived from the manual's Table of Contents, in reading order.\n\
         \n\
         {links}\n"
    )
}

/// Build the examples sidebar descriptor: Overview first, then one entry
/// per section labeled `{index}. {title}`.
pub fn sidebar(sections: &[Section], label: &str) -> Sidebar {
    let mut items = vec![SidebarItem {
        text: "Overview".to_string(),
        link: "/examples/".to_string(),
    }];
    for section in sections {
        items.push(SidebarItem {
            text: format!("{}. {}", section.index, section.title),
            link: section_link(section),
        });
    }
    Sidebar {
        text: label.to_string(),
        items,
    }
}

/// Write all example output for the given sections under `root`.
///
/// Creates the destination directories if absent. Regeneration is full
/// and non-incremental: every run rewrites every file.
pub fn write_site(
    sections: &[Section],
    root: &Path,
    config: &SiteConfig,
) -> Result<(), GenerateError> {
    let examples_dir = root.join(&config.examples_dir);
    let generated_dir = root.join(&config.generated_dir);
    fs::create_dir_all(&examples_dir)?;
    fs::create_dir_all(&generated_dir)?;

    for section in sections {
        let stem = slug::page_slug(section.index, &section.title);
        fs::write(
            examples_dir.join(format!("{stem}.md")),
            render_page(section, config.toc_label()),
        )?;
    }

    fs::write(examples_dir.join("index.md"), render_index(sections))?;

    let descriptor = sidebar(sections, &config.labels.examples);
    fs::write(
        generated_dir.join("examples-sidebar.json"),
        serde_json::to_string_pretty(&descriptor)?,
    )?;
    Ok(())
}

/// Full examples run: resolve and parse the TOC, then write the site.
///
/// Returns the parsed sections for the CLI output layer. Input
/// resolution happens before any directory is created, so a missing TOC
/// leaves the output tree untouched.
pub fn run(root: &Path, config: &SiteConfig) -> Result<Vec<Section>, GenerateError> {
    let sections = toc::load(root, config)?;
    write_site(&sections, root, config)?;
    Ok(sections)
}
