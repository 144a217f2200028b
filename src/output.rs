//! CLI output formatting for both generators.
//!
//! Each generator has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.
//!
//! Output is information-first: each line leads with the page's identity
//! (index and title) and shows where it landed, ending with a one-line
//! count summary.
//!
//! ```text
//! 01 Getting Started → examples/01-getting-started.md (2 tasks)
//! 04 Billing & Invoices → examples/04-billing-invoices.md (no tasks yet)
//! Generated 2 example pages from docs/manual/TOC.md
//! ```

use crate::chapters::Chapter;
use crate::slug;
use crate::toc::Section;

fn task_count(n: usize) -> String {
    match n {
        0 => "no tasks yet".to_string(),
        1 => "1 task".to_string(),
        n => format!("{n} tasks"),
    }
}

/// Format examples output: one line per section page, then the summary.
pub fn format_examples_output(sections: &[Section], toc_label: &str) -> Vec<String> {
    let mut lines = Vec::new();
    for section in sections {
        let stem = slug::page_slug(section.index, &section.title);
        lines.push(format!(
            "{:02} {} → examples/{stem}.md ({})",
            section.index,
            section.title,
            task_count(section.bullets.len()),
        ));
    }
    lines.push(format!(
        "Generated {} example pages from {toc_label}",
        sections.len()
    ));
    lines
}

pub fn print_examples_output(sections: &[Section], toc_label: &str) {
    for line in format_examples_output(sections, toc_label) {
        println!("{line}");
    }
}

/// Format chapter sync output: one line per chapter, then the summary.
pub fn format_chapters_output(chapters: &[Chapter]) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, chapter) in chapters.iter().enumerate() {
        lines.push(format!(
            "{:02} {} → education/{}.md",
            i + 1,
            chapter.title,
            chapter.slug,
        ));
    }
    lines.push(format!("Synced {} chapters into /education", chapters.len()));
    lines
}

pub fn print_chapters_output(chapters: &[Chapter]) {
    for line in format_chapters_output(chapters) {
        println!("{line}");
    }
}
