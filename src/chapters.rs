//! Chapter sync into the education section.
//!
//! The manual's chapters are individually authored markdown files named
//! `Chapter_NN_Some_Topic.md`. Syncing copies each one into the
//! education area under a clean slug, prepends a front-matter block when
//! the author did not write one, and emits the education index page and
//! `education-sidebar.json` descriptor.
//!
//! Chapters are processed in filename order — the `Chapter_NN_` prefix
//! makes lexicographic order the intended reading order. The prefix is
//! stripped from slugs (`Chapter_03_Billing.md` → `billing.md`) but the
//! original filename is recorded in the injected front matter as
//! `chapter_source`.
//!
//! A chapter without a leading front-matter block or without an H1 is
//! valid input: the block is injected, and the title falls back to the
//! filename with underscores as spaces.

use crate::config::SiteConfig;
use crate::locate::{self, InputNotFound};
use crate::slug;
use crate::types::{Sidebar, SidebarItem};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    NotFound(#[from] InputNotFound),
}

/// One chapter read from the manual.
#[derive(Debug, Clone)]
pub struct Chapter {
    /// Source filename, e.g. `Chapter_03_Billing.md`.
    pub file_name: String,
    /// Display title from the first H1, or the filename fallback.
    pub title: String,
    /// Output filename stem, `chapter_NN_` prefix stripped.
    pub slug: String,
    /// Raw authored content.
    pub body: String,
}

/// Derive a chapter's slug from its filename stem: lowercase, drop the
/// first `chapter_<digits>_` run, then slugify the remainder.
///
/// `"Chapter_03_Billing_Invoices"` → `"billing-invoices"`.
pub fn chapter_slug(stem: &str) -> String {
    slug::slugify(&strip_chapter_prefix(&stem.to_lowercase()))
}

fn strip_chapter_prefix(stem: &str) -> String {
    if let Some(pos) = stem.find("chapter_") {
        let after = &stem[pos + "chapter_".len()..];
        let digits = after.chars().take_while(char::is_ascii_digit).count();
        if digits > 0
            && let Some(rest) = after[digits..].strip_prefix('_')
        {
            return format!("{}{rest}", &stem[..pos]);
        }
    }
    stem.to_string()
}

/// Display title: first markdown H1 anywhere in the file, or the
/// filename with underscores as spaces when no H1 exists.
fn chapter_title(content: &str, file_name: &str) -> String {
    content
        .lines()
        .find_map(|line| {
            line.strip_prefix('#')
                .and_then(|rest| rest.strip_prefix(|c: char| c.is_whitespace()))
        })
        .map(|title| title.trim().to_string())
        .unwrap_or_else(|| file_name.trim_end_matches(".md").replace('_', " "))
}

/// Prepend the standard front-matter block unless the author already
/// wrote one (content starting with `---`).
fn with_front_matter(content: &str, file_name: &str) -> String {
    if content.starts_with("---") {
        content.to_string()
    } else {
        format!("---\noutline: deep\nchapter_source: {file_name}\n---\n\n{content}")
    }
}

/// Site-absolute link for a chapter's page.
fn chapter_link(chapter: &Chapter) -> String {
    format!("/education/{}", chapter.slug)
}

/// Render the education index page: fixed header plus one link line per
/// chapter, in filename order.
fn render_index(chapters: &[Chapter]) -> String {
    let links = chapters
        .iter()
        .map(|c| format!("- [{}]({})", c.title, chapter_link(c)))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "---\n\
         outline: deep\n\
         ---\n\
         \n\
         # Education\n\
         \n\
         Below are the educational chapters imported from the manual.\n\
         \n\
         {links}\n"
    )
}

/// Build the education sidebar descriptor: Overview first, then one
/// entry per chapter.
fn sidebar(chapters: &[Chapter], label: &str) -> Sidebar {
    let mut items = vec![SidebarItem {
        text: "Overview".to_string(),
        link: "/education/".to_string(),
    }];
    for chapter in chapters {
        items.push(SidebarItem {
            text: chapter.title.clone(),
            link: chapter_link(chapter),
        });
    }
    Sidebar {
        text: label.to_string(),
        items,
    }
}

/// Candidate chapter directories under `root`, in priority order.
pub fn candidate_paths(root: &Path, config: &SiteConfig) -> Vec<PathBuf> {
    config
        .chapters_candidates
        .iter()
        .map(|c| root.join(c))
        .collect()
}

/// Resolve the chapters directory and read every chapter, in filename
/// order. Read-only: used by both the sync run and `check`.
pub fn load(root: &Path, config: &SiteConfig) -> Result<Vec<Chapter>, SyncError> {
    let candidates = candidate_paths(root, config);
    let chapters_dir = locate::resolve(&candidates)
        .ok_or_else(|| InputNotFound::new("manual chapters", candidates))?;

    let mut files: Vec<PathBuf> = fs::read_dir(&chapters_dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.is_file()
                && p.extension()
                    .map(|e| e.eq_ignore_ascii_case("md"))
                    .unwrap_or(false)
        })
        .collect();
    files.sort();

    let mut chapters = Vec::new();
    for path in &files {
        let file_name = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let body = fs::read_to_string(path)?;
        let title = chapter_title(&body, &file_name);
        chapters.push(Chapter {
            slug: chapter_slug(&stem),
            title,
            file_name,
            body,
        });
    }
    Ok(chapters)
}

/// Full sync run: load every chapter, write the education pages, then
/// the index and sidebar descriptor.
pub fn run(root: &Path, config: &SiteConfig) -> Result<Vec<Chapter>, SyncError> {
    let chapters = load(root, config)?;

    let education_dir = root.join(&config.education_dir);
    let generated_dir = root.join(&config.generated_dir);
    fs::create_dir_all(&education_dir)?;
    fs::create_dir_all(&generated_dir)?;

    for chapter in &chapters {
        fs::write(
            education_dir.join(format!("{}.md", chapter.slug)),
            with_front_matter(&chapter.body, &chapter.file_name),
        )?;
    }

    fs::write(education_dir.join("index.md"), render_index(&chapters))?;

    let descriptor = sidebar(&chapters, &config.labels.education);
    fs::write(
        generated_dir.join("education-sidebar.json"),
        serde_json::to_string_pretty(&descriptor)?,
    )?;
    Ok(chapters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_chapters(files: &[(&str, &str)]) -> TempDir {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("docs/manual/chapters");
        fs::create_dir_all(&dir).unwrap();
        for (name, content) in files {
            fs::write(dir.join(name), content).unwrap();
        }
        tmp
    }

    fn config() -> SiteConfig {
        SiteConfig::default()
    }

    // =========================================================================
    // Slug and title tests
    // =========================================================================

    #[test]
    fn slug_strips_chapter_prefix() {
        assert_eq!(chapter_slug("Chapter_03_Billing_Invoices"), "billing-invoices");
    }

    #[test]
    fn slug_without_prefix_just_slugifies() {
        assert_eq!(chapter_slug("Appendix_A"), "appendix-a");
    }

    #[test]
    fn slug_prefix_requires_digits_and_trailing_underscore() {
        assert_eq!(chapter_slug("Chapter_Notes"), "chapter-notes");
        assert_eq!(chapter_slug("Chapter_07"), "chapter-07");
    }

    #[test]
    fn title_from_first_h1() {
        let title = chapter_title("intro text\n\n# Billing Basics\n\nmore", "Chapter_03_Billing.md");
        assert_eq!(title, "Billing Basics");
    }

    #[test]
    fn subheadings_are_not_titles() {
        let title = chapter_title("## Not a title\n", "Chapter_01_Intro.md");
        assert_eq!(title, "Chapter 01 Intro");
    }

    #[test]
    fn title_falls_back_to_filename() {
        assert_eq!(chapter_title("no heading here", "Chapter_01_Getting_Started.md"), "Chapter 01 Getting Started");
    }

    // =========================================================================
    // Front matter tests
    // =========================================================================

    #[test]
    fn front_matter_injected_when_absent() {
        let out = with_front_matter("# Intro\n\nBody.\n", "Chapter_01_Intro.md");
        assert!(out.starts_with("---\noutline: deep\nchapter_source: Chapter_01_Intro.md\n---\n\n# Intro"));
    }

    #[test]
    fn existing_front_matter_kept_verbatim() {
        let authored = "---\noutline: deep\ncustom: true\n---\n\n# Intro\n";
        assert_eq!(with_front_matter(authored, "Chapter_01_Intro.md"), authored);
    }

    // =========================================================================
    // Sync run tests
    // =========================================================================

    #[test]
    fn sync_writes_page_per_chapter_plus_index() {
        let tmp = setup_chapters(&[
            ("Chapter_01_Getting_Started.md", "# Getting Started\n\nWelcome.\n"),
            ("Chapter_02_Billing.md", "# Billing\n\nInvoices.\n"),
        ]);
        let chapters = run(tmp.path(), &config()).unwrap();
        assert_eq!(chapters.len(), 2);

        let education = tmp.path().join("website/docs/education");
        assert!(education.join("getting-started.md").exists());
        assert!(education.join("billing.md").exists());
        assert!(education.join("index.md").exists());
    }

    #[test]
    fn sync_orders_by_filename() {
        let tmp = setup_chapters(&[
            ("Chapter_02_Billing.md", "# Billing\n"),
            ("Chapter_01_Intro.md", "# Intro\n"),
        ]);
        let chapters = run(tmp.path(), &config()).unwrap();
        let titles: Vec<&str> = chapters.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Intro", "Billing"]);
    }

    #[test]
    fn sync_injects_chapter_source() {
        let tmp = setup_chapters(&[("Chapter_01_Intro.md", "# Intro\n\nBody.\n")]);
        run(tmp.path(), &config()).unwrap();

        let page =
            fs::read_to_string(tmp.path().join("website/docs/education/intro.md")).unwrap();
        assert!(page.starts_with("---\n"));
        assert!(page.contains("chapter_source: Chapter_01_Intro.md"));
        assert!(page.contains("# Intro"));
    }

    #[test]
    fn sync_sidebar_overview_first() {
        let tmp = setup_chapters(&[("Chapter_01_Intro.md", "# Intro\n")]);
        run(tmp.path(), &config()).unwrap();

        let raw = fs::read_to_string(
            tmp.path()
                .join("website/docs/.vitepress/generated/education-sidebar.json"),
        )
        .unwrap();
        let descriptor: Sidebar = serde_json::from_str(&raw).unwrap();
        assert_eq!(descriptor.text, "Education");
        assert_eq!(descriptor.items[0].text, "Overview");
        assert_eq!(descriptor.items[0].link, "/education/");
        assert_eq!(descriptor.items[1].text, "Intro");
        assert_eq!(descriptor.items[1].link, "/education/intro");
    }

    #[test]
    fn non_markdown_files_ignored() {
        let tmp = setup_chapters(&[
            ("Chapter_01_Intro.md", "# Intro\n"),
            ("notes.txt", "scratch"),
        ]);
        let chapters = run(tmp.path(), &config()).unwrap();
        assert_eq!(chapters.len(), 1);
    }

    #[test]
    fn missing_chapters_dir_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        let result = run(tmp.path(), &config());
        assert!(matches!(result, Err(SyncError::NotFound(_))));
        assert!(!tmp.path().join("website").exists());
    }

    #[test]
    fn export_copy_used_as_fallback() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("docs-site-export/docs/manual/chapters");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("Chapter_01_Intro.md"), "# Intro\n").unwrap();

        let chapters = run(tmp.path(), &config()).unwrap();
        assert_eq!(chapters.len(), 1);
        assert!(tmp.path().join("website/docs/education/intro.md").exists());
    }
}
