//! # manualgen
//!
//! A minimal docs-site generator for product manuals. The manual is the
//! data source: a plain-text table of contents drives task-oriented
//! example pages, and individually authored chapter files become the
//! education section. Output is VitePress-ready markdown plus JSON
//! sidebar descriptors consumed by the site's navigation.
//!
//! # Architecture: Two Generators
//!
//! ```text
//! docs/manual/TOC.md       →  website/docs/examples/*.md
//!                             website/docs/.vitepress/generated/examples-sidebar.json
//! docs/manual/chapters/    →  website/docs/education/*.md
//!                             website/docs/.vitepress/generated/education-sidebar.json
//! ```
//!
//! Each generator is a self-contained batch job: resolve inputs, parse,
//! write every output, exit. Data flows strictly forward — parsing never
//! depends on what was previously generated, and a run regenerates
//! everything from scratch. Re-running on unchanged inputs produces
//! byte-identical files, so the recovery strategy for any failure is
//! simply "fix the input and re-run".
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`toc`] | Parses the TOC outline into ordered [`toc::Section`] records |
//! | [`generate`] | Renders example pages, the examples index, and the examples sidebar |
//! | [`chapters`] | Syncs chapter files into the education section with front matter |
//! | [`slug`] | Deterministic `{NN}-{title}` slug derivation |
//! | [`locate`] | Candidate-path input resolution (live tree, then exported copy) |
//! | [`config`] | Optional `manualgen.toml`: paths and sidebar labels |
//! | [`types`] | Sidebar descriptor types shared by both generators |
//! | [`output`] | CLI output formatting — per-page lines plus a count summary |
//!
//! # Design Decisions
//!
//! ## Candidate Input Paths
//!
//! The same binary runs against the live source tree and against a
//! previously exported copy of it, so every required input is resolved
//! through an ordered candidate list (live location first). Only when no
//! candidate exists does a run fail, and it fails before writing anything.
//!
//! ## The Index Is a Label
//!
//! Section numbers come straight from the TOC text. Duplicates, gaps, and
//! out-of-order numbering all pass through untouched — the number is part
//! of the section's identity, not an array position, and the authors'
//! ordering in the file is the ordering everywhere downstream.
//!
//! ## Last Write Wins on Slug Collisions
//!
//! Two sections that slugify identically write to the same file; the
//! later one lands. Deduplication would silently rename pages out from
//! under existing links, which is worse than the collision.

pub mod chapters;
pub mod config;
pub mod generate;
pub mod locate;
pub mod output;
pub mod slug;
pub mod toc;
pub mod types;
