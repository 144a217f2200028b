//! Generator configuration.
//!
//! An optional `manualgen.toml` at the repository root overrides the
//! stock paths and labels. Config files are sparse — override just the
//! values you want:
//!
//! ```toml
//! # Only move the generated artifacts
//! generated_dir = "website/docs/.vitepress/generated"
//! ```
//!
//! Unknown keys are rejected to catch typos early. When the file is
//! absent the stock defaults apply, which match the repository layout the
//! generators were built for (see [`stock_config_toml`]).

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Config file name, looked up in the repository root.
pub const CONFIG_FILE: &str = "manualgen.toml";

/// Generator configuration loaded from `manualgen.toml`.
///
/// All fields have defaults; user config files need only specify the
/// values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Candidate TOC locations relative to the root, tried in order.
    pub toc_candidates: Vec<String>,
    /// Candidate chapter directories relative to the root, tried in order.
    pub chapters_candidates: Vec<String>,
    /// Output directory for generated example pages.
    pub examples_dir: String,
    /// Output directory for synced chapter pages.
    pub education_dir: String,
    /// Output directory for sidebar descriptor JSON files.
    pub generated_dir: String,
    /// Sidebar group labels.
    pub labels: LabelsConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LabelsConfig {
    /// Group label for the examples sidebar.
    pub examples: String,
    /// Group label for the education sidebar.
    pub education: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            toc_candidates: vec![
                "docs/manual/TOC.md".to_string(),
                "docs-site-export/docs/manual/TOC.md".to_string(),
            ],
            chapters_candidates: vec![
                "docs/manual/chapters".to_string(),
                "docs-site-export/docs/manual/chapters".to_string(),
            ],
            examples_dir: "website/docs/examples".to_string(),
            education_dir: "website/docs/education".to_string(),
            generated_dir: "website/docs/.vitepress/generated".to_string(),
            labels: LabelsConfig::default(),
        }
    }
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self {
            examples: "Examples".to_string(),
            education: "Education".to_string(),
        }
    }
}

impl SiteConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.toc_candidates.is_empty() {
            return Err(ConfigError::Validation(
                "toc_candidates must list at least one path".to_string(),
            ));
        }
        if self.chapters_candidates.is_empty() {
            return Err(ConfigError::Validation(
                "chapters_candidates must list at least one path".to_string(),
            ));
        }
        for (key, value) in [
            ("examples_dir", &self.examples_dir),
            ("education_dir", &self.education_dir),
            ("generated_dir", &self.generated_dir),
        ] {
            if value.is_empty() {
                return Err(ConfigError::Validation(format!("{key} must not be empty")));
            }
        }
        Ok(())
    }

    /// The provenance label written into generated front matter.
    ///
    /// Always the first (live-tree) candidate, regardless of which one
    /// actually resolved — output bytes are identical whether a run used
    /// the live tree or the exported copy.
    pub fn toc_label(&self) -> &str {
        self.toc_candidates
            .first()
            .map(String::as_str)
            .unwrap_or("docs/manual/TOC.md")
    }
}

/// Load `manualgen.toml` from `root`, falling back to stock defaults
/// when the file does not exist.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let path = root.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(SiteConfig::default());
    }
    let raw = fs::read_to_string(&path)?;
    let config: SiteConfig = toml::from_str(&raw)?;
    config.validate()?;
    Ok(config)
}

/// A fully documented stock config, printed by `manualgen gen-config`.
pub fn stock_config_toml() -> &'static str {
    r#"# manualgen configuration. All options are optional — the defaults
# shown below apply when a key (or this whole file) is absent.
# Place this file as manualgen.toml at the repository root.

# Candidate TOC locations, tried in order. The live source tree comes
# first; the exported site copy is the fallback.
toc_candidates = [
    "docs/manual/TOC.md",
    "docs-site-export/docs/manual/TOC.md",
]

# Candidate chapter directories, tried in the same order.
chapters_candidates = [
    "docs/manual/chapters",
    "docs-site-export/docs/manual/chapters",
]

# Output directory for generated example pages.
examples_dir = "website/docs/examples"

# Output directory for synced chapter pages.
education_dir = "website/docs/education"

# Output directory for sidebar descriptor JSON files.
generated_dir = "website/docs/.vitepress/generated"

[labels]
examples = "Examples"    # Sidebar group label for example pages
education = "Education"  # Sidebar group label for chapter pages
"#
}
