//! Slug derivation for generated pages.
//!
//! Example pages are keyed by `{NN}-{title-slug}`: the section's declared
//! index zero-padded to at least two digits, a dash, then the title
//! lowered and squeezed to `[a-z0-9]` runs joined by single dashes. The
//! slug doubles as the output filename stem and the URL path segment, so
//! it must be a pure function of `(index, title)` — same input, same
//! slug, every run.

/// Slugify arbitrary text: lowercase, every maximal run of characters
/// outside `[a-z0-9]` collapses to a single `-`, leading and trailing
/// dashes stripped.
///
/// - `"User & Roles!!"` → `"user-roles"`
/// - `"  Setup  "` → `"setup"`
/// - `"Déjà Vu"` → `"d-j-vu"` (non-ASCII is outside the slug alphabet)
pub fn slugify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut gap = false;
    for c in text.chars() {
        let c = c.to_ascii_lowercase();
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if gap && !out.is_empty() {
                out.push('-');
            }
            gap = false;
            out.push(c);
        } else {
            gap = true;
        }
    }
    out
}

/// Derive the page slug for a section: `{index:02}-{slugified title}`.
///
/// Indices of 100 and above keep all their digits; padding only ever
/// widens. Collisions between sections are possible and deliberate —
/// see the crate docs.
pub fn page_slug(index: u32, title: &str) -> String {
    format!("{index:02}-{}", slugify(title))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn punctuation_collapses_to_single_dash() {
        assert_eq!(slugify("User & Roles!!"), "user-roles");
    }

    #[test]
    fn surrounding_whitespace_stripped() {
        assert_eq!(slugify("  Setup  "), "setup");
    }

    #[test]
    fn already_clean_title_unchanged() {
        assert_eq!(slugify("billing"), "billing");
    }

    #[test]
    fn mixed_case_lowered() {
        assert_eq!(slugify("Getting Started"), "getting-started");
    }

    #[test]
    fn digits_kept() {
        assert_eq!(slugify("OAuth 2.0 Setup"), "oauth-2-0-setup");
    }

    #[test]
    fn non_ascii_treated_as_separator() {
        assert_eq!(slugify("Déjà Vu"), "d-j-vu");
    }

    #[test]
    fn all_punctuation_yields_empty() {
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn page_slug_pads_to_two_digits() {
        assert_eq!(page_slug(3, "User & Roles!!"), "03-user-roles");
        assert_eq!(page_slug(12, "  Setup  "), "12-setup");
    }

    #[test]
    fn page_slug_keeps_wide_indices() {
        assert_eq!(page_slug(112, "Appendix"), "112-appendix");
    }

    #[test]
    fn page_slug_is_deterministic() {
        assert_eq!(page_slug(4, "Billing & Invoices"), page_slug(4, "Billing & Invoices"));
    }
}
