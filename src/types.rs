//! Sidebar descriptor types shared by both generators.
//!
//! These are serialized to JSON under the generated-artifacts directory
//! and consumed by the site renderer's navigation, so the field names are
//! part of the output contract.

use serde::{Deserialize, Serialize};

/// One navigable entry: display label plus site-absolute link.
///
/// Never mutated after creation — entries are derived in sequence order
/// and serialized as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SidebarItem {
    pub text: String,
    pub link: String,
}

/// A labeled group of page links, one per generated sidebar file.
///
/// `items` always starts with an Overview entry pointing at the group's
/// index page, followed by one entry per page in sequence order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sidebar {
    pub text: String,
    pub items: Vec<SidebarItem>,
}
