//! Top-level filtering and the ignore set

use tracing::debug;

use crate::config::CatalogFilter;
use crate::tree::{TreeNode, glob_match};

/// Build and dependency folders that never belong in a catalog.
pub const RESERVED_DIRS: &[&str] = &["_book", "node_modules"];

/// Hidden (leading dot) or reserved build/dependency names.
pub fn is_hidden_name(name: &str) -> bool {
    name.starts_with('.') || RESERVED_DIRS.contains(&name)
}

/// Names excluded from the catalog. Entries are exact names or glob patterns.
///
/// The set only grows during a render.
#[derive(Debug, Clone, Default)]
pub struct IgnoreSet {
    patterns: Vec<String>,
}

impl IgnoreSet {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::default();
        for pattern in patterns {
            set.insert(pattern);
        }
        set
    }

    /// Add a pattern. Returns `false` if it was already present.
    pub fn insert(&mut self, pattern: impl Into<String>) -> bool {
        let pattern = pattern.into();
        if self.patterns.contains(&pattern) {
            return false;
        }
        self.patterns.push(pattern);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.patterns
            .iter()
            .any(|p| p == name || glob_match(p, name))
    }
}

/// Select the top-level entries to render.
///
/// Hidden and reserved names are first added to `ignores` in one pass over all
/// entries, so the result does not depend on where they appear. An entry is
/// then admitted if it is not ignored and the catalog filter accepts it.
/// Input order is kept.
pub fn filter_rules<'t>(
    entries: &'t [TreeNode],
    catalog: &CatalogFilter,
    ignores: &mut IgnoreSet,
) -> Vec<&'t TreeNode> {
    for entry in entries {
        if is_hidden_name(entry.name()) && ignores.insert(entry.name()) {
            debug!(name = entry.name(), "ignoring hidden entry");
        }
    }

    entries
        .iter()
        .filter(|entry| !ignores.contains(entry.name()) && catalog.admits(entry.name()))
        .collect()
}
