//! TreeWalker - reads a book folder into memory

use std::fs::DirEntry;
use std::path::Path;

use tracing::{debug, trace};

use super::config::{SortOrder, WalkerConfig};
use super::node::TreeNode;
use super::utils::{natural_cmp, should_ignore_name};

/// Tree walker that builds the full book tree in memory.
pub struct TreeWalker {
    config: WalkerConfig,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Walk `root` and return its tree, or `None` if it is not a readable directory.
    ///
    /// The root node is named after the directory (`.` when it has no name).
    /// A root without any accepted file still yields an empty `Dir`.
    pub fn walk(&self, root: &Path) -> Option<TreeNode> {
        if !root.is_dir() {
            return None;
        }

        let name = root
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| ".".to_string());

        let children = self.walk_children(root, "")?;
        Some(TreeNode::dir(name, children))
    }

    fn walk_children(&self, dir: &Path, rel: &str) -> Option<Vec<TreeNode>> {
        let entries = match std::fs::read_dir(dir) {
            Ok(e) => e,
            Err(err) => {
                debug!(path = %dir.display(), %err, "skipping unreadable directory");
                return None;
            }
        };

        let mut entries: Vec<_> = entries.filter_map(|e| e.ok()).collect();
        self.sort_entries(&mut entries);

        let mut children = Vec::new();
        for entry in entries {
            let path = entry.path();

            // Skip symlinks to prevent infinite loops and directory traversal issues
            if path.is_symlink() {
                continue;
            }

            let file_name = entry.file_name().to_string_lossy().to_string();
            if should_ignore_name(&file_name, &self.config.ignore_patterns) {
                trace!(name = %file_name, "skipping ignored entry");
                continue;
            }

            let rel_path = if rel.is_empty() {
                file_name.clone()
            } else {
                format!("{}/{}", rel, file_name)
            };

            if path.is_dir() {
                match self.walk_children(&path, &rel_path) {
                    Some(c) if !c.is_empty() => children.push(TreeNode::dir(file_name, c)),
                    _ => trace!(path = %rel_path, "pruning directory without content"),
                }
            } else if path.is_file() {
                if let Some(key) = self.file_key(&file_name) {
                    children.push(TreeNode::file(key, rel_path));
                }
            }
        }

        Some(children)
    }

    fn sort_entries(&self, entries: &mut [DirEntry]) {
        match self.config.sort {
            SortOrder::Name => entries.sort_by_key(|a| a.file_name()),
            SortOrder::Natural => entries.sort_by(|a, b| {
                natural_cmp(
                    &a.file_name().to_string_lossy(),
                    &b.file_name().to_string_lossy(),
                )
            }),
        }
    }

    /// Key under which a file appears in the tree, or `None` if it is not accepted.
    fn file_key(&self, file_name: &str) -> Option<String> {
        let path = Path::new(file_name);
        let ext = path.extension()?.to_str()?;
        if !self.config.accepts_extension(ext) {
            return None;
        }

        if self.config.strip_extension {
            path.file_stem().map(|s| s.to_string_lossy().to_string())
        } else {
            Some(file_name.to_string())
        }
    }
}
