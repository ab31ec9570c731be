//! Tree node types

use serde::Serialize;

/// A file or directory in the book tree.
///
/// Directory children keep the order the walker produced them in. File paths
/// are relative to the book root and always use `/` as separator, since they
/// end up verbatim in markdown links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeNode {
    File {
        name: String,
        path: String,
    },
    Dir {
        name: String,
        children: Vec<TreeNode>,
    },
}

impl TreeNode {
    pub fn file(name: impl Into<String>, path: impl Into<String>) -> Self {
        TreeNode::File {
            name: name.into(),
            path: path.into(),
        }
    }

    pub fn dir(name: impl Into<String>, children: Vec<TreeNode>) -> Self {
        TreeNode::Dir {
            name: name.into(),
            children,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            TreeNode::File { name, .. } => name,
            TreeNode::Dir { name, .. } => name,
        }
    }

    /// Children of a directory; empty for files.
    pub fn children(&self) -> &[TreeNode] {
        match self {
            TreeNode::Dir { children, .. } => children,
            TreeNode::File { .. } => &[],
        }
    }

    /// Link target of a file; `None` for directories.
    pub fn file_path(&self) -> Option<&str> {
        match self {
            TreeNode::File { path, .. } => Some(path),
            TreeNode::Dir { .. } => None,
        }
    }
}
