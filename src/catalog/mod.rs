//! Catalog rendering
//!
//! Turns a book tree into the text of a `SUMMARY.md`: a `# <title>` heading, a
//! blank line, then one indented line per rendered entry.
//!
//! A directory is presented in one of three ways, in priority order:
//!
//! - it contains a file named like itself (case-insensitive, with or without
//!   the sort prefix): that file becomes the directory's `*` link
//! - it contains a `readme` file (any case): that file becomes a `-` link
//! - otherwise a heading line using the level sign for its depth
//!
//! The file used as the directory's link is not listed again among its children.

mod filter;
mod name;

pub use filter::{IgnoreSet, RESERVED_DIRS, filter_rules, is_hidden_name};
pub use name::{NameFormatter, SortPrefix, contains_cjk, start_case};

use tracing::{debug, trace};

use crate::config::SummaryOptions;
use crate::error::{Error, Result};
use crate::tree::TreeNode;

/// Marker for file links and self-titled directories.
pub const FILE_MARKER: &str = "*  ";
/// Marker for directories linked through their readme (one space, unlike files).
pub const README_MARKER: &str = "- ";
/// Level sign used past the end of the configured list.
pub const DEFAULT_LEVEL_SIGN: &str = "-";

/// Render `tree` with `options`. Fails with `Error::NoContent` when nothing
/// survives top-level filtering.
pub fn render(tree: &TreeNode, options: &SummaryOptions) -> Result<String> {
    CatalogRenderer::new(options)?.render(tree)
}

/// How a directory shows up in the catalog.
#[derive(Debug, PartialEq, Eq)]
enum DirectoryTitle<'t> {
    SelfTitled { path: &'t str, skip: String },
    Readme { path: &'t str },
    Plain,
}

/// State for one render pass. Consumed by `render`.
pub struct CatalogRenderer<'a> {
    options: &'a SummaryOptions,
    names: NameFormatter<'a>,
    ignores: IgnoreSet,
    body: String,
}

impl<'a> CatalogRenderer<'a> {
    pub fn new(options: &'a SummaryOptions) -> Result<Self> {
        let mut ignores = IgnoreSet::new(options.ignores.iter().cloned());
        // A previous summary must not list itself
        ignores.insert(options.output_stem());

        Ok(Self {
            options,
            names: NameFormatter::new(options)?,
            ignores,
            body: String::new(),
        })
    }

    pub fn render(mut self, tree: &TreeNode) -> Result<String> {
        let entries = filter_rules(tree.children(), &self.options.catalog, &mut self.ignores);
        if entries.is_empty() {
            return Err(Error::NoContent);
        }

        self.work(entries, 0, None);

        Ok(format!("# {}\n\n{}", self.options.bookname, self.body))
    }

    /// Render `entries` at `depth`. `skip` names the file already used as the
    /// enclosing directory's link.
    fn work<'t, I>(&mut self, entries: I, depth: usize, skip: Option<&str>)
    where
        I: IntoIterator<Item = &'t TreeNode>,
    {
        for entry in entries {
            let key = entry.name();
            if self.ignores.contains(key) {
                trace!(name = key, "ignored");
                continue;
            }
            debug!("processing {}{}", "..".repeat(depth), key);

            match entry {
                TreeNode::Dir { children, .. } => {
                    let child_skip = match self.directory_title(key, children) {
                        DirectoryTitle::SelfTitled { path, skip } => {
                            self.push_link(depth, FILE_MARKER, key, path);
                            Some(skip)
                        }
                        DirectoryTitle::Readme { path } => {
                            self.push_link(depth, README_MARKER, key, path);
                            Some("readme".to_string())
                        }
                        DirectoryTitle::Plain => {
                            self.push_heading(depth, key);
                            None
                        }
                    };
                    self.work(children, depth + 2, child_skip.as_deref());
                }
                TreeNode::File { path, .. } => {
                    if skip.is_some_and(|s| s.to_lowercase() == key.to_lowercase()) {
                        trace!(name = key, "already rendered as directory link");
                        continue;
                    }
                    self.push_link(depth, FILE_MARKER, key, path);
                }
            }
        }
    }

    fn directory_title<'t>(&self, key: &str, children: &'t [TreeNode]) -> DirectoryTitle<'t> {
        let stripped = self.names.strip_sort_prefix(key);

        // The full name wins over the prefix-stripped one
        for candidate in [key, stripped] {
            if let Some(path) = find_file(children, candidate) {
                return DirectoryTitle::SelfTitled {
                    path,
                    skip: candidate.to_string(),
                };
            }
        }

        match find_file(children, "readme") {
            Some(path) => DirectoryTitle::Readme { path },
            None => DirectoryTitle::Plain,
        }
    }

    fn push_link(&mut self, depth: usize, marker: &str, key: &str, path: &str) {
        let name = self.names.pretty(key);
        self.body.push_str(&" ".repeat(depth));
        self.body.push_str(marker);
        self.body.push('[');
        self.body.push_str(&name);
        self.body.push_str("](");
        self.body.push_str(path);
        self.body.push_str(")\n");
    }

    fn push_heading(&mut self, depth: usize, key: &str) {
        let sign = self
            .options
            .level_signs
            .get(depth / 2)
            .map(String::as_str)
            .unwrap_or(DEFAULT_LEVEL_SIGN);

        self.ensure_blank_line();
        self.body.push_str(&" ".repeat(depth));
        self.body.push_str(sign);
        self.body.push(' ');
        self.body.push_str(&self.names.pretty(key));
        self.body.push_str("\n\n");
    }

    fn ensure_blank_line(&mut self) {
        if !self.body.is_empty() && !self.body.ends_with("\n\n") {
            self.body.push('\n');
        }
    }
}

/// Path of the first direct child file whose name equals `name` ignoring case.
fn find_file<'t>(children: &'t [TreeNode], name: &str) -> Option<&'t str> {
    let name = name.to_lowercase();
    children.iter().find_map(|child| match child {
        TreeNode::File { name: n, path } if n.to_lowercase() == name => Some(path.as_str()),
        _ => None,
    })
}
