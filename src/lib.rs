//! booksum - generate a SUMMARY.md table of contents from a folder of markdown

pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod summary;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use catalog::{CatalogRenderer, IgnoreSet, NameFormatter, filter_rules, render};
pub use config::{BookConfig, CatalogFilter, Overrides, SummaryOptions};
pub use error::{Error, Result};
pub use output::{print_error, print_json, print_success, print_summary};
pub use summary::{Generated, build_summary, generate, read_tree, write_summary};
pub use tree::{SortOrder, TreeNode, TreeWalker, WalkerConfig};
