//! Directory tree reading
//!
//! `TreeWalker` reads a book folder into an in-memory `TreeNode` tree that the
//! catalog renderer consumes. Only files with an accepted extension survive,
//! and directories without any such file are pruned.

mod config;
mod node;
mod utils;
mod walker;

pub use config::{SortOrder, WalkerConfig};
pub use node::TreeNode;
pub use utils::{glob_match, natural_cmp, should_ignore_name};
pub use walker::TreeWalker;
