//! Configuration types for the tree walker

/// Order in which directory entries are visited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Byte order of file names.
    #[default]
    Name,
    /// Digit runs compare numerically, so `2-setup` sorts before `10-deploy`.
    Natural,
}

/// Configuration for tree walking behavior.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Accepted file extensions, matched case-insensitively and without the dot.
    pub extensions: Vec<String>,
    /// Drop the extension from file keys (`intro.md` becomes `intro`).
    pub strip_extension: bool,
    pub sort: SortOrder,
    /// File or directory names to skip while reading, exact or glob.
    pub ignore_patterns: Vec<String>,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["md".to_string()],
            strip_extension: true,
            sort: SortOrder::Name,
            ignore_patterns: Vec::new(),
        }
    }
}

impl WalkerConfig {
    /// Check whether a file extension is accepted.
    pub fn accepts_extension(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext))
    }
}
