//! Project configuration
//!
//! Defaults come from an optional `book.json` in the book root. Explicit
//! `Overrides` (usually from the command line) replace them field by field,
//! and `BookConfig::resolve` produces the immutable `SummaryOptions` that the
//! renderer threads through its traversal.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

/// Name of the project config file looked up in the book root.
pub const CONFIG_FILE: &str = "book.json";

pub const DEFAULT_TITLE: &str = "Your Book Title";
pub const DEFAULT_OUTPUT_FILE: &str = "SUMMARY.md";

/// Which top-level entries of the book make it into the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawCatalog")]
pub enum CatalogFilter {
    #[default]
    All,
    /// Only these top-level names, compared exactly (case-sensitive).
    Only(Vec<String>),
}

impl CatalogFilter {
    /// Build a filter from a list of names; a lone `all` means no filtering.
    pub fn from_names(names: Vec<String>) -> Self {
        if names.len() == 1 && names[0] == "all" {
            CatalogFilter::All
        } else {
            CatalogFilter::Only(names)
        }
    }

    pub fn admits(&self, name: &str) -> bool {
        match self {
            CatalogFilter::All => true,
            CatalogFilter::Only(names) => names.iter().any(|n| n == name),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCatalog {
    Keyword(String),
    List(Vec<String>),
}

impl From<RawCatalog> for CatalogFilter {
    fn from(raw: RawCatalog) -> Self {
        match raw {
            RawCatalog::Keyword(s) => CatalogFilter::from_names(split_list(&s)),
            RawCatalog::List(names) => CatalogFilter::Only(names),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrList {
    String(String),
    List(Vec<String>),
}

impl From<StringOrList> for Vec<String> {
    fn from(raw: StringOrList) -> Self {
        match raw {
            StringOrList::String(s) => split_list(&s),
            StringOrList::List(items) => items,
        }
    }
}

/// Split a comma-separated list, trimming items and dropping empty ones.
pub fn split_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Contents of `book.json`. Unknown keys are ignored so a full GitBook config
/// can be read as is. Missing or `null` values fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawBookConfig")]
pub struct BookConfig {
    pub title: String,
    pub output_file: String,
    pub catalog: CatalogFilter,
    pub ignores: Vec<String>,
    pub unchanged: Vec<String>,
    pub sorted_by: Option<String>,
    pub level_signs: Vec<String>,
}

#[derive(Deserialize)]
struct RawBookConfig {
    #[serde(default, alias = "bookname")]
    title: Option<String>,
    #[serde(default, rename = "outputfile")]
    output_file: Option<String>,
    #[serde(default)]
    catalog: Option<CatalogFilter>,
    #[serde(default)]
    ignores: Option<StringOrList>,
    #[serde(default)]
    unchanged: Option<StringOrList>,
    #[serde(default, rename = "sortedBy")]
    sorted_by: Option<String>,
    #[serde(default, rename = "levelsigns")]
    level_signs: Option<StringOrList>,
}

impl From<RawBookConfig> for BookConfig {
    fn from(raw: RawBookConfig) -> Self {
        let defaults = BookConfig::default();
        Self {
            title: raw.title.unwrap_or(defaults.title),
            output_file: raw.output_file.unwrap_or(defaults.output_file),
            catalog: raw.catalog.unwrap_or(defaults.catalog),
            ignores: raw.ignores.map(Into::into).unwrap_or(defaults.ignores),
            unchanged: raw.unchanged.map(Into::into).unwrap_or(defaults.unchanged),
            sorted_by: raw.sorted_by,
            level_signs: raw.level_signs.map(Into::into).unwrap_or(defaults.level_signs),
        }
    }
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
            catalog: CatalogFilter::All,
            ignores: Vec::new(),
            unchanged: Vec::new(),
            sorted_by: None,
            level_signs: Vec::new(),
        }
    }
}

impl BookConfig {
    /// Load `book.json` from `root`, falling back to defaults when it is absent.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        if !path.is_file() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(&path).map_err(|source| Error::ConfigRead {
            path: path.clone(),
            source,
        })?;
        Self::parse(&text).map_err(|source| Error::ConfigParse { path, source })
    }

    pub fn parse(text: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Apply `overrides` on top of this config.
    pub fn resolve(self, overrides: Overrides) -> SummaryOptions {
        let sorted_by = overrides
            .sorted_by
            .or(self.sorted_by)
            .filter(|token| !token.is_empty());

        SummaryOptions {
            bookname: overrides.title.unwrap_or(self.title),
            output_file: overrides.output_file.unwrap_or(self.output_file),
            catalog: overrides.catalog.unwrap_or(self.catalog),
            ignores: overrides.ignores.unwrap_or(self.ignores),
            unchanged: overrides.unchanged.unwrap_or(self.unchanged),
            sorted_by,
            level_signs: overrides.level_signs.unwrap_or(self.level_signs),
        }
    }
}

/// Call-time options; each `Some` field replaces the config value.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub title: Option<String>,
    pub output_file: Option<String>,
    pub catalog: Option<CatalogFilter>,
    pub ignores: Option<Vec<String>>,
    pub unchanged: Option<Vec<String>>,
    pub sorted_by: Option<String>,
    pub level_signs: Option<Vec<String>>,
}

/// Fully resolved, immutable options for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryOptions {
    pub bookname: String,
    pub output_file: String,
    pub catalog: CatalogFilter,
    /// Names or glob patterns excluded at every level.
    pub ignores: Vec<String>,
    /// Names displayed verbatim, never start-cased.
    pub unchanged: Vec<String>,
    /// Token that ends a sortable prefix, e.g. `-` for `01-intro`.
    pub sorted_by: Option<String>,
    /// Heading marker per directory depth; `-` past the end.
    pub level_signs: Vec<String>,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        BookConfig::default().resolve(Overrides::default())
    }
}

impl SummaryOptions {
    /// Tree key of the output file, e.g. `SUMMARY` for `docs/SUMMARY.md`.
    pub fn output_stem(&self) -> &str {
        let name = Path::new(&self.output_file)
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or(&self.output_file);
        name.strip_suffix(".md").unwrap_or(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let options = SummaryOptions::default();
        assert_eq!(options.bookname, "Your Book Title");
        assert_eq!(options.output_file, "SUMMARY.md");
        assert_eq!(options.catalog, CatalogFilter::All);
        assert!(options.ignores.is_empty());
        assert!(options.sorted_by.is_none());
        assert!(options.level_signs.is_empty());
    }

    #[test]
    fn test_parse_full_config() {
        let config = BookConfig::parse(
            r###"{
                "title": "Handbook",
                "outputfile": "TOC.md",
                "catalog": ["guide", "api"],
                "ignores": ["drafts"],
                "unchanged": ["iOS"],
                "sortedBy": "-",
                "levelsigns": ["#", "##"],
                "plugins": ["search"]
            }"###,
        )
        .unwrap();

        assert_eq!(config.title, "Handbook");
        assert_eq!(config.output_file, "TOC.md");
        assert_eq!(
            config.catalog,
            CatalogFilter::Only(vec!["guide".to_string(), "api".to_string()])
        );
        assert_eq!(config.ignores, vec!["drafts"]);
        assert_eq!(config.unchanged, vec!["iOS"]);
        assert_eq!(config.sorted_by.as_deref(), Some("-"));
        assert_eq!(config.level_signs, vec!["#", "##"]);
    }

    #[test]
    fn test_parse_bookname_alias_and_string_lists() {
        let config = BookConfig::parse(
            r##"{"bookname": "Legacy", "catalog": "all", "levelsigns": "#,##,-"}"##,
        )
        .unwrap();

        assert_eq!(config.title, "Legacy");
        assert_eq!(config.catalog, CatalogFilter::All);
        assert_eq!(config.level_signs, vec!["#", "##", "-"]);
    }

    #[test]
    fn test_parse_missing_fields_use_defaults() {
        let config = BookConfig::parse("{}").unwrap();
        assert_eq!(config, BookConfig::default());
    }

    #[test]
    fn test_parse_null_values_use_defaults() {
        let config = BookConfig::parse(
            r#"{
                "title": null,
                "outputfile": null,
                "catalog": null,
                "ignores": null,
                "sortedBy": null,
                "levelsigns": null
            }"#,
        )
        .unwrap();
        assert_eq!(config, BookConfig::default());

        let config = BookConfig::parse(r#"{"title": "Kept", "unchanged": null}"#).unwrap();
        assert_eq!(config.title, "Kept");
        assert!(config.unchanged.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let config = BookConfig::load(dir.path()).unwrap();
        assert_eq!(config, BookConfig::default());
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "{ not json").unwrap();

        let err = BookConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }), "got {:?}", err);
    }

    #[test]
    fn test_overrides_replace_field_by_field() {
        let config = BookConfig {
            title: "From Config".to_string(),
            unchanged: vec!["API".to_string()],
            ..Default::default()
        };
        let options = config.resolve(Overrides {
            title: Some("From CLI".to_string()),
            ignores: Some(vec!["drafts".to_string()]),
            ..Default::default()
        });

        assert_eq!(options.bookname, "From CLI");
        assert_eq!(options.ignores, vec!["drafts"]);
        // Untouched fields keep the config value
        assert_eq!(options.unchanged, vec!["API"]);
        assert_eq!(options.output_file, "SUMMARY.md");
    }

    #[test]
    fn test_empty_sort_token_means_none() {
        let config = BookConfig::parse(r#"{"sortedBy": ""}"#).unwrap();
        assert!(config.resolve(Overrides::default()).sorted_by.is_none());
    }

    #[test]
    fn test_catalog_from_names() {
        assert_eq!(
            CatalogFilter::from_names(vec!["all".to_string()]),
            CatalogFilter::All
        );
        let only = CatalogFilter::from_names(vec!["chapterA".to_string()]);
        assert!(only.admits("chapterA"));
        assert!(!only.admits("chapterB"));
        // Exact match only
        assert!(!only.admits("chaptera"));
    }

    #[test]
    fn test_output_stem() {
        let mut options = SummaryOptions::default();
        assert_eq!(options.output_stem(), "SUMMARY");

        options.output_file = "docs/TOC.md".to_string();
        assert_eq!(options.output_stem(), "TOC");

        options.output_file = "contents.txt".to_string();
        assert_eq!(options.output_stem(), "contents.txt");
    }
}
