//! Summary generation: config, walk, render, write

use std::path::{Path, PathBuf};

use tracing::info;

use crate::catalog::render;
use crate::config::{BookConfig, Overrides, SummaryOptions};
use crate::error::{Error, Result};
use crate::tree::{TreeNode, TreeWalker, WalkerConfig};

/// A rendered summary and where it belongs.
#[derive(Debug, Clone)]
pub struct Generated {
    pub path: PathBuf,
    pub content: String,
    pub options: SummaryOptions,
}

/// Load options for the book at `root`: `book.json` defaults, then `overrides`.
pub fn load_options(root: &Path, overrides: Overrides) -> Result<SummaryOptions> {
    Ok(BookConfig::load(root)?.resolve(overrides))
}

/// Read the book tree at `root`. A missing or empty book is `Error::NoContent`.
pub fn read_tree(root: &Path, walker_config: WalkerConfig) -> Result<TreeNode> {
    TreeWalker::new(walker_config)
        .walk(root)
        .ok_or(Error::NoContent)
}

/// Render the summary for the book at `root` without writing it.
pub fn build_summary(
    root: &Path,
    overrides: Overrides,
    walker_config: WalkerConfig,
) -> Result<Generated> {
    let options = load_options(root, overrides)?;
    let tree = read_tree(root, walker_config)?;
    let content = render(&tree, &options)?;

    Ok(Generated {
        path: output_path(root, &options),
        content,
        options,
    })
}

/// Where the summary is written: relative output paths resolve against `root`.
pub fn output_path(root: &Path, options: &SummaryOptions) -> PathBuf {
    let output = Path::new(&options.output_file);
    if output.is_absolute() {
        output.to_path_buf()
    } else {
        root.join(output)
    }
}

/// Write a generated summary, overwriting any existing file.
///
/// This is a single write, not an atomic replace: a failure part way through
/// can leave a truncated file behind.
pub fn write_summary(generated: &Generated) -> Result<()> {
    std::fs::write(&generated.path, &generated.content).map_err(|source| Error::Write {
        path: generated.path.clone(),
        source,
    })?;
    info!(path = %generated.path.display(), bytes = generated.content.len(), "summary written");
    Ok(())
}

/// Build and write the summary for the book at `root`.
pub fn generate(root: &Path, overrides: Overrides, walker_config: WalkerConfig) -> Result<Generated> {
    let generated = build_summary(root, overrides, walker_config)?;
    write_summary(&generated)?;
    Ok(generated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestBook;

    #[test]
    fn test_generate_writes_summary() {
        let book = TestBook::new();
        book.add_file("chapter1/README.md", "# Chapter 1");
        book.add_file("chapter1/intro.md", "Intro");

        let generated = generate(book.path(), Overrides::default(), WalkerConfig::default())
            .unwrap();

        assert_eq!(generated.path, book.path().join("SUMMARY.md"));
        assert_eq!(
            book.read("SUMMARY.md"),
            "# Your Book Title\n\n- [Chapter1](chapter1/README.md)\n  *  [Intro](chapter1/intro.md)\n"
        );
    }

    #[test]
    fn test_generate_uses_book_json_and_overrides() {
        let book = TestBook::new();
        book.write_config(r#"{"title": "Handbook", "outputfile": "TOC.md"}"#);
        book.add_file("intro.md", "Intro");

        let generated = generate(
            book.path(),
            Overrides {
                title: Some("Manual".to_string()),
                ..Default::default()
            },
            WalkerConfig::default(),
        )
        .unwrap();

        assert_eq!(generated.path, book.path().join("TOC.md"));
        assert!(generated.content.starts_with("# Manual\n\n"));
    }

    #[test]
    fn test_regenerating_does_not_list_previous_summary() {
        let book = TestBook::new();
        book.add_file("intro.md", "Intro");

        let first = generate(book.path(), Overrides::default(), WalkerConfig::default()).unwrap();
        let second = generate(book.path(), Overrides::default(), WalkerConfig::default()).unwrap();

        assert_eq!(first.content, second.content);
        assert!(!second.content.contains("SUMMARY"));
    }

    #[test]
    fn test_no_content_writes_nothing() {
        let book = TestBook::new();
        book.add_file("notes.txt", "not markdown");

        let err = generate(book.path(), Overrides::default(), WalkerConfig::default()).unwrap_err();

        assert!(matches!(err, Error::NoContent));
        assert!(!book.path().join("SUMMARY.md").exists());
    }

    #[test]
    fn test_missing_root_is_no_content() {
        let book = TestBook::new();
        let missing = book.path().join("missing");

        let err = build_summary(&missing, Overrides::default(), WalkerConfig::default())
            .unwrap_err();

        assert!(matches!(err, Error::NoContent));
    }

    #[test]
    fn test_write_failure_is_reported() {
        let book = TestBook::new();
        book.add_file("intro.md", "Intro");

        let generated = generate(
            book.path(),
            Overrides {
                output_file: Some("missing-dir/SUMMARY.md".to_string()),
                ..Default::default()
            },
            WalkerConfig::default(),
        );

        assert!(matches!(generated, Err(Error::Write { .. })));
    }

    #[test]
    fn test_output_path_absolute() {
        let options = SummaryOptions {
            output_file: "/tmp/out/SUMMARY.md".to_string(),
            ..Default::default()
        };
        assert_eq!(
            output_path(Path::new("/books/a"), &options),
            PathBuf::from("/tmp/out/SUMMARY.md")
        );
    }
}
