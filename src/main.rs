//! CLI entry point for booksum

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use booksum::logging::setup_logging;
use booksum::{
    CatalogFilter, Overrides, SortOrder, WalkerConfig, build_summary, generate, print_error,
    print_json, print_success, print_summary, read_tree,
};
use clap::{Parser, ValueEnum};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Status messages go to stderr
            std::io::stderr().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "booksum")]
#[command(about = "Generate a SUMMARY.md table of contents from a folder of markdown")]
#[command(version)]
struct Args {
    /// Book root directory
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Book title used for the summary heading
    #[arg(short = 't', long = "title")]
    title: Option<String>,

    /// Output file, relative to the book root (default: SUMMARY.md)
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Top-level entries to include, comma separated, or "all"
    #[arg(short = 'c', long = "catalog", value_delimiter = ',')]
    catalog: Vec<String>,

    /// Ignore entries matching name or glob pattern (can be used multiple times)
    #[arg(short = 'i', long = "ignore", value_delimiter = ',')]
    ignore: Vec<String>,

    /// Skip files or folders matching name or glob pattern while reading (e.g. "*.draft.md")
    #[arg(short = 'x', long = "exclude", value_delimiter = ',')]
    exclude: Vec<String>,

    /// Names shown exactly as written, never start-cased
    #[arg(short = 'u', long = "unchanged", value_delimiter = ',')]
    unchanged: Vec<String>,

    /// Token ending a sort prefix to strip from names (e.g. "-" for 01-intro)
    #[arg(short = 's', long = "sorted-by", value_name = "TOKEN")]
    sorted_by: Option<String>,

    /// Heading markers per directory depth, comma separated (e.g. "#,##")
    #[arg(short = 'l', long = "level-signs", value_delimiter = ',')]
    level_signs: Vec<String>,

    /// Order entries with numbers compared by value (2-x before 10-x)
    #[arg(short = 'n', long = "natural-sort")]
    natural_sort: bool,

    /// Print the summary to stdout instead of writing the output file
    #[arg(long = "stdout", conflicts_with = "json")]
    stdout: bool,

    /// Print the scanned book tree as JSON and exit
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            title: self.title.clone(),
            output_file: self.output.clone(),
            catalog: non_empty(&self.catalog).map(CatalogFilter::from_names),
            ignores: non_empty(&self.ignore),
            unchanged: non_empty(&self.unchanged),
            sorted_by: self.sorted_by.clone(),
            level_signs: non_empty(&self.level_signs),
        }
    }

    fn walker_config(&self) -> WalkerConfig {
        WalkerConfig {
            sort: if self.natural_sort {
                SortOrder::Natural
            } else {
                SortOrder::Name
            },
            ignore_patterns: self.exclude.clone(),
            ..Default::default()
        }
    }
}

fn non_empty(values: &[String]) -> Option<Vec<String>> {
    if values.is_empty() {
        None
    } else {
        Some(values.to_vec())
    }
}

/// Report an error on stderr and exit with status 1.
fn fail(message: impl std::fmt::Display, use_color: bool) -> ! {
    let message = format!("booksum: {}", message);
    if print_error(&message, use_color).is_err() {
        eprintln!("{}", message);
    }
    process::exit(1);
}

fn main() {
    let args = Args::parse();
    setup_logging("warn");

    let use_color = should_use_color(args.color);

    if args.json {
        let tree =
            read_tree(&args.path, args.walker_config()).unwrap_or_else(|e| fail(e, use_color));
        if let Err(e) = print_json(&tree) {
            fail(format!("error writing output: {}", e), use_color);
        }
        return;
    }

    if args.stdout {
        let generated = build_summary(&args.path, args.overrides(), args.walker_config())
            .unwrap_or_else(|e| fail(e, use_color));
        if let Err(e) = print_summary(&generated.content) {
            fail(format!("error writing output: {}", e), use_color);
        }
        return;
    }

    let generated = generate(&args.path, args.overrides(), args.walker_config())
        .unwrap_or_else(|e| fail(e, use_color));

    let message = format!(
        "Finished, generated {} successfully.",
        generated.path.display()
    );
    if print_success(&message, use_color).is_err() {
        eprintln!("{}", message);
    }
}
