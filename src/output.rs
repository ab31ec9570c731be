//! Terminal output for the CLI
//!
//! Status messages go to stderr so that `--stdout` and `--json` output can be
//! piped without noise.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::TreeNode;

/// Print a green status line to stderr.
pub fn print_success(message: &str, use_color: bool) -> io::Result<()> {
    print_status(message, Color::Green, use_color)
}

/// Print a red status line to stderr.
pub fn print_error(message: &str, use_color: bool) -> io::Result<()> {
    print_status(message, Color::Red, use_color)
}

fn print_status(message: &str, color: Color, use_color: bool) -> io::Result<()> {
    let choice = if use_color {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    };
    let mut stderr = StandardStream::stderr(choice);
    stderr.set_color(ColorSpec::new().set_fg(Some(color)))?;
    write!(stderr, "{}", message)?;
    stderr.reset()?;
    writeln!(stderr)?;
    Ok(())
}

/// Print a rendered summary to stdout as is.
pub fn print_summary(content: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(content.as_bytes())?;
    stdout.flush()
}

/// Print the scanned book tree as JSON.
pub fn print_json(tree: &TreeNode) -> io::Result<()> {
    let json = serde_json::to_string_pretty(tree).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}
