//! Display names for catalog entries

use regex::Regex;

use crate::config::SummaryOptions;
use crate::error::{Error, Result};

/// Matches an ordering prefix such as `01-` in `01-intro` for a given token.
#[derive(Debug, Clone)]
pub struct SortPrefix {
    pattern: Regex,
}

impl SortPrefix {
    /// Build the prefix pattern `^[0-9A-Za-z]*<token>`.
    pub fn new(token: &str) -> Result<Self> {
        let pattern = Regex::new(&format!("^[0-9A-Za-z]*{}", regex::escape(token))).map_err(
            |source| Error::SortToken {
                token: token.to_string(),
                source,
            },
        )?;
        Ok(Self { pattern })
    }

    /// Remove the prefix, keeping only the remainder. Names without one are returned as is.
    pub fn strip<'a>(&self, name: &'a str) -> &'a str {
        match self.pattern.find(name) {
            Some(m) => &name[m.end()..],
            None => name,
        }
    }
}

/// Turns tree keys into the names shown in the catalog.
#[derive(Debug, Clone)]
pub struct NameFormatter<'a> {
    sort_prefix: Option<SortPrefix>,
    unchanged: &'a [String],
}

impl<'a> NameFormatter<'a> {
    pub fn new(options: &'a SummaryOptions) -> Result<Self> {
        let sort_prefix = options
            .sorted_by
            .as_deref()
            .filter(|token| !token.is_empty())
            .map(SortPrefix::new)
            .transpose()?;

        Ok(Self {
            sort_prefix,
            unchanged: &options.unchanged,
        })
    }

    pub fn strip_sort_prefix<'n>(&self, name: &'n str) -> &'n str {
        match &self.sort_prefix {
            Some(prefix) => prefix.strip(name),
            None => name,
        }
    }

    /// Strip the sort prefix, then start-case the name unless it contains a
    /// `.`, is listed as unchanged, or contains CJK characters.
    pub fn pretty(&self, name: &str) -> String {
        let name = self.strip_sort_prefix(name);

        if name.contains('.') || self.unchanged.iter().any(|u| u == name) || contains_cjk(name) {
            return name.to_string();
        }

        let cased = start_case(name);
        if cased.is_empty() {
            name.to_string()
        } else {
            cased
        }
    }
}

/// Check for CJK ideographs (U+4E00..U+9FA5) or CJK compatibility and
/// full-width forms (U+FE30..U+FFA0).
pub fn contains_cjk(s: &str) -> bool {
    s.chars()
        .any(|c| matches!(c, '\u{4E00}'..='\u{9FA5}' | '\u{FE30}'..='\u{FFA0}'))
}

/// Convert a name to start case: words are split on separators and camel-case
/// humps, each word gets an upper-case first letter, and words are joined with
/// single spaces. The rest of each word keeps its case, and digits stay attached
/// to the letters before them (`chapter1` becomes `Chapter1`).
pub fn start_case(name: &str) -> String {
    let mut words = Vec::new();
    for part in name.split(|c: char| !c.is_alphanumeric()) {
        if !part.is_empty() {
            split_humps(part, &mut words);
        }
    }

    words
        .iter()
        .map(|w| upper_first(w))
        .collect::<Vec<_>>()
        .join(" ")
}

fn split_humps(part: &str, words: &mut Vec<String>) {
    let chars: Vec<char> = part.chars().collect();
    let mut start = 0;

    for i in 1..chars.len() {
        let prev = chars[i - 1];
        let cur = chars[i];
        let next_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());

        // gettingStarted -> getting|Started, HTTPServer -> HTTP|Server
        let boundary = ((prev.is_lowercase() || prev.is_numeric()) && cur.is_uppercase())
            || (prev.is_uppercase() && cur.is_uppercase() && next_lower);

        if boundary {
            words.push(chars[start..i].iter().collect());
            start = i;
        }
    }
    words.push(chars[start..].iter().collect());
}

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(sorted_by: Option<&str>, unchanged: &[&str]) -> SummaryOptions {
        SummaryOptions {
            sorted_by: sorted_by.map(str::to_string),
            unchanged: unchanged.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_start_case() {
        assert_eq!(start_case("getting-started"), "Getting Started");
        assert_eq!(start_case("getting_started"), "Getting Started");
        assert_eq!(start_case("gettingStarted"), "Getting Started");
        assert_eq!(start_case("chapter1"), "Chapter1");
        assert_eq!(start_case("HTTPServer"), "HTTP Server");
        assert_eq!(start_case("README"), "README");
        assert_eq!(start_case("__foo  bar__"), "Foo Bar");
        assert_eq!(start_case("v2Api"), "V2 Api");
        assert_eq!(start_case(""), "");
    }

    #[test]
    fn test_contains_cjk() {
        assert!(contains_cjk("入门"));
        assert!(contains_cjk("chapter 一"));
        assert!(contains_cjk("ＡＢ")); // full-width forms
        assert!(!contains_cjk("chapter"));
        assert!(!contains_cjk("café"));
    }

    #[test]
    fn test_sort_prefix_strip() {
        let prefix = SortPrefix::new("-").unwrap();
        assert_eq!(prefix.strip("01-intro"), "intro");
        assert_eq!(prefix.strip("A1-setup"), "setup");
        assert_eq!(prefix.strip("intro"), "intro");
        // The prefix may only contain ASCII letters and digits
        assert_eq!(prefix.strip("0 1-intro"), "0 1-intro");
    }

    #[test]
    fn test_sort_prefix_token_is_literal() {
        let prefix = SortPrefix::new(".").unwrap();
        assert_eq!(prefix.strip("01.intro"), "intro");
        assert_eq!(prefix.strip("01xintro"), "01xintro");
    }

    #[test]
    fn test_pretty_identity_cases() {
        let opts = options(None, &["iOS", "getting-started"]);
        let names = NameFormatter::new(&opts).unwrap();

        assert_eq!(names.pretty("intro.md"), "intro.md");
        assert_eq!(names.pretty("req.options.url"), "req.options.url");
        assert_eq!(names.pretty("iOS"), "iOS");
        assert_eq!(names.pretty("getting-started"), "getting-started");
        assert_eq!(names.pretty("快速入门"), "快速入门");
    }

    #[test]
    fn test_pretty_start_cases_other_names() {
        let opts = options(None, &[]);
        let names = NameFormatter::new(&opts).unwrap();

        assert_eq!(names.pretty("getting-started"), "Getting Started");
        assert_eq!(names.pretty("chapter1"), "Chapter1");
        // No sort token configured: the prefix is just another word
        assert_eq!(names.pretty("01-intro"), "01 Intro");
    }

    #[test]
    fn test_pretty_strips_sort_prefix_first() {
        let opts = options(Some("-"), &["faq"]);
        let names = NameFormatter::new(&opts).unwrap();

        assert_eq!(names.pretty("01-getting_started"), "Getting Started");
        assert_eq!(names.pretty("02-faq"), "faq");
        assert_eq!(names.pretty("03-notes.v2"), "notes.v2");
    }

    #[test]
    fn test_pretty_falls_back_when_nothing_to_case() {
        let opts = options(None, &[]);
        let names = NameFormatter::new(&opts).unwrap();
        assert_eq!(names.pretty("---"), "---");
    }
}
