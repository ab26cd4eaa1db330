//! Comment stripping and whitespace normalization for C source.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Literals and comments in a single alternation.
///
/// Quoted literals must be consumed by the same scan, otherwise `//` or `/*`
/// inside a string would start a comment.
static COMMENT_OR_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?ms)//.*?$|/\*.*?\*/|'(?:\\.|[^\\'])*'|"(?:\\.|[^\\"])*""#)
        .expect("comment pattern is valid")
});

/// Remove C and C++ comments, leaving string and char literals intact.
pub fn strip_comments(text: &str) -> String {
    COMMENT_OR_LITERAL
        .replace_all(text, |caps: &Captures<'_>| {
            let token = &caps[0];
            if token.starts_with('/') {
                String::new()
            } else {
                token.to_string()
            }
        })
        .into_owned()
}

/// Strip comments, then clean up whitespace.
///
/// Tabs become single spaces, trailing whitespace is removed and lines left
/// empty are dropped. Lines are rejoined with `\n` (no trailing newline).
pub fn normalize(text: &str) -> String {
    let stripped = strip_comments(text);

    stripped
        .lines()
        .map(|line| line.replace('\t', " "))
        .map(|line| line.trim_end().to_string())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
