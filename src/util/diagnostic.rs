//! Error reports for the command-line tool.
//!
//! A report names what failed, the header it failed in, and how to fix it.

use std::fmt;
use std::path::PathBuf;

/// Common suggestion messages for consistent error handling.
pub mod suggestions {
    /// Suggestion when a header pattern matches nothing.
    pub const HEADER_NOT_FOUND: &str =
        "Check the path, or quote glob patterns so the shell does not expand them";

    /// Suggestion when a config file fails to load.
    pub const BAD_CONFIG: &str =
        "Fix the file or point --config (CEXTRACT_CONFIG) at a valid one";
}

/// An error report with optional location, context lines and fixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Primary message
    pub message: String,
    /// Extra lines shown under the message
    pub context: Vec<String>,
    /// Suggested fixes
    pub suggestions: Vec<String>,
    /// Header the error came from
    pub location: Option<PathBuf>,
}

impl Diagnostic {
    /// Create an error report.
    pub fn error(message: impl Into<String>) -> Self {
        Diagnostic {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            location: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context.push(context.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_location(mut self, path: impl Into<PathBuf>) -> Self {
        self.location = Some(path.into());
        self
    }

    /// Render for a terminal, with ANSI colors if `color` is set.
    pub fn format(&self, color: bool) -> String {
        let paint = |code: &str, text: &str| {
            if color {
                format!("\x1b[1;{}m{}\x1b[0m", code, text)
            } else {
                text.to_string()
            }
        };

        let mut output = format!("{}: {}\n", paint("31", "error"), self.message);

        if let Some(ref path) = self.location {
            output.push_str(&format!("  --> {}\n", path.display()));
        }

        for ctx in &self.context {
            output.push_str(&format!("  = {}\n", ctx));
        }

        if !self.suggestions.is_empty() {
            output.push_str(&format!("\n{}: consider:\n", paint("32", "help")));
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                output.push_str(&format!("  {}. {}\n", i + 1, suggestion));
            }
        }

        output
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(false))
    }
}

/// Print a diagnostic to stderr.
pub fn emit(diagnostic: &Diagnostic, color: bool) {
    eprint!("{}", diagnostic.format(color));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_formatting() {
        let diag = Diagnostic::error("error extracting enum for ofp_type, member = 3")
            .with_location("include/openflow.h")
            .with_context("offending entry: ` = 3`")
            .with_suggestion("Write the enumerator as `NAME` or `NAME = VALUE`");

        let output = diag.format(false);
        assert!(output.contains("error: error extracting enum for ofp_type"));
        assert!(output.contains("  --> include/openflow.h"));
        assert!(output.contains("  = offending entry"));
        assert!(output.contains("help: consider:"));
        assert!(output.contains("1. Write the enumerator"));
    }

    #[test]
    fn test_plain_error() {
        let output = Diagnostic::error("no enums found").format(false);
        assert_eq!(output, "error: no enums found\n");
    }

    #[test]
    fn test_colored_error() {
        let output = Diagnostic::error("boom").format(true);
        assert!(output.starts_with("\x1b[1;31merror\x1b[0m: boom"));
    }
}
