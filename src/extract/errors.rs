//! Extraction error types and diagnostics.

use std::fmt;
use std::path::{Path, PathBuf};

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use crate::util::diagnostic::Diagnostic;

/// Error raised while resolving enums or splitting type declarations.
#[derive(Debug, Error, MietteDiagnostic)]
pub enum ExtractError {
    #[error("error extracting enum for `{enum_name}`, member `{entry}`")]
    #[diagnostic(
        code(cextract::enums::malformed_enumerator),
        help("each enumerator must be `NAME` or `NAME = VALUE`")
    )]
    MalformedEnumerator { enum_name: String, entry: String },

    #[error("malformed enum declaration: {reason}")]
    #[diagnostic(code(cextract::enums::malformed_enum))]
    MalformedEnum { reason: String, text: String },

    #[error("invalid array count `{count}` in `{decl}`")]
    #[diagnostic(
        code(cextract::types::invalid_count),
        help("use an integer literal or a name from the constant table")
    )]
    InvalidArrayCount { decl: String, count: String },
}

impl ExtractError {
    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ExtractError::MalformedEnumerator { enum_name, entry } => {
                Diagnostic::error(format!(
                    "error extracting enum for {}, member {}",
                    enum_name,
                    entry.trim()
                ))
                .with_context(format!("offending entry: `{}`", entry))
                .with_suggestion("Write the enumerator as `NAME` or `NAME = VALUE`")
                .with_suggestion(
                    "Move function-like macro values with commas out of the enum body",
                )
            }

            ExtractError::MalformedEnum { reason, text } => {
                let mut diag = Diagnostic::error(format!("malformed enum declaration: {}", reason));
                if let Some(first) = text.lines().next() {
                    diag = diag.with_context(format!("declaration starts with `{}`", first));
                }
                diag
            }

            ExtractError::InvalidArrayCount { decl, count } => {
                Diagnostic::error(format!("invalid array count `{}` in `{}`", count, decl))
                    .with_context("the count is neither a known constant nor an integer literal")
                    .with_suggestion(format!(
                        "Define `{}` under [constants] in cextract.toml",
                        count
                    ))
                    .with_suggestion(format!("Pass `--define {}=<value>`", count))
            }
        }
    }
}

/// Result alias for extraction operations.
pub type ExtractResult<T> = std::result::Result<T, ExtractError>;

/// Error context naming the header a failure came from.
///
/// Attach it with `anyhow::Context`; callers recover the path with
/// `anyhow::Error::downcast_ref::<HeaderContext>()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderContext {
    action: &'static str,
    path: PathBuf,
}

impl HeaderContext {
    /// The header could not be read.
    pub fn read(path: &Path) -> Self {
        HeaderContext {
            action: "read",
            path: path.to_path_buf(),
        }
    }

    /// The header was read but extraction failed.
    pub fn parse(path: &Path) -> Self {
        HeaderContext {
            action: "parse",
            path: path.to_path_buf(),
        }
    }

    /// Path of the header.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for HeaderContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to {} header: {}", self.action, self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_enumerator_diagnostic() {
        let err = ExtractError::MalformedEnumerator {
            enum_name: "ofp_type".to_string(),
            entry: " = 3".to_string(),
        };
        let output = err.to_diagnostic().format(false);
        assert!(output.contains("error: error extracting enum for ofp_type, member = 3"));
        assert!(output.contains("help: consider:"));
    }

    #[test]
    fn test_invalid_count_mentions_name() {
        let err = ExtractError::InvalidArrayCount {
            decl: "uint8_t[LEN]".to_string(),
            count: "LEN".to_string(),
        };
        assert_eq!(err.to_string(), "invalid array count `LEN` in `uint8_t[LEN]`");
        let output = err.to_diagnostic().format(false);
        assert!(output.contains("--define LEN=<value>"));
    }

    #[test]
    fn test_header_context_survives_anyhow_chain() {
        let err = anyhow::Error::new(ExtractError::MalformedEnumerator {
            enum_name: "e".to_string(),
            entry: " = 1".to_string(),
        })
        .context(HeaderContext::parse(Path::new("include/bad.h")))
        .context("enums command failed");

        let header = err.downcast_ref::<HeaderContext>().unwrap();
        assert_eq!(header.path(), Path::new("include/bad.h"));
        assert_eq!(header.to_string(), "failed to parse header: include/bad.h");
        assert!(err.downcast_ref::<ExtractError>().is_some());
    }
}
