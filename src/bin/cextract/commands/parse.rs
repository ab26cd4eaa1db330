//! `cextract parse` command
//!
//! Parses every matched header and prints the merged result.

use std::path::PathBuf;

use anyhow::{bail, Result};

use crate::cli::ParseArgs;
use crate::commands::print_json;
use cextract::util::diagnostic::suggestions;
use cextract::{Config, ParsedHeader};

pub fn execute(args: ParseArgs, config: &Config) -> Result<()> {
    let header_files = expand_header_patterns(&args.headers)?;
    let parser = config.header_parser();

    let mut combined: Option<ParsedHeader> = None;
    for path in &header_files {
        let parsed = parser.parse_file(path)?;
        tracing::info!(
            "parsed {}: {} structs, {} enums, {} defines",
            path.display(),
            parsed.structs.len(),
            parsed.enums.len(),
            parsed.defines.len()
        );

        if let Some(all) = combined.as_mut() {
            all.merge(parsed);
        } else {
            combined = Some(parsed);
        }
    }

    print_json(&combined.unwrap_or_default(), config.pretty())
}

/// Expand header patterns to file paths, keeping the order given.
///
/// Every pattern must match at least one file.
fn expand_header_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let mut matched = false;
        for entry in glob::glob(pattern)? {
            match entry {
                Ok(path) => {
                    if path.is_file() {
                        matched = true;
                        files.push(path);
                    }
                }
                Err(e) => {
                    tracing::warn!("glob error: {}", e);
                }
            }
        }

        if !matched {
            bail!(
                "no header files match `{}`\nhelp: {}",
                pattern,
                suggestions::HEADER_NOT_FOUND
            );
        }
    }

    Ok(files)
}
