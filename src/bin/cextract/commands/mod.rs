//! Command implementations

pub mod completions;
pub mod defines;
pub mod enums;
pub mod parse;
pub mod split_type;
pub mod structs;

use std::path::Path;

use anyhow::{Context, Result};
use cextract::HeaderContext;
use serde::Serialize;

/// Read a header file into memory.
pub fn read_header(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| HeaderContext::read(path))
}

/// Write a value to stdout as JSON.
pub fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("failed to serialize output")?;

    println!("{}", json);
    Ok(())
}
