//! Struct and enum block extraction.
//!
//! Blocks are found with a flat pattern: the keyword, the rest of the line
//! up to ` {`, a body with no `}` in it, and `};`. A nested `}` ends the
//! match early, so nested bodies are not supported.

use std::sync::LazyLock;

use regex::Regex;

use super::normalize::normalize;
use super::types::DeclarationBlock;

static STRUCT_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"struct .* \{[^}]+\};").expect("struct pattern is valid"));

static ENUM_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"enum .* \{[^}]+\};").expect("enum pattern is valid"));

/// Extract the `struct ... { ... };` blocks from raw C source.
pub fn extract_structs(contents: &str) -> Vec<DeclarationBlock> {
    let contents = normalize(contents);
    find_blocks(&STRUCT_BLOCK, &contents, "struct")
}

/// Extract the `enum ... { ... };` blocks from raw C source.
///
/// Each block is returned unparsed; see
/// [`extract_enum_vals`](super::enums::extract_enum_vals).
pub fn extract_enums(contents: &str) -> Vec<DeclarationBlock> {
    let contents = normalize(contents);
    find_blocks(&ENUM_BLOCK, &contents, "enum")
}

fn find_blocks(pattern: &Regex, contents: &str, kind: &str) -> Vec<DeclarationBlock> {
    let blocks: Vec<DeclarationBlock> = pattern
        .find_iter(contents)
        .map(|m| DeclarationBlock::new(m.as_str()))
        .collect();

    tracing::debug!("found {} {} block(s)", blocks.len(), kind);
    blocks
}
