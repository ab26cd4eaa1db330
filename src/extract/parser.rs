//! Whole-header extraction.
//!
//! Runs the block, enum and define extractors over one header and collects
//! the results in a [`ParsedHeader`].

use std::path::Path;

use anyhow::{Context, Result};

use super::blocks::{extract_enums, extract_structs};
use super::defines::extract_defines;
use super::enums::extract_enum_vals;
use super::errors::{ExtractResult, HeaderContext};
use super::types::{DeclarationBlock, EnumDescriptor, ParsedHeader};

/// Parser for C header files.
#[derive(Debug, Clone, Default)]
pub struct HeaderParser {
    /// Types to include (empty = all)
    include_types: Vec<String>,
    /// Types to exclude
    exclude_types: Vec<String>,
}

impl HeaderParser {
    /// Create a new header parser.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set types to include.
    pub fn with_include_types(mut self, types: Vec<String>) -> Self {
        self.include_types = types;
        self
    }

    /// Set types to exclude.
    pub fn with_exclude_types(mut self, types: Vec<String>) -> Self {
        self.exclude_types = types;
        self
    }

    /// Parse a header file.
    pub fn parse_file(&self, path: &Path) -> Result<ParsedHeader> {
        let content = std::fs::read_to_string(path).with_context(|| HeaderContext::read(path))?;

        self.parse_content(&content, path).with_context(|| HeaderContext::parse(path))
    }

    /// Parse header content.
    ///
    /// Fails on the first enum with a malformed enumerator.
    pub fn parse_content(&self, content: &str, path: &Path) -> ExtractResult<ParsedHeader> {
        let mut header = ParsedHeader::new(path);

        header.structs = self.structs(content);
        header.enums = self.enums(content)?;
        header.defines = extract_defines(content);

        tracing::debug!(
            "parsed {}: {} structs, {} enums, {} defines",
            path.display(),
            header.structs.len(),
            header.enums.len(),
            header.defines.len()
        );

        Ok(header)
    }

    /// Struct blocks that pass the type filters.
    pub fn structs(&self, content: &str) -> Vec<DeclarationBlock> {
        extract_structs(content)
            .into_iter()
            .filter(|block| self.should_include_type(block.name()))
            .collect()
    }

    /// Resolved enums that pass the type filters.
    pub fn enums(&self, content: &str) -> ExtractResult<Vec<EnumDescriptor>> {
        extract_enums(content)
            .into_iter()
            .filter(|block| self.should_include_type(block.name()))
            .map(extract_enum_vals)
            .collect()
    }

    /// Check if a type should be included. Untagged blocks are kept unless
    /// an include list is set.
    fn should_include_type(&self, name: Option<&str>) -> bool {
        let Some(name) = name else {
            return self.include_types.is_empty();
        };

        if self.exclude_types.iter().any(|e| e == name) {
            return false;
        }

        if self.include_types.is_empty() {
            return true;
        }

        self.include_types.iter().any(|i| i == name)
    }
}
