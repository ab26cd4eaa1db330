//! Type definitions for declarations extracted from C source.
//!
//! These are plain values handed to downstream code generators. None of them
//! borrow from the source text.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::constants::ConstantTable;

/// A raw `struct ... { ... };` or `enum ... { ... };` block.
///
/// The text is kept exactly as it appeared in the normalized source; fields
/// are parsed by a separate stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeclarationBlock {
    text: String,
}

impl DeclarationBlock {
    /// Wrap a block of declaration text.
    pub fn new(text: impl Into<String>) -> Self {
        DeclarationBlock { text: text.into() }
    }

    /// The block text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consume the block, returning its text.
    pub fn into_string(self) -> String {
        self.text
    }

    /// The leading keyword (`struct` or `enum`) if the block starts with one.
    pub fn keyword(&self) -> Option<&str> {
        let first = self.text.split_whitespace().next()?;
        match first {
            "struct" | "enum" => Some(first),
            _ => None,
        }
    }

    /// The tag name following the keyword, e.g. `ofp_header` in
    /// `struct ofp_header { ... };`.
    pub fn name(&self) -> Option<&str> {
        let mut words = self.text.split_whitespace();
        words.next()?;
        let tag = words.next()?;
        let end = tag
            .find(|c: char| !(c.is_alphanumeric() || c == '_'))
            .unwrap_or(tag.len());
        (end > 0).then(|| &tag[..end])
    }
}

impl fmt::Display for DeclarationBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for DeclarationBlock {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// The value of one enumerator.
///
/// Values that parse as integer literals are stored as integers; anything
/// else (another enumerator's name, `1 << 3`, a macro) keeps its source text.
/// Integers span both `i64` and `u64`, so flag enums with the top bit set
/// keep their value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EnumValue {
    /// Resolved integer value
    Int(i128),
    /// Unevaluated value expression
    Expr(String),
}

impl EnumValue {
    /// The integer value, if resolved.
    pub fn as_int(&self) -> Option<i128> {
        match self {
            EnumValue::Int(v) => Some(*v),
            EnumValue::Expr(_) => None,
        }
    }
}

impl From<i64> for EnumValue {
    fn from(v: i64) -> Self {
        EnumValue::Int(v.into())
    }
}

impl From<i128> for EnumValue {
    fn from(v: i128) -> Self {
        EnumValue::Int(v)
    }
}

impl From<&str> for EnumValue {
    fn from(s: &str) -> Self {
        EnumValue::Expr(s.to_string())
    }
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnumValue::Int(v) => write!(f, "{}", v),
            EnumValue::Expr(s) => f.write_str(s),
        }
    }
}

/// A named constant inside an enum body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enumerator {
    /// Identifier
    pub name: String,

    /// Explicit or implicit value
    pub value: EnumValue,
}

impl Enumerator {
    /// Create a new enumerator.
    pub fn new(name: impl Into<String>, value: impl Into<EnumValue>) -> Self {
        Enumerator {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A C enumeration with its enumerators in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDescriptor {
    /// Enum tag name
    pub name: String,

    /// Enumerators, textual order
    pub enumerators: Vec<Enumerator>,
}

impl EnumDescriptor {
    /// Create an enum with no enumerators.
    pub fn new(name: impl Into<String>) -> Self {
        EnumDescriptor {
            name: name.into(),
            enumerators: Vec::new(),
        }
    }

    /// Add an enumerator.
    pub fn with_enumerator(mut self, enumerator: Enumerator) -> Self {
        self.enumerators.push(enumerator);
        self
    }

    /// Look up an enumerator by name. Returns the first one on duplicates.
    pub fn get(&self, name: &str) -> Option<&EnumValue> {
        self.enumerators
            .iter()
            .find(|e| e.name == name)
            .map(|e| &e.value)
    }
}

/// A `#define NAME VALUE` line. The value is raw text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefineEntry {
    /// Macro name (may include a parameter list for function-like macros)
    pub name: String,

    /// Everything after the name, unevaluated
    pub value: String,
}

impl DefineEntry {
    /// Create a new define entry.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        DefineEntry {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Element count and base type of a field type such as `uint8_t[4]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSpec {
    /// Array length (1 for scalars)
    pub count: u64,

    /// Text before the `[`, untrimmed
    pub base_type: String,
}

impl TypeSpec {
    /// Create a new type spec.
    pub fn new(count: u64, base_type: impl Into<String>) -> Self {
        TypeSpec {
            count,
            base_type: base_type.into(),
        }
    }
}

/// Everything extracted from one header (or several merged headers).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsedHeader {
    /// Source file path
    pub source: PathBuf,

    /// Raw struct blocks
    pub structs: Vec<DeclarationBlock>,

    /// Resolved enums
    pub enums: Vec<EnumDescriptor>,

    /// `#define` lines
    pub defines: Vec<DefineEntry>,
}

impl ParsedHeader {
    /// Create a new empty parsed header.
    pub fn new(source: impl Into<PathBuf>) -> Self {
        ParsedHeader {
            source: source.into(),
            ..Default::default()
        }
    }

    /// Merge another parsed header into this one.
    pub fn merge(&mut self, other: ParsedHeader) {
        self.structs.extend(other.structs);
        self.enums.extend(other.enums);
        self.defines.extend(other.defines);
    }

    /// Build a constant table from the integer-valued defines and enumerators.
    ///
    /// Enumerators are added after defines, so they win on name clashes.
    pub fn constants(&self) -> ConstantTable {
        let mut table = ConstantTable::from_defines(&self.defines);
        for e in &self.enums {
            table.absorb_enum(e);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_keyword_and_name() {
        let block = DeclarationBlock::new("struct ofp_header {\n uint8_t version;\n};");
        assert_eq!(block.keyword(), Some("struct"));
        assert_eq!(block.name(), Some("ofp_header"));

        let block = DeclarationBlock::new("enum ofp_type{ OFPT_HELLO };");
        assert_eq!(block.keyword(), Some("enum"));
        assert_eq!(block.name(), Some("ofp_type"));
    }

    #[test]
    fn test_block_without_tag() {
        let block = DeclarationBlock::new("struct {\n int x;\n};");
        assert_eq!(block.keyword(), Some("struct"));
        assert_eq!(block.name(), None);
    }

    #[test]
    fn test_enum_value_serializes_bare() {
        let e = EnumDescriptor::new("e")
            .with_enumerator(Enumerator::new("A", 5_i64))
            .with_enumerator(Enumerator::new("B", "FOO"));
        let json = serde_json::to_string(&e).unwrap();
        assert_eq!(
            json,
            r#"{"name":"e","enumerators":[{"name":"A","value":5},{"name":"B","value":"FOO"}]}"#
        );
    }

    #[test]
    fn test_descriptor_lookup() {
        let e = EnumDescriptor::new("e")
            .with_enumerator(Enumerator::new("A", 1_i64))
            .with_enumerator(Enumerator::new("A", 2_i64));
        assert_eq!(e.get("A"), Some(&EnumValue::Int(1)));
        assert_eq!(e.get("B"), None);
    }

    #[test]
    fn test_merge_and_constants() {
        let mut a = ParsedHeader::new("a.h");
        a.defines.push(DefineEntry::new("OFP_ETH_ALEN", "6"));
        let mut b = ParsedHeader::new("b.h");
        b.enums.push(
            EnumDescriptor::new("ofp_port_no")
                .with_enumerator(Enumerator::new("OFPP_MAX", 0xff00_i64)),
        );
        a.merge(b);

        assert_eq!(a.source, PathBuf::from("a.h"));
        let table = a.constants();
        assert_eq!(table.get("OFP_ETH_ALEN"), Some(6));
        assert_eq!(table.get("OFPP_MAX"), Some(0xff00));
    }
}
