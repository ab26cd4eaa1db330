//! Declaration extraction from C source text.
//!
//! This is a textual layer, not a C parser: comments are stripped, then
//! `struct`/`enum` blocks and `#define` lines are pulled out with regular
//! expressions. Enum bodies are resolved to values; struct bodies are left
//! for a later stage.

pub mod blocks;
pub mod constants;
pub mod defines;
pub mod enums;
pub mod errors;
pub mod literal;
pub mod normalize;
pub mod parser;
pub mod type_decl;
pub mod types;

pub use blocks::{extract_enums, extract_structs};
pub use constants::ConstantTable;
pub use defines::extract_defines;
pub use enums::extract_enum_vals;
pub use errors::{ExtractError, ExtractResult, HeaderContext};
pub use literal::parse_int_literal;
pub use normalize::{normalize, strip_comments};
pub use parser::HeaderParser;
pub use type_decl::split_type;
pub use types::{
    DeclarationBlock, DefineEntry, EnumDescriptor, EnumValue, Enumerator, ParsedHeader, TypeSpec,
};
