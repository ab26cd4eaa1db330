//! cextract - pull structs, enums and `#define` constants out of C headers
//!
//! This crate provides the extraction layer used by code generators that
//! work from hand-written C headers: comment stripping, declaration block
//! matching, enum value resolution and array type splitting.

pub mod extract;
pub mod util;

pub use extract::{
    extract_defines, extract_enum_vals, extract_enums, extract_structs, normalize, split_type,
    ConstantTable, DeclarationBlock, DefineEntry, EnumDescriptor, EnumValue, Enumerator,
    ExtractError, HeaderContext, HeaderParser, ParsedHeader, TypeSpec,
};
pub use util::config::Config;
