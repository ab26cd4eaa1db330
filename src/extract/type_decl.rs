//! Splitting of array type declarations such as `uint8_t[OFP_ETH_ALEN]`.

use super::constants::ConstantTable;
use super::errors::{ExtractError, ExtractResult};
use super::literal::parse_int_literal;
use super::types::TypeSpec;

/// Resolve a type declaration to its element count and base type.
///
/// `uint8_t[4]` gives `(4, "uint8_t")`. A count naming an entry in
/// `constants` resolves through the table, otherwise it must be an integer
/// literal. The base type is everything before `[` and is not trimmed. A
/// declaration without `[` has count 1 and is returned unchanged.
pub fn split_type(decl: &str, constants: &ConstantTable) -> ExtractResult<TypeSpec> {
    let Some((base_type, rest)) = decl.split_once('[') else {
        return Ok(TypeSpec::new(1, decl));
    };

    let count_str = rest.split(']').next().unwrap_or(rest);

    let count = match constants.get(count_str) {
        Some(v) => i128::from(v),
        None => parse_int_literal(count_str).ok_or_else(|| invalid_count(decl, count_str))?,
    };
    let count = u64::try_from(count).map_err(|_| invalid_count(decl, count_str))?;

    Ok(TypeSpec::new(count, base_type))
}

fn invalid_count(decl: &str, count: &str) -> ExtractError {
    ExtractError::InvalidArrayCount {
        decl: decl.to_string(),
        count: count.to_string(),
    }
}
