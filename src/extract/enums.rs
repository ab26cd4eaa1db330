//! Enum body resolution.
//!
//! Turns one `enum name { ... };` block into an [`EnumDescriptor`]. Explicit
//! values that are integer literals become integers; anything else is kept
//! as text. Implicit values count up from the last integer seen, so an
//! enumerator after a symbolic value continues from the value before it:
//!
//! ```text
//! enum e { A = 5, B, C = FOO, D };   // A=5 B=6 C="FOO" D=7
//! ```

use std::sync::LazyLock;

use regex::Regex;

use super::errors::{ExtractError, ExtractResult};
use super::literal::parse_int_literal;
use super::types::{EnumDescriptor, EnumValue, Enumerator};

static ENUM_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"enum +(\w+)").expect("enum name pattern is valid"));

/// `NAME = VALUE`
static ASSIGNED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^\s*(\w+)\s*=(.*)$").expect("enumerator assignment pattern is valid")
});

/// Bare `NAME`; trailing text after the identifier is ignored.
static BARE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\w+)").expect("enumerator pattern is valid"));

/// Resolve the name and enumerators of a C enum declaration.
///
/// The body is split naively on `,`, so a value such as `MACRO(a, b)` is
/// split in two. Returns [`ExtractError::MalformedEnumerator`] for an entry
/// that does not start with an identifier.
pub fn extract_enum_vals(block: impl AsRef<str>) -> ExtractResult<EnumDescriptor> {
    let block = block.as_ref();

    let name = ENUM_NAME
        .captures(block)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| ExtractError::MalformedEnum {
            reason: "no `enum <name>` found".to_string(),
            text: block.to_string(),
        })?;

    let joined = block.replace('\n', " ");
    let body = enum_body(&joined).ok_or_else(|| ExtractError::MalformedEnum {
        reason: format!("no `{{ ... }}` body for `{}`", name),
        text: block.to_string(),
    })?;

    let mut descriptor = EnumDescriptor::new(&name);
    // Literals stay within 64 bits, so the counter cannot overflow.
    let mut previous: i128 = -1;

    for entry in body.split(',') {
        if entry.trim().is_empty() {
            continue;
        }

        let (e_name, value) = if let Some(caps) = ASSIGNED.captures(entry) {
            let raw = caps[2].trim();
            let value = match parse_int_literal(raw) {
                Some(v) => EnumValue::Int(v),
                None => {
                    tracing::trace!(
                        enum_name = %name,
                        enumerator = &caps[1],
                        value = raw,
                        "keeping symbolic enum value"
                    );
                    EnumValue::Expr(raw.to_string())
                }
            };
            (caps[1].to_string(), value)
        } else if let Some(caps) = BARE.captures(entry) {
            (caps[1].to_string(), EnumValue::Int(previous + 1))
        } else {
            return Err(ExtractError::MalformedEnumerator {
                enum_name: name,
                entry: entry.to_string(),
            });
        };

        // Symbolic values leave the counter where it was.
        if let EnumValue::Int(v) = value {
            previous = v;
        }

        descriptor.enumerators.push(Enumerator { name: e_name, value });
    }

    tracing::debug!(
        "resolved enum {} with {} enumerator(s)",
        descriptor.name,
        descriptor.enumerators.len()
    );

    Ok(descriptor)
}

/// Text between the first `{` and the first `}` after it.
fn enum_body(joined: &str) -> Option<&str> {
    let open = joined.find('{')?;
    let rest = &joined[open + 1..];
    let close = rest.find('}')?;
    Some(&rest[..close])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(src: &str) -> Vec<(String, EnumValue)> {
        extract_enum_vals(src)
            .unwrap()
            .enumerators
            .into_iter()
            .map(|e| (e.name, e.value))
            .collect()
    }

    fn pair(name: &str, value: impl Into<EnumValue>) -> (String, EnumValue) {
        (name.to_string(), value.into())
    }

    #[test]
    fn test_implicit_values() {
        let e = extract_enum_vals("enum abc { A, B, C };").unwrap();
        assert_eq!(e.name, "abc");
        assert_eq!(
            values("enum abc { A, B, C };"),
            vec![pair("A", 0_i64), pair("B", 1_i64), pair("C", 2_i64)]
        );
    }

    #[test]
    fn test_symbolic_value_does_not_advance_counter() {
        assert_eq!(
            values("enum e { A = 5, B, C = FOO, D };"),
            vec![
                pair("A", 5_i64),
                pair("B", 6_i64),
                pair("C", "FOO"),
                pair("D", 7_i64)
            ]
        );
    }

    #[test]
    fn test_hex_value() {
        assert_eq!(
            values("enum e { A = 0x10, B };"),
            vec![pair("A", 16_i64), pair("B", 17_i64)]
        );
    }

    #[test]
    fn test_values_past_i64_max_continue_counting() {
        assert_eq!(
            values("enum e { A = 0x8000000000000000, B };"),
            vec![pair("A", 1_i128 << 63), pair("B", (1_i128 << 63) + 1)]
        );
        assert_eq!(
            values("enum e { ALL = 0xFFFFFFFFFFFFFFFF, NEXT };"),
            vec![
                pair("ALL", i128::from(u64::MAX)),
                pair("NEXT", i128::from(u64::MAX) + 1)
            ]
        );
    }

    #[test]
    fn test_multiline_block() {
        let block = "enum ofp_port_config {\n OFPPC_PORT_DOWN = 1 << 0,\n OFPPC_NO_RECV = 1 << 2,\n OFPPC_NO_FWD = 1 << 5,\n};";
        let e = extract_enum_vals(block).unwrap();
        assert_eq!(e.name, "ofp_port_config");
        assert_eq!(e.enumerators.len(), 3);
        assert_eq!(e.get("OFPPC_NO_RECV"), Some(&EnumValue::Expr("1 << 2".into())));
    }

    #[test]
    fn test_reference_to_earlier_enumerator() {
        assert_eq!(
            values("enum e { A = 3, B = A, C };"),
            vec![pair("A", 3_i64), pair("B", "A"), pair("C", 4_i64)]
        );
    }

    #[test]
    fn test_negative_and_octal_values() {
        assert_eq!(
            values("enum e { A = -2, B, C = 010, D };"),
            vec![
                pair("A", -2_i64),
                pair("B", -1_i64),
                pair("C", 8_i64),
                pair("D", 9_i64)
            ]
        );
    }

    #[test]
    fn test_entries_without_spaces() {
        assert_eq!(
            values("enum e {A,B=7,C};"),
            vec![pair("A", 0_i64), pair("B", 7_i64), pair("C", 8_i64)]
        );
    }

    #[test]
    fn test_comma_inside_value_is_split() {
        // `MAKE(x, -1)` splits into `MAKE(x` and ` -1)`; the second half has
        // no identifier.
        let err = extract_enum_vals("enum e { A = MAKE(x, -1) };").unwrap_err();
        assert!(matches!(
            err,
            ExtractError::MalformedEnumerator { ref enum_name, ref entry }
                if enum_name == "e" && entry == " -1) "
        ));
    }

    #[test]
    fn test_duplicates_pass_through() {
        assert_eq!(
            values("enum e { A, A };"),
            vec![pair("A", 0_i64), pair("A", 1_i64)]
        );
    }

    #[test]
    fn test_malformed_enumerator() {
        for body in ["= 3", "-A", "(X)", "\"s\""] {
            let block = format!("enum bad {{ OK, {} }};", body);
            let err = extract_enum_vals(&block).unwrap_err();
            match err {
                ExtractError::MalformedEnumerator { enum_name, entry } => {
                    assert_eq!(enum_name, "bad");
                    assert_eq!(entry.trim(), body);
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn test_missing_name_or_body() {
        assert!(matches!(
            extract_enum_vals("enum { A };"),
            Err(ExtractError::MalformedEnum { .. })
        ));
        assert!(matches!(
            extract_enum_vals("enum e;"),
            Err(ExtractError::MalformedEnum { .. })
        ));
    }

    #[test]
    fn test_empty_value_is_kept_as_text() {
        assert_eq!(
            values("enum e { A = , B };"),
            vec![pair("A", ""), pair("B", 0_i64)]
        );
    }
}
