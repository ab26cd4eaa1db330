//! Symbolic constant table used to resolve named array sizes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::literal::parse_int_literal;
use super::types::{DefineEntry, EnumDescriptor};

/// Mapping from symbolic name to integer value.
///
/// The table is owned by the caller and only read during extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConstantTable {
    values: BTreeMap<String, i64>,
}

impl ConstantTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from the defines whose value is an integer literal.
    ///
    /// A single pair of enclosing parentheses is accepted, so
    /// `#define OFP_MAX_TABLE_NAME_LEN (32)` resolves to 32. Everything else
    /// is skipped.
    pub fn from_defines(defines: &[DefineEntry]) -> Self {
        let mut table = Self::new();
        for define in defines {
            match define_value(&define.value) {
                Some(v) => {
                    table.insert(&define.name, v);
                }
                None => {
                    tracing::trace!(
                        name = %define.name,
                        value = %define.value,
                        "define is not an integer constant"
                    );
                }
            }
        }
        table
    }

    /// Add every integer-valued enumerator of `descriptor` that fits in an
    /// `i64`.
    pub fn absorb_enum(&mut self, descriptor: &EnumDescriptor) {
        for e in &descriptor.enumerators {
            if let Some(v) = e.value.as_int().and_then(|v| i64::try_from(v).ok()) {
                self.insert(&e.name, v);
            }
        }
    }

    /// Look up a constant.
    pub fn get(&self, name: &str) -> Option<i64> {
        self.values.get(name).copied()
    }

    /// Check whether a constant is defined.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Insert or replace a constant, returning the previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: i64) -> Option<i64> {
        self.values.insert(name.into(), value)
    }

    /// Merge another table into this one (other takes precedence).
    pub fn extend(&mut self, other: ConstantTable) {
        self.values.extend(other.values);
    }

    /// Number of constants.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over constants in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<K: Into<String>> FromIterator<(K, i64)> for ConstantTable {
    fn from_iter<I: IntoIterator<Item = (K, i64)>>(iter: I) -> Self {
        ConstantTable {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

fn define_value(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    let inner = raw
        .strip_prefix('(')
        .and_then(|r| r.strip_suffix(')'))
        .unwrap_or(raw);
    parse_int_literal(inner).and_then(|v| i64::try_from(v).ok())
}
