//! `cextract split-type` command
//!
//! Constants are layered: config first, then the headers given with
//! `--header`, then `--define` flags.

use anyhow::{anyhow, Context, Result};

use crate::cli::SplitTypeArgs;
use crate::commands::print_json;
use cextract::extract::parse_int_literal;
use cextract::{split_type, Config, ConstantTable};

pub fn execute(args: SplitTypeArgs, config: &Config) -> Result<()> {
    let mut constants = config.constants.clone();

    let parser = config.header_parser();
    for path in &args.header {
        let header = parser.parse_file(path)?;
        constants.extend(header.constants());
    }

    constants.extend(parse_define_flags(&args.defines)?);
    tracing::debug!("resolving `{}` with {} constant(s)", args.decl, constants.len());

    let spec = split_type(&args.decl, &constants)?;
    print_json(&spec, config.pretty())
}

/// Parse `NAME=VALUE` flags into a constant table.
fn parse_define_flags(flags: &[String]) -> Result<ConstantTable> {
    let mut table = ConstantTable::new();
    for flag in flags {
        let (name, value) = flag
            .split_once('=')
            .ok_or_else(|| anyhow!("invalid --define `{}`: expected NAME=VALUE", flag))?;
        let value = parse_int_literal(value)
            .and_then(|v| i64::try_from(v).ok())
            .with_context(|| format!("invalid --define `{}`: value is not an integer", flag))?;
        table.insert(name.trim(), value);
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_define_flags() {
        let flags = vec!["N=8".to_string(), "MASK=0x10".to_string()];
        let table = parse_define_flags(&flags).unwrap();
        assert_eq!(table.get("N"), Some(8));
        assert_eq!(table.get("MASK"), Some(16));
    }

    #[test]
    fn test_parse_define_flags_rejects_bad_input() {
        assert!(parse_define_flags(&["N".to_string()]).is_err());
        assert!(parse_define_flags(&["N=abc".to_string()]).is_err());
    }
}
