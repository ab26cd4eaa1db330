//! `cextract enums` command
//!
//! A malformed enumerator aborts the whole command; partial output is never
//! printed.

use anyhow::{Context, Result};

use crate::cli::HeaderArgs;
use crate::commands::{print_json, read_header};
use cextract::{Config, HeaderContext};

pub fn execute(args: HeaderArgs, config: &Config) -> Result<()> {
    let content = read_header(&args.header)?;
    let enums = config
        .header_parser()
        .enums(&content)
        .with_context(|| HeaderContext::parse(&args.header))?;

    tracing::info!("{}: {} enum(s)", args.header.display(), enums.len());
    print_json(&enums, config.pretty())
}
