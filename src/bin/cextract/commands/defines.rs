//! `cextract defines` command

use anyhow::Result;

use crate::cli::HeaderArgs;
use crate::commands::{print_json, read_header};
use cextract::{extract_defines, Config};

pub fn execute(args: HeaderArgs, config: &Config) -> Result<()> {
    let content = read_header(&args.header)?;
    let defines = extract_defines(&content);

    tracing::info!("{}: {} define(s)", args.header.display(), defines.len());
    print_json(&defines, config.pretty())
}
