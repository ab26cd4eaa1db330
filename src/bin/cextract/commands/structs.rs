//! `cextract structs` command

use anyhow::Result;

use crate::cli::HeaderArgs;
use crate::commands::{print_json, read_header};
use cextract::Config;

pub fn execute(args: HeaderArgs, config: &Config) -> Result<()> {
    let content = read_header(&args.header)?;
    let structs = config.header_parser().structs(&content);

    tracing::info!("{}: {} struct(s)", args.header.display(), structs.len());
    print_json(&structs, config.pretty())
}
