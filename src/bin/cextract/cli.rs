//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// cextract - Extract structs, enums and #define constants from C headers
#[derive(Parser)]
#[command(name = "cextract")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Config file to use instead of ./cextract.toml
    #[arg(long, global = true, env = "CEXTRACT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract everything from one or more headers as JSON
    Parse(ParseArgs),

    /// Print the struct blocks of a header
    Structs(HeaderArgs),

    /// Print the resolved enums of a header
    Enums(HeaderArgs),

    /// Print the #define lines of a header
    Defines(HeaderArgs),

    /// Split an array type declaration into count and base type
    SplitType(SplitTypeArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct ParseArgs {
    /// Header files or glob patterns
    #[arg(required = true)]
    pub headers: Vec<String>,
}

#[derive(Args)]
pub struct HeaderArgs {
    /// Header file to read
    pub header: PathBuf,
}

#[derive(Args)]
pub struct SplitTypeArgs {
    /// Type declaration, e.g. `uint8_t[OFP_ETH_ALEN]`
    pub decl: String,

    /// Take constants from the defines and enums of these headers
    #[arg(long)]
    pub header: Vec<PathBuf>,

    /// Extra constant (NAME=VALUE), overrides config and headers
    #[arg(short = 'D', long = "define", value_name = "NAME=VALUE")]
    pub defines: Vec<String>,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
