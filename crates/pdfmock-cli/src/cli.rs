use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "pdfmock",
    about = "pdfmock — fixtures, resource providers, and mock resolvers for PDF engine tests",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Harness config file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fetch a file or URL and report its size
    Fetch(FetchArgs),
    /// Load a CMap through the configured CMap backend
    Cmap(CmapArgs),
    /// Resolve a reference in a JSON xref fixture
    Resolve(ResolveArgs),
    /// Show the ids a page's id factory allocates
    Ids(IdsArgs),
    /// Print the effective harness configuration
    Config,
}

#[derive(Args)]
pub struct FetchArgs {
    /// Path or http(s) URL
    pub location: String,
    /// Write the bytes here instead of only reporting them
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct CmapArgs {
    pub name: String,
    /// Override the configured CMap base URL
    #[arg(long)]
    pub base_url: Option<String>,
    /// Override the configured packed flag
    #[arg(long)]
    pub packed: Option<bool>,
}

#[derive(Args)]
pub struct ResolveArgs {
    /// JSON array of {"ref": ..., "data": ...}
    pub fixture: PathBuf,
    /// Reference such as `12R` or `12 0 R`
    pub reference: String,
}

#[derive(Args)]
pub struct IdsArgs {
    pub page_index: usize,
    /// Number of object ids to allocate
    #[arg(short = 'n', long, default_value = "3")]
    pub count: usize,
}
