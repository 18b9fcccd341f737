//! CLI argument definitions.

use std::path::PathBuf;

use clap::Parser;

use crate::provider::Provider;

/// Expand proxy share links against a list of preferred addresses.
#[derive(Debug, Parser)]
#[command(
    name = "bestnode",
    version,
    about = "Rewrite proxy nodes against CDN-preferred addresses"
)]
pub struct Cli {
    /// File with one share link per line, or `-` for stdin.
    pub nodes: PathBuf,

    /// File with one replacement address per line.
    #[arg(long, conflicts_with = "provider")]
    pub ips: Option<PathBuf>,

    /// Builtin provider list to use when no --ips file is given.
    #[arg(long, value_enum)]
    pub provider: Option<Provider>,

    /// Write the result here instead of stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Emit the base64 subscription form instead of plain lines.
    #[arg(long)]
    pub base64: bool,
}
