use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "ifcfg-render")]
#[command(about = "Render and patch network interface configuration files")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Render interface configuration files for one distribution family.
    Render(RenderArgs),
    /// Show the parsed record structure of a shell-style config file.
    Inspect(InspectArgs),
    /// List supported families and their version selectors.
    Families,
}

#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Interface descriptors, JSON or TOML (chosen by file extension).
    pub interfaces: PathBuf,
    /// Distribution family identifier (redhat, debian, arch, gentoo, suse).
    #[arg(long)]
    pub distro: String,
    /// Family version selector, for families that have one.
    #[arg(long)]
    pub distro_version: Option<String>,
    /// Directory the output paths are rooted under; also where existing
    /// files are read from for patch-based variants.
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
    /// Print rendered content instead of writing files.
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Parser, Debug)]
pub struct InspectArgs {
    pub file: PathBuf,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}
