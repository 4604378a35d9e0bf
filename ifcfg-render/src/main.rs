use anyhow::Result;
use clap::Parser;

mod cli;
mod inspect_cmd;
mod render_cmd;

use cli::{Cli, Command};
use ifcfg_render::Family;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Render(args) => render_cmd::run_render(args),
        Command::Inspect(args) => inspect_cmd::run_inspect(args),
        Command::Families => run_families(),
    }
}

fn run_families() -> Result<()> {
    for family in Family::ALL {
        let versions = family.versions();
        if versions.is_empty() {
            println!("{}", family.name());
        } else {
            println!("{} versions={}", family.name(), versions.join(","));
        }
    }
    Ok(())
}
