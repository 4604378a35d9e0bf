use std::fs;

use anyhow::{Context, Result};
use shellconf_core::{format_json, format_text, parse};

use crate::cli::{InspectArgs, OutputFormat};

/// Parse a shell-style config file and print its record structure.
pub fn run_inspect(args: InspectArgs) -> Result<()> {
    let raw = fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let doc = parse(&raw).with_context(|| format!("failed to parse {}", args.file.display()))?;

    match args.format {
        OutputFormat::Text => println!("{}", format_text(&doc)),
        OutputFormat::Json => println!("{}", format_json(&doc)),
    }
    Ok(())
}
