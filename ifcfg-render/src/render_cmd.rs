use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use ifcfg_render::{families, report, Family, FileMap, InterfaceMap};

use crate::cli::RenderArgs;

/// Execute the render workflow: load descriptors, gather any existing files
/// the selected variant patches, render, then write (or print) the output.
pub fn run_render(args: RenderArgs) -> Result<()> {
    let interfaces = load_interfaces(&args.interfaces)?;
    let family = Family::from_name(&args.distro)?;

    let mut existing = FileMap::new();
    for path in families::required_existing(family, args.distro_version.as_deref())? {
        let on_disk = rooted(&args.root, path);
        let text = fs::read_to_string(&on_disk)
            .with_context(|| format!("failed to read existing {}", on_disk.display()))?;
        existing.insert(path.to_string(), text);
    }

    let files = families::render(
        family,
        &interfaces,
        &existing,
        args.distro_version.as_deref(),
    )?;

    if args.dry_run {
        for (path, content) in &files {
            println!("--- {path}");
            print!("{content}");
        }
    } else {
        for (path, content) in &files {
            let target = rooted(&args.root, path);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            fs::write(&target, content)
                .with_context(|| format!("failed to write {}", target.display()))?;
        }
        println!("{}", report::render_file_list(&files));
    }
    println!("{}", report::render_summary(&files));
    Ok(())
}

fn load_interfaces(path: &Path) -> Result<InterfaceMap> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read interfaces file {}", path.display()))?;

    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse JSON interfaces {}", path.display())),
        Some("toml") => toml::from_str(&raw)
            .with_context(|| format!("failed to parse TOML interfaces {}", path.display())),
        other => bail!(
            "unsupported interfaces file extension {:?} (expected .json or .toml)",
            other.unwrap_or("")
        ),
    }
}

/// Resolve a renderer output path beneath the root directory; absolute paths
/// are re-rooted rather than escaping it.
fn rooted(root: &Path, path: &str) -> PathBuf {
    root.join(path.trim_start_matches('/'))
}
