//! Per-family renderers behind a closed registry.
//!
//! Each family module exposes an `interface_files` function with the shape
//! its format needs; [`render`] is the single dispatch point that validates
//! the family identifier and version selector before calling into it.

pub mod arch;
pub mod debian;
pub mod gentoo;
pub mod redhat;
pub mod suse;

use crate::descriptor::{FileMap, InterfaceMap};
use crate::error::RenderError;

pub use arch::ArchVersion;
pub use gentoo::GentooVersion;

/// Supported distribution families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Redhat,
    Debian,
    Arch,
    Gentoo,
    Suse,
}

impl Family {
    /// Every registered family, in listing order.
    pub const ALL: [Family; 5] = [
        Family::Redhat,
        Family::Debian,
        Family::Arch,
        Family::Gentoo,
        Family::Suse,
    ];

    /// Resolve a distribution identifier, rejecting anything unregistered.
    pub fn from_name(name: &str) -> Result<Self, RenderError> {
        match name {
            "redhat" => Ok(Family::Redhat),
            "debian" => Ok(Family::Debian),
            "arch" => Ok(Family::Arch),
            "gentoo" => Ok(Family::Gentoo),
            "suse" => Ok(Family::Suse),
            other => Err(RenderError::UnknownFamily(other.to_string())),
        }
    }

    /// Canonical identifier for this family.
    pub fn name(self) -> &'static str {
        match self {
            Family::Redhat => "redhat",
            Family::Debian => "debian",
            Family::Arch => "arch",
            Family::Gentoo => "gentoo",
            Family::Suse => "suse",
        }
    }

    /// Version selectors this family accepts; empty when versionless.
    pub fn versions(self) -> &'static [&'static str] {
        match self {
            Family::Arch => &["legacy", "netcfg"],
            Family::Gentoo => &["legacy", "openrc"],
            _ => &[],
        }
    }
}

/// Render interface configuration for one family.
///
/// `existing` must carry the full current text of every path the selected
/// variant patches (see [`required_existing`]); from-scratch formats ignore
/// it. The returned map holds complete replacement text per file path.
pub fn render(
    family: Family,
    interfaces: &InterfaceMap,
    existing: &FileMap,
    version: Option<&str>,
) -> Result<FileMap, RenderError> {
    match family {
        Family::Redhat => {
            reject_version(family, version)?;
            Ok(redhat::interface_files(interfaces))
        }
        Family::Debian => {
            reject_version(family, version)?;
            Ok(debian::interface_files(interfaces))
        }
        Family::Arch => arch::interface_files(existing, interfaces, ArchVersion::parse(version)?),
        Family::Gentoo => gentoo::interface_files(interfaces, GentooVersion::parse(version)?),
        Family::Suse => {
            reject_version(family, version)?;
            Ok(suse::interface_files(interfaces))
        }
    }
}

/// Paths whose current on-disk text the selected variant patches.
pub fn required_existing(
    family: Family,
    version: Option<&str>,
) -> Result<Vec<&'static str>, RenderError> {
    match family {
        Family::Arch => {
            ArchVersion::parse(version)?;
            Ok(vec![arch::RC_CONF])
        }
        _ => Ok(Vec::new()),
    }
}

fn reject_version(family: Family, version: Option<&str>) -> Result<(), RenderError> {
    match version {
        None => Ok(()),
        Some(version) => Err(RenderError::UnsupportedVersion {
            family: family.name(),
            version: version.to_string(),
        }),
    }
}

/// Join generated lines into final file text with a trailing newline.
pub(crate) fn join_lines(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
