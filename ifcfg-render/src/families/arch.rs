//! Arch-family rendering, in two variants that both patch `/etc/rc.conf`.
//!
//! The `legacy` initscripts variant keeps per-interface settings as scalar
//! assignments inside `rc.conf`; `netcfg` moves them into profile files under
//! `/etc/network.d/` and only flips the daemon/network arrays in `rc.conf`.
//! Either way the file is hand-maintained, so mutations only touch the
//! targeted assignments and a missing anchor is fatal rather than an
//! invitation to insert one.

use shellconf_core::{parse, write, Document, EditError, Value};

use crate::descriptor::{FileMap, InterfaceDescriptor, InterfaceMap};
use crate::error::RenderError;

use super::join_lines;

/// The one file both variants patch.
pub const RC_CONF: &str = "/etc/rc.conf";

/// Version variants of the Arch renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchVersion {
    Legacy,
    Netcfg,
}

impl ArchVersion {
    /// Resolve the version selector, rejecting anything else.
    pub fn parse(version: Option<&str>) -> Result<Self, RenderError> {
        match version {
            Some("legacy") => Ok(ArchVersion::Legacy),
            Some("netcfg") => Ok(ArchVersion::Netcfg),
            other => Err(RenderError::UnsupportedVersion {
                family: "arch",
                version: other.unwrap_or("(none)").to_string(),
            }),
        }
    }
}

/// Patch `rc.conf` (and, for netcfg, emit one profile per interface).
pub fn interface_files(
    existing: &FileMap,
    interfaces: &InterfaceMap,
    version: ArchVersion,
) -> Result<FileMap, RenderError> {
    let text = existing
        .get(RC_CONF)
        .ok_or_else(|| RenderError::MissingExistingFile(RC_CONF.to_string()))?;
    let mut doc = parse(text).map_err(|source| RenderError::MalformedExistingFile {
        path: RC_CONF.to_string(),
        source,
    })?;

    let mut files = FileMap::new();
    for (name, interface) in interfaces {
        match version {
            ArchVersion::Legacy => patch_legacy(&mut doc, name, interface)?,
            ArchVersion::Netcfg => {
                patch_netcfg(&mut doc, name)?;
                files.insert(
                    format!("/etc/network.d/{name}"),
                    profile_file(name, interface),
                );
            }
        }
    }

    files.insert(RC_CONF.to_string(), write(&doc));
    Ok(files)
}

fn patch_legacy(
    doc: &mut Document,
    name: &str,
    interface: &InterfaceDescriptor,
) -> Result<(), RenderError> {
    let value = if let Some(ip) = interface.ip4s.first() {
        format!("{name} {} netmask {}", ip.address, ip.netmask)
    } else if let Some(ip) = interface.ip6s.first() {
        format!("{name} add {}/{}", ip.address, ip.prefixlen)
    } else {
        return Ok(());
    };

    doc.set_scalar(name, &value).map_err(anchor_error)?;
    doc.array_append_if_absent("INTERFACES", name)
        .map_err(anchor_error)?;

    if let Some(gateway) = &interface.gateway4 {
        doc.set_scalar("gateway", &format!("default gw {gateway}"))
            .map_err(anchor_error)?;
        doc.array_append_if_absent("ROUTES", "gateway")
            .map_err(anchor_error)?;
    }
    if let Some(gateway) = &interface.gateway6 {
        doc.set_scalar("gateway6", &format!("default gw {gateway}"))
            .map_err(anchor_error)?;
        doc.array_append_if_absent("ROUTES", "gateway6")
            .map_err(anchor_error)?;
    }
    Ok(())
}

fn patch_netcfg(doc: &mut Document, name: &str) -> Result<(), RenderError> {
    doc.array_append_if_absent("NETWORKS", name)
        .map_err(anchor_error)?;

    match doc.find("DAEMONS") {
        Some(Value::Array { .. }) => {
            // Already substituted on a prior run when `network` is gone.
            if doc.array_contains("DAEMONS", "network") {
                doc.array_replace_element("DAEMONS", "network", "!network @net-profiles")
                    .map_err(anchor_error)?;
            }
            Ok(())
        }
        _ => Err(anchor_error(EditError::MissingAnchor(
            "DAEMONS".to_string(),
        ))),
    }
}

fn profile_file(name: &str, interface: &InterfaceDescriptor) -> String {
    let mut lines = vec![
        format!("# Label {}", interface.label),
        "CONNECTION=\"ethernet\"".to_string(),
        format!("INTERFACE={name}"),
    ];

    if let Some(ip) = interface.ip4s.first() {
        lines.push("IP=\"static\"".to_string());
        lines.push(format!("ADDR=\"{}\"", ip.address));
        lines.push(format!("NETMASK=\"{}\"", ip.netmask));
        if let Some(gateway) = &interface.gateway4 {
            lines.push(format!("GATEWAY=\"{gateway}\""));
        }
    }

    if let Some(ip) = interface.ip6s.first() {
        lines.push("IP6=\"static\"".to_string());
        lines.push(format!("ADDR6=\"{}/{}\"", ip.address, ip.prefixlen));
        if let Some(gateway) = &interface.gateway6 {
            lines.push(format!("GATEWAY6=\"{gateway}\""));
        }
    }

    if !interface.dns.is_empty() {
        lines.push(format!("DNS=({})", interface.dns.join(" ")));
    }
    join_lines(lines)
}

/// Every failed edit means the expected anchor is unusable; report it as
/// missing rather than restructure a hand-maintained file.
fn anchor_error(err: EditError) -> RenderError {
    let (EditError::MissingAnchor(name) | EditError::NotScalar(name) | EditError::NotArray(name)) =
        err;
    RenderError::MissingAnchor {
        path: RC_CONF.to_string(),
        name,
    }
}
