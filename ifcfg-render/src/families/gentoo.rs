//! Gentoo-family `net` rendering, in two grammars.
//!
//! The `legacy` baselayout grammar uses bash arrays with dotted netmasks;
//! `openrc` uses plain scalar strings with CIDR prefix lengths, converted
//! through the netmask table.

use crate::descriptor::{FileMap, InterfaceDescriptor, InterfaceMap};
use crate::error::RenderError;
use crate::netmask;

use super::join_lines;

/// Version variants of the Gentoo renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GentooVersion {
    Legacy,
    Openrc,
}

impl GentooVersion {
    /// Resolve the version selector, rejecting anything else.
    pub fn parse(version: Option<&str>) -> Result<Self, RenderError> {
        match version {
            Some("legacy") => Ok(GentooVersion::Legacy),
            Some("openrc") => Ok(GentooVersion::Openrc),
            other => Err(RenderError::UnsupportedVersion {
                family: "gentoo",
                version: other.unwrap_or("(none)").to_string(),
            }),
        }
    }
}

/// Build the single `net` file covering every supplied interface.
pub fn interface_files(
    interfaces: &InterfaceMap,
    version: GentooVersion,
) -> Result<FileMap, RenderError> {
    let mut lines = vec![assignment(version, "modules", &["ifconfig".to_string()])];

    for (name, interface) in interfaces {
        lines.push(String::new());
        lines.push(format!("# Label {}", interface.label));

        let addresses = config_entries(interface, version)?;
        if !addresses.is_empty() {
            lines.push(assignment(version, &format!("config_{name}"), &addresses));
        }

        let routes = route_entries(interface)?;
        if !routes.is_empty() {
            lines.push(assignment(version, &format!("routes_{name}"), &routes));
        }

        if !interface.dns.is_empty() {
            lines.push(assignment(
                version,
                &format!("dns_servers_{name}"),
                &[interface.dns.join(" ")],
            ));
        }
    }

    let mut files = FileMap::new();
    files.insert("net".to_string(), join_lines(lines));
    Ok(files)
}

fn config_entries(
    interface: &InterfaceDescriptor,
    version: GentooVersion,
) -> Result<Vec<String>, RenderError> {
    let mut entries = Vec::new();
    for ip in &interface.ip4s {
        entries.push(match version {
            GentooVersion::Legacy => format!("{} netmask {}", ip.address, ip.netmask),
            GentooVersion::Openrc => {
                format!("{}/{}", ip.address, netmask::prefix_len(&ip.netmask)?)
            }
        });
    }
    for ip in &interface.ip6s {
        entries.push(format!("{}/{}", ip.address, ip.prefixlen));
    }
    Ok(entries)
}

fn route_entries(interface: &InterfaceDescriptor) -> Result<Vec<String>, RenderError> {
    let mut entries = Vec::new();
    if let Some(gateway) = &interface.gateway4 {
        entries.push(format!("default via {gateway}"));
    }
    if let Some(gateway) = &interface.gateway6 {
        entries.push(format!("default via {gateway}"));
    }
    for route in &interface.routes {
        entries.push(format!(
            "{}/{} via {}",
            route.route,
            netmask::route_prefix_len(&route.netmask)?,
            route.gateway
        ));
    }
    Ok(entries)
}

fn assignment(version: GentooVersion, name: &str, entries: &[String]) -> String {
    match version {
        GentooVersion::Legacy => {
            let quoted: Vec<String> = entries.iter().map(|e| format!("\"{e}\"")).collect();
            format!("{}=( {} )", name, quoted.join(" "))
        }
        GentooVersion::Openrc => format!("{}=\"{}\"", name, entries.join(" ")),
    }
}
