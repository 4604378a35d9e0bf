//! SuSE-family `ifcfg-<name>` rendering.
//!
//! This format carries no gateway or DNS keys; the family configures routing
//! and resolvers through separate mechanisms, so those descriptor fields are
//! accepted and left unrendered.

use crate::descriptor::{FileMap, InterfaceDescriptor, InterfaceMap};

use super::join_lines;

/// Build one `ifcfg-<name>` file per interface.
pub fn interface_files(interfaces: &InterfaceMap) -> FileMap {
    let mut files = FileMap::new();
    for (name, interface) in interfaces {
        files.insert(format!("ifcfg-{name}"), interface_file(interface));
    }
    files
}

fn interface_file(interface: &InterfaceDescriptor) -> String {
    let mut lines = vec![
        "# Automatically generated, do not edit".to_string(),
        String::new(),
        format!("# Label {}", interface.label),
        "BOOTPROTO='static'".to_string(),
    ];

    if let Some(ip) = interface.ip4s.first() {
        lines.push(format!("IPADDR='{}'", ip.address));
        lines.push(format!("NETMASK='{}'", ip.netmask));
    } else if let Some(ip) = interface.ip6s.first() {
        lines.push(format!("IPADDR='{}'", ip.address));
        lines.push(format!("PREFIXLEN='{}'", ip.prefixlen));
    }

    lines.push("STARTMODE='auto'".to_string());
    lines.push("USERCONTROL='no'".to_string());
    join_lines(lines)
}
