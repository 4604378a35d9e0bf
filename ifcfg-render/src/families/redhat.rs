//! RedHat-family `ifcfg-<name>` rendering.

use crate::descriptor::{FileMap, InterfaceDescriptor, InterfaceMap};

use super::join_lines;

/// Build one `ifcfg-<name>` file per interface.
pub fn interface_files(interfaces: &InterfaceMap) -> FileMap {
    let mut files = FileMap::new();
    for (name, interface) in interfaces {
        files.insert(format!("ifcfg-{name}"), interface_file(name, interface));
    }
    files
}

fn interface_file(name: &str, interface: &InterfaceDescriptor) -> String {
    let mut lines = vec![
        "# Automatically generated, do not edit".to_string(),
        String::new(),
        format!("# Label {}", interface.label),
        format!("DEVICE={name}"),
        "BOOTPROTO=static".to_string(),
        format!("HWADDR={}", interface.mac),
    ];

    if let Some(ip) = interface.ip4s.first() {
        lines.push(format!("IPADDR={}", ip.address));
        lines.push(format!("NETMASK={}", ip.netmask));
        if let Some(gateway) = &interface.gateway4 {
            lines.push("DEFROUTE=yes".to_string());
            lines.push(format!("GATEWAY={gateway}"));
        }
    }

    if let Some(ip) = interface.ip6s.first() {
        lines.push("IPV6INIT=yes".to_string());
        lines.push("IPV6_AUTOCONF=no".to_string());
        lines.push(format!("IPV6ADDR={}/{}", ip.address, ip.prefixlen));
        if let Some(gateway) = &interface.gateway6 {
            lines.push(format!("IPV6_DEFAULTGW={gateway}%{name}"));
        }
    }

    for (idx, server) in interface.dns.iter().enumerate() {
        lines.push(format!("DNS{}={}", idx + 1, server));
    }

    lines.push("ONBOOT=yes".to_string());
    lines.push("NM_CONTROLLED=no".to_string());
    join_lines(lines)
}
