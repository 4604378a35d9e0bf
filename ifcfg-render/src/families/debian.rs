//! Debian-family `/etc/network/interfaces` rendering.

use crate::descriptor::{FileMap, InterfaceDescriptor, InterfaceMap};

use super::join_lines;

/// Build the single `interfaces` file covering every supplied interface.
///
/// One stanza per interface, in interface-name order. An interface carrying
/// both families renders its IPv4 stanza only; `interfaces(5)` allows one
/// stanza per method and the callers here supply one or the other.
pub fn interface_files(interfaces: &InterfaceMap) -> FileMap {
    let mut lines = vec![
        "# Used by ifup(8) and ifdown(8). See the interfaces(5) manpage or".to_string(),
        "# /usr/share/doc/ifupdown/examples for more information.".to_string(),
        "# The loopback network interface".to_string(),
        "auto lo".to_string(),
        "iface lo inet loopback".to_string(),
    ];

    for (name, interface) in interfaces {
        lines.push(String::new());
        lines.push(format!("# Label {}", interface.label));
        lines.push(format!("auto {name}"));
        lines.extend(stanza(name, interface));
    }

    let mut files = FileMap::new();
    files.insert("interfaces".to_string(), join_lines(lines));
    files
}

fn stanza(name: &str, interface: &InterfaceDescriptor) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(ip) = interface.ip4s.first() {
        lines.push(format!("iface {name} inet static"));
        lines.push(format!("    address {}", ip.address));
        lines.push(format!("    netmask {}", ip.netmask));
        if let Some(gateway) = &interface.gateway4 {
            lines.push(format!("    gateway {gateway}"));
        }
    } else if let Some(ip) = interface.ip6s.first() {
        lines.push(format!("iface {name} inet6 static"));
        lines.push(format!("    address {}", ip.address));
        lines.push(format!("    netmask {}", ip.prefixlen));
        if let Some(gateway) = &interface.gateway6 {
            lines.push(format!("    gateway {gateway}"));
        }
    } else {
        return lines;
    }

    if !interface.dns.is_empty() {
        lines.push(format!("    dns-nameservers {}", interface.dns.join(" ")));
    }
    lines
}
