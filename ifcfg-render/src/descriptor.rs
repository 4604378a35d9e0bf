use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Interface descriptors keyed by interface name (e.g. `eth0`).
///
/// Keyed storage is ordered so every renderer walks interfaces in a stable,
/// reproducible order.
pub type InterfaceMap = BTreeMap<String, InterfaceDescriptor>;

/// Rendered output: full replacement text keyed by file path.
pub type FileMap = BTreeMap<String, String>;

/// Desired configuration for one network interface, independent of any
/// distribution's file format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceDescriptor {
    /// Display name used in generated comments.
    pub label: String,
    /// Hardware address.
    pub mac: String,
    /// IPv4 addresses with dotted-quad netmasks, in order of preference.
    #[serde(default)]
    pub ip4s: Vec<Ipv4Assignment>,
    /// Default IPv4 gateway.
    #[serde(default)]
    pub gateway4: Option<String>,
    /// IPv6 addresses with prefix lengths, in order of preference.
    #[serde(default)]
    pub ip6s: Vec<Ipv6Assignment>,
    /// Default IPv6 gateway.
    #[serde(default)]
    pub gateway6: Option<String>,
    /// Resolver addresses, either family.
    #[serde(default)]
    pub dns: Vec<String>,
    /// Additional static routes beyond the default gateways.
    #[serde(default)]
    pub routes: Vec<RouteDescriptor>,
}

/// One IPv4 address assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ipv4Assignment {
    pub address: String,
    /// Dotted-quad form, e.g. `255.255.255.0`.
    pub netmask: String,
}

/// One IPv6 address assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ipv6Assignment {
    pub address: String,
    pub prefixlen: u8,
}

/// A static route to a destination network via a gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDescriptor {
    /// Destination network address.
    pub route: String,
    /// Dotted-quad netmask or bare prefix length.
    pub netmask: String,
    pub gateway: String,
}
