//! Dotted-quad IPv4 netmask to CIDR prefix-length conversion.

use crate::error::RenderError;

/// Every legal dotted-quad netmask, indexed by its prefix length.
const NETMASKS: [&str; 33] = [
    "0.0.0.0",
    "128.0.0.0",
    "192.0.0.0",
    "224.0.0.0",
    "240.0.0.0",
    "248.0.0.0",
    "252.0.0.0",
    "254.0.0.0",
    "255.0.0.0",
    "255.128.0.0",
    "255.192.0.0",
    "255.224.0.0",
    "255.240.0.0",
    "255.248.0.0",
    "255.252.0.0",
    "255.254.0.0",
    "255.255.0.0",
    "255.255.128.0",
    "255.255.192.0",
    "255.255.224.0",
    "255.255.240.0",
    "255.255.248.0",
    "255.255.252.0",
    "255.255.254.0",
    "255.255.255.0",
    "255.255.255.128",
    "255.255.255.192",
    "255.255.255.224",
    "255.255.255.240",
    "255.255.255.248",
    "255.255.255.252",
    "255.255.255.254",
    "255.255.255.255",
];

/// Convert a dotted-quad netmask to its prefix length.
///
/// Unrecognized input is an error, never a silent default.
pub fn prefix_len(netmask: &str) -> Result<u8, RenderError> {
    NETMASKS
        .iter()
        .position(|m| *m == netmask)
        .map(|idx| idx as u8)
        .ok_or_else(|| RenderError::InvalidNetmask(netmask.to_string()))
}

/// The dotted-quad form of a prefix length, for lengths 0..=32.
pub fn netmask_for(prefix: u8) -> Option<&'static str> {
    NETMASKS.get(usize::from(prefix)).copied()
}

/// Normalize a route netmask that may already be a bare prefix length.
///
/// Route descriptors carry either form; target grammars that need CIDR
/// notation call this instead of [`prefix_len`] directly.
pub fn route_prefix_len(netmask: &str) -> Result<u8, RenderError> {
    if let Ok(prefix) = netmask.parse::<u8>() {
        return Ok(prefix);
    }
    prefix_len(netmask)
}

#[cfg(test)]
mod tests {
    use super::{netmask_for, prefix_len, route_prefix_len, NETMASKS};
    use crate::error::RenderError;

    #[test]
    fn common_netmasks_convert() {
        assert_eq!(prefix_len("255.255.255.0").unwrap(), 24);
        assert_eq!(prefix_len("255.255.0.0").unwrap(), 16);
        assert_eq!(prefix_len("255.255.255.255").unwrap(), 32);
        assert_eq!(prefix_len("0.0.0.0").unwrap(), 0);
    }

    #[test]
    fn unknown_netmask_is_an_error() {
        let err = prefix_len("255.255.255.13").unwrap_err();
        assert!(matches!(err, RenderError::InvalidNetmask(ref m) if m == "255.255.255.13"));
    }

    #[test]
    fn table_round_trips_every_entry() {
        for (prefix, netmask) in NETMASKS.iter().enumerate() {
            assert_eq!(prefix_len(netmask).unwrap(), prefix as u8);
            assert_eq!(netmask_for(prefix as u8), Some(*netmask));
        }
        assert_eq!(netmask_for(33), None);
    }

    #[test]
    fn route_netmasks_accept_both_forms() {
        assert_eq!(route_prefix_len("24").unwrap(), 24);
        assert_eq!(route_prefix_len("255.255.252.0").unwrap(), 22);
        assert!(route_prefix_len("not-a-mask").is_err());
    }
}
