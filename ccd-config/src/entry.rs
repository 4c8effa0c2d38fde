use std::net::{Ipv4Addr, Ipv6Addr};

use ccd_inet::AddressFamily;

/// A subnet reachable through the client, rendered as an `iroute` /
/// `iroute-ipv6` directive.
///
/// The family tag and the address payload live in one variant so they can
/// only be constructed and read together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkEntry {
    V4 { addr: Ipv4Addr, prefix: u8 },
    V6 { addr: Ipv6Addr, prefix: u8 },
}

impl NetworkEntry {
    /// The address family of the entry.
    pub const fn family(&self) -> AddressFamily {
        match self {
            Self::V4 { .. } => AddressFamily::V4,
            Self::V6 { .. } => AddressFamily::V6,
        }
    }
}

/// A subnet pushed to the client's own routing table, rendered as a
/// `push "route ..."` / `push "route-ipv6 ..."` directive.
///
/// An unset gateway is the family's unspecified (all-zero) address. The
/// metric only carries meaning together with a gateway; construction in
/// [`ClientConfig`](crate::ClientConfig) enforces that.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteEntry {
    V4 {
        addr: Ipv4Addr,
        prefix: u8,
        gateway: Ipv4Addr,
        metric: u16,
    },
    V6 {
        addr: Ipv6Addr,
        prefix: u8,
        gateway: Ipv6Addr,
        metric: u16,
    },
}

impl RouteEntry {
    /// The address family of the entry.
    pub const fn family(&self) -> AddressFamily {
        match self {
            Self::V4 { .. } => AddressFamily::V4,
            Self::V6 { .. } => AddressFamily::V6,
        }
    }

    /// Whether the gateway is set, i.e. not the unspecified address.
    pub fn has_gateway(&self) -> bool {
        match self {
            Self::V4 { gateway, .. } => *gateway != Ipv4Addr::UNSPECIFIED,
            Self::V6 { gateway, .. } => *gateway != Ipv6Addr::UNSPECIFIED,
        }
    }
}
