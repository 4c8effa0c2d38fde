use std::net::{Ipv4Addr, Ipv6Addr};

use ipnet::{Ipv4Net, Ipv6Net};

use crate::{parse_ipv4_addr, parse_ipv6_addr, AddressFamily, InetError};

/// Parses an IPv4 CIDR string into an address and a prefix length.
///
/// Two tiers, tried in order:
/// 1. A canonical network-prefix parse: a bare address means a host route
///    (prefix 32), and `addr/prefix` is accepted only when the address is
///    the network address of the prefix (host bits zero).
/// 2. A permissive fallback for host addresses carrying an explicit
///    prefix, e.g. a /32 route to a single host or a /24 expressed from a
///    non-aligned address.
pub fn parse_ipv4_cidr(text: &str) -> Result<(Ipv4Addr, u8), InetError> {
    if let Some(parsed) = parse_ipv4_network(text) {
        return Ok(parsed);
    }

    parse_cidr_fallback(text, AddressFamily::V4, parse_ipv4_addr)
}

/// Parses an IPv6 CIDR string into an address and a prefix length.
///
/// Same two-tier strategy as [`parse_ipv4_cidr`], with a bare address
/// meaning a /128 host route.
pub fn parse_ipv6_cidr(text: &str) -> Result<(Ipv6Addr, u8), InetError> {
    if let Some(parsed) = parse_ipv6_network(text) {
        return Ok(parsed);
    }

    parse_cidr_fallback(text, AddressFamily::V6, parse_ipv6_addr)
}

/// Canonical tier: strict about network alignment.
fn parse_ipv4_network(text: &str) -> Option<(Ipv4Addr, u8)> {
    if !text.contains('/') {
        return text.parse::<Ipv4Addr>().ok().map(|addr| (addr, 32));
    }

    let net = text.parse::<Ipv4Net>().ok()?;
    (net.addr() == net.network()).then(|| (net.addr(), net.prefix_len()))
}

fn parse_ipv6_network(text: &str) -> Option<(Ipv6Addr, u8)> {
    if !text.contains('/') {
        return text.parse::<Ipv6Addr>().ok().map(|addr| (addr, 128));
    }

    let net = text.parse::<Ipv6Net>().ok()?;
    (net.addr() == net.network()).then(|| (net.addr(), net.prefix_len()))
}

/// Fallback tier: exactly one `/`, a plain address on the left and a
/// decimal prefix length on the right.
fn parse_cidr_fallback<A>(
    text: &str,
    family: AddressFamily,
    parse_addr: impl Fn(&str) -> Result<A, InetError>,
) -> Result<(A, u8), InetError> {
    let mut parts = text.split('/');
    let (Some(addr_part), Some(prefix_part), None) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(InetError::InvalidCidr(text.to_owned()));
    };

    let addr = parse_addr(addr_part).map_err(|_| InetError::InvalidCidr(text.to_owned()))?;

    // An empty or non-numeric prefix never consumed a digit.
    let prefix: u32 = prefix_part
        .parse()
        .map_err(|_| InetError::InvalidCidr(text.to_owned()))?;
    if prefix > u32::from(family.max_prefix_len()) {
        return Err(InetError::PrefixOutOfRange {
            prefix,
            max: family.max_prefix_len(),
        });
    }

    Ok((addr, prefix as u8))
}

/// Converts an IPv4 prefix length to the equivalent netmask address:
/// the top `prefix` bits set, in network byte order.
pub fn ipv4_prefix_to_netmask(prefix: u8) -> Result<Ipv4Addr, InetError> {
    if prefix > 32 {
        return Err(InetError::PrefixOutOfRange {
            prefix: u32::from(prefix),
            max: 32,
        });
    }

    let mask = if prefix == 0 {
        0
    } else {
        u32::MAX << (32 - prefix)
    };

    Ok(Ipv4Addr::from(mask))
}
