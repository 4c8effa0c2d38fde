use std::net::{Ipv4Addr, Ipv6Addr};

use crate::InetError;

/// Canonical maximum text length of an IPv4 address ("255.255.255.255").
pub const IPV4_ADDR_MAX_LEN: usize = 15;
/// Canonical maximum text length of an IPv6 address.
pub const IPV6_ADDR_MAX_LEN: usize = 45;
/// Canonical maximum text length of an IPv4 CIDR ("255.255.255.255/32").
pub const IPV4_CIDR_MAX_LEN: usize = IPV4_ADDR_MAX_LEN + 3;
/// Canonical maximum text length of an IPv6 CIDR.
pub const IPV6_CIDR_MAX_LEN: usize = IPV6_ADDR_MAX_LEN + 4;

/// Converts an IPv4 address string to its binary representation.
pub fn parse_ipv4_addr(text: &str) -> Result<Ipv4Addr, InetError> {
    text.parse()
        .map_err(|_| InetError::InvalidAddress(text.to_owned()))
}

/// Converts an IPv6 address string to its binary representation.
pub fn parse_ipv6_addr(text: &str) -> Result<Ipv6Addr, InetError> {
    text.parse()
        .map_err(|_| InetError::InvalidAddress(text.to_owned()))
}

/// Formats an IPv4 address in canonical dotted-quad form.
#[inline]
pub fn ipv4_addr_to_string(addr: Ipv4Addr) -> String {
    addr.to_string()
}

/// Formats an IPv6 address in canonical (RFC 5952) form: lowercase hex
/// with the longest zero run compressed.
#[inline]
pub fn ipv6_addr_to_string(addr: Ipv6Addr) -> String {
    addr.to_string()
}
