//! Textual and binary representations of IPv4/IPv6 addresses, CIDR
//! notation and netmasks, with the strict validation the directive
//! builder depends on.

use thiserror::Error;

mod addr;
mod cidr;
mod family;

pub use addr::{
    ipv4_addr_to_string, ipv6_addr_to_string, parse_ipv4_addr, parse_ipv6_addr, IPV4_ADDR_MAX_LEN,
    IPV4_CIDR_MAX_LEN, IPV6_ADDR_MAX_LEN, IPV6_CIDR_MAX_LEN,
};
pub use cidr::{ipv4_prefix_to_netmask, parse_ipv4_cidr, parse_ipv6_cidr};
pub use family::{predict_family, AddressFamily};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InetError {
    /// The address family is neither IPv4 nor IPv6, or cannot be
    /// determined from the input.
    #[error("Unsupported address family")]
    UnsupportedFamily,
    #[error("Invalid address: {0}")]
    InvalidAddress(String),
    #[error("Invalid CIDR: {0}")]
    InvalidCidr(String),
    #[error("Prefix length {prefix} out of range, max {max}")]
    PrefixOutOfRange { prefix: u32, max: u8 },
}
