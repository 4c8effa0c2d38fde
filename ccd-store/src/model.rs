use serde::{Deserialize, Serialize};

/// Upper bound for a certificate common name, per RFC 5280.
pub const RFC5280_CN_MAX_LENGTH: usize = 64;

/// One client record as the store hands it out.
///
/// Addresses are kept as text here; they are only parsed and validated
/// when a configuration is assembled from the record. `ipv6_addr` carries
/// a CIDR (address plus prefix), the other fields plain addresses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VpnClient {
    pub id: i64,
    pub cn: String,
    pub is_active: bool,
    pub ipv4_addr: String,
    pub ipv4_remote_addr: String,
    pub ipv6_addr: Option<String>,
    pub ipv6_remote_addr: Option<String>,
}

/// One network row: a subnet reachable through the owning client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VpnClientNetwork {
    pub id: i64,
    pub client_id: i64,
    /// CIDR text, IPv4 or IPv6.
    pub network_addr: String,
}
