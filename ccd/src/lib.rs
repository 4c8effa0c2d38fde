//! Per-client tunnel server configuration, assembled from stored client
//! records and rendered as a `client-config-dir` directive block.
//!
//! ```
//! use ccd::ClientConfig;
//!
//! let mut config = ClientConfig::new("192.168.10.1", "255.255.255.0").unwrap();
//! config.add_network("192.168.20.0/24").unwrap();
//! config.add_route("192.168.30.0/24", None, 0).unwrap();
//!
//! assert_eq!(
//!     config.render().unwrap(),
//!     "ifconfig-push 192.168.10.1 255.255.255.0\n\
//!      iroute 192.168.20.0 255.255.255.0\n\
//!      push \"route 192.168.30.0 255.255.255.0\"\n"
//! );
//! ```

use thiserror::Error;

pub use ccd_common::*;
pub use ccd_config::*;
pub use ccd_inet::*;
pub use ccd_store::*;

#[derive(Debug, Error)]
pub enum AssembleError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    /// The record exists but is flagged inactive; no configuration is
    /// produced for it.
    #[error("Client {0:?} is not active")]
    InactiveClient(String),
}

/// Assembles the tunnel configuration for the client with the given
/// common name: looks up the record, applies its address pairs and
/// appends its stored networks in row order.
pub fn client_config_for<S: ClientStore>(
    store: &S,
    cn: &str,
) -> Result<ClientConfig, AssembleError> {
    let client = store.find_client_by_cn(cn)?;
    if !client.is_active {
        return Err(AssembleError::InactiveClient(client.cn));
    }

    tracing::debug!(cn = %client.cn, id = client.id, "assembling client configuration");

    let mut config = ClientConfig::new(&client.ipv4_addr, &client.ipv4_remote_addr)?;

    if let Some(ipv6_addr) = client.ipv6_addr.as_deref() {
        config.set_ipv6_addr(ipv6_addr, client.ipv6_remote_addr.as_deref())?;
    }

    for network in store.find_networks_by_client_id(client.id)? {
        config.add_network(&network.network_addr)?;
    }

    Ok(config)
}
