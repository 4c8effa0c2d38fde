use rustc_hash::FxHashMap;

use crate::{ClientStore, StoreError, VpnClient, VpnClientNetwork, RFC5280_CN_MAX_LENGTH};

/// An in-memory [`ClientStore`] indexed by common name.
///
/// Serves as the reference backend for tests and examples, and as the
/// receiving end for records shipped in from another process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    clients: FxHashMap<String, VpnClient>,
    networks: Vec<VpnClientNetwork>,
    next_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            clients: FxHashMap::default(),
            networks: Vec::new(),
            next_id: 0,
        }
    }

    /// Inserts a client record and returns its assigned id.
    ///
    /// An existing record under the same common name is replaced.
    pub fn insert_client(
        &mut self,
        cn: &str,
        ipv4_addr: &str,
        ipv4_remote_addr: &str,
        ipv6_addr: Option<&str>,
        ipv6_remote_addr: Option<&str>,
    ) -> Result<i64, StoreError> {
        if cn.len() > RFC5280_CN_MAX_LENGTH {
            return Err(StoreError::CnTooLong(cn.to_owned()));
        }

        self.next_id += 1;
        let id = self.next_id;

        self.clients.insert(
            cn.to_owned(),
            VpnClient {
                id,
                cn: cn.to_owned(),
                is_active: true,
                ipv4_addr: ipv4_addr.to_owned(),
                ipv4_remote_addr: ipv4_remote_addr.to_owned(),
                ipv6_addr: ipv6_addr.map(str::to_owned),
                ipv6_remote_addr: ipv6_remote_addr.map(str::to_owned),
            },
        );

        Ok(id)
    }

    /// Marks an existing client active or inactive.
    pub fn set_active(&mut self, cn: &str, is_active: bool) -> Result<(), StoreError> {
        let client = self
            .clients
            .get_mut(cn)
            .ok_or_else(|| StoreError::NotFound(cn.to_owned()))?;
        client.is_active = is_active;
        Ok(())
    }

    /// Appends a network row for the given client id.
    pub fn insert_network(&mut self, client_id: i64, network_addr: &str) -> i64 {
        self.next_id += 1;
        let id = self.next_id;

        self.networks.push(VpnClientNetwork {
            id,
            client_id,
            network_addr: network_addr.to_owned(),
        });

        id
    }
}

impl ClientStore for MemoryStore {
    fn find_client_by_cn(&self, cn: &str) -> Result<VpnClient, StoreError> {
        tracing::debug!(cn, "looking up client record");

        self.clients
            .get(cn)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(cn.to_owned()))
    }

    fn find_networks_by_client_id(
        &self,
        client_id: i64,
    ) -> Result<Vec<VpnClientNetwork>, StoreError> {
        tracing::debug!(client_id, "looking up client networks");

        Ok(self
            .networks
            .iter()
            .filter(|network| network.client_id == client_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_client_by_cn_misses_with_not_found() {
        let store = MemoryStore::new();
        assert_eq!(
            store.find_client_by_cn("client1"),
            Err(StoreError::NotFound("client1".to_owned()))
        );
    }

    #[test]
    fn inserted_client_is_found() {
        let mut store = MemoryStore::new();
        let id = store
            .insert_client("client1", "192.168.10.1", "255.255.255.0", None, None)
            .unwrap();

        let client = store.find_client_by_cn("client1").unwrap();
        assert_eq!(client.id, id);
        assert!(client.is_active);
        assert_eq!(client.ipv4_addr, "192.168.10.1");
        assert_eq!(client.ipv6_addr, None);
    }

    #[test]
    fn networks_keep_insertion_order_per_client() {
        let mut store = MemoryStore::new();
        let id1 = store
            .insert_client("client1", "192.168.10.1", "255.255.255.0", None, None)
            .unwrap();
        let id2 = store
            .insert_client("client2", "192.168.10.2", "255.255.255.0", None, None)
            .unwrap();

        store.insert_network(id1, "192.168.20.0/24");
        store.insert_network(id2, "10.0.0.0/8");
        store.insert_network(id1, "2001:db8:20::/64");

        let networks = store.find_networks_by_client_id(id1).unwrap();
        assert_eq!(networks.len(), 2);
        assert_eq!(networks[0].network_addr, "192.168.20.0/24");
        assert_eq!(networks[1].network_addr, "2001:db8:20::/64");

        // A client without rows yields an empty list, not an error.
        assert_eq!(store.find_networks_by_client_id(999).unwrap(), vec![]);
    }

    #[test]
    fn overlong_cn_is_rejected() {
        let mut store = MemoryStore::new();
        let cn = "x".repeat(RFC5280_CN_MAX_LENGTH + 1);
        assert_eq!(
            store.insert_client(&cn, "192.168.10.1", "255.255.255.0", None, None),
            Err(StoreError::CnTooLong(cn))
        );
    }
}
