use ccd::{client_config_for, AssembleError, ClientStore, MemoryStore, StoreError};

fn seeded_store() -> (MemoryStore, i64) {
    let mut store = MemoryStore::new();
    let id = store
        .insert_client(
            "client1",
            "192.168.10.1",
            "255.255.255.0",
            Some("2001:db8:10::1/64"),
            Some("2001:db8:10::2"),
        )
        .unwrap();
    store.insert_network(id, "192.168.20.0/24");
    store.insert_network(id, "2001:db8:20::/64");
    (store, id)
}

#[test]
fn assembles_config_from_stored_records() {
    let (store, _) = seeded_store();

    let config = client_config_for(&store, "client1").unwrap();

    assert_eq!(
        config.render().unwrap(),
        "ifconfig-push 192.168.10.1 255.255.255.0\n\
         ifconfig-ipv6-push 2001:db8:10::1/64 2001:db8:10::2\n\
         iroute 192.168.20.0 255.255.255.0\n\
         iroute-ipv6 2001:db8:20::/64\n"
    );
}

#[test]
fn unknown_cn_is_not_found() {
    let (store, _) = seeded_store();

    assert!(matches!(
        client_config_for(&store, "client2"),
        Err(AssembleError::Store(StoreError::NotFound(_)))
    ));
}

#[test]
fn inactive_client_is_refused() {
    let (mut store, _) = seeded_store();
    store.set_active("client1", false).unwrap();

    assert!(matches!(
        client_config_for(&store, "client1"),
        Err(AssembleError::InactiveClient(cn)) if cn == "client1"
    ));
}

#[test]
fn bad_network_row_fails_the_assembly() {
    let (mut store, id) = seeded_store();
    store.insert_network(id, "not-a-cidr");

    assert!(matches!(
        client_config_for(&store, "client1"),
        Err(AssembleError::Config(_))
    ));
}

#[test]
fn record_survives_a_json_hop() {
    let (store, id) = seeded_store();

    // A record serialized by one process and deserialized by another
    // assembles the same configuration.
    let client = store.find_client_by_cn("client1").unwrap();
    let json = serde_json::to_string(&client).unwrap();
    let copy: ccd::VpnClient = serde_json::from_str(&json).unwrap();

    let mut other = MemoryStore::new();
    let new_id = other
        .insert_client(
            &copy.cn,
            &copy.ipv4_addr,
            &copy.ipv4_remote_addr,
            copy.ipv6_addr.as_deref(),
            copy.ipv6_remote_addr.as_deref(),
        )
        .unwrap();
    for network in store.find_networks_by_client_id(id).unwrap() {
        other.insert_network(new_id, &network.network_addr);
    }

    assert_eq!(
        client_config_for(&other, "client1").unwrap().render().unwrap(),
        client_config_for(&store, "client1").unwrap().render().unwrap()
    );
}
