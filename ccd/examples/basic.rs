use std::io;

use ccd::{client_config_for, MemoryStore};

fn main() {
    tracing_subscriber::fmt().init();

    // Seed a store the way a provisioning backend would.
    let mut store = MemoryStore::new();
    let id = store
        .insert_client(
            "client1",
            "192.168.10.1",
            "255.255.255.0",
            Some("2001:db8:10::1/64"),
            None,
        )
        .unwrap();
    store.insert_network(id, "192.168.20.0/24");
    store.insert_network(id, "2001:db8:20::/64");

    // Assemble the client's configuration and write the directive block
    // to stdout, where the tunnel server would pick it up.
    let mut config = client_config_for(&store, "client1").unwrap();
    config
        .add_route("192.168.50.0/24", Some("192.168.254.1"), 10)
        .unwrap();

    config.build_to(&mut io::stdout()).unwrap();
}
