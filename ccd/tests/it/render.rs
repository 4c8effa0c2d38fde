use ccd::ClientConfig;

/// A configuration exercising every directive form and omission rule in
/// one block, in insertion order.
#[test]
fn full_directive_block() {
    let mut config = ClientConfig::new("192.168.10.1", "255.255.255.0").unwrap();

    config.add_network("192.168.20.0/24").unwrap();
    config.add_network("192.168.30.0/24").unwrap();
    config.add_network("192.168.40.0/32").unwrap();
    config.add_network("0.0.0.0/0").unwrap();
    config.add_network("2001:db8:20::/64").unwrap();
    config.add_network("2001:db8:30::/64").unwrap();
    config.add_network("2001:db8:40::").unwrap();
    config.add_network("::/0").unwrap();

    config.add_route("192.168.90.1", None, 0).unwrap();
    config.add_route("192.168.90.1/32", None, 0).unwrap();
    config.add_route("192.168.90.1/0", None, 0).unwrap();
    config.add_route("0.0.0.0/0", None, 0).unwrap();
    config.add_route("192.168.30.0/24", None, 0).unwrap();
    config
        .add_route("192.168.40.0/24", Some("192.168.254.1"), 0)
        .unwrap();
    config
        .add_route("192.168.50.0/24", Some("192.168.254.1"), 10)
        .unwrap();
    config
        .add_route("DEAD:BEEF:7654:3210:FEDC:3210:7654:BA98", None, 0)
        .unwrap();
    config
        .add_route("2001:db8:85a3::/56", Some("2001:db8:0:0:1::1"), 0)
        .unwrap();
    config
        .add_route("2001:db8:85a4::/56", Some("2001:db8:0:0:1::2"), 10)
        .unwrap();
    config.add_route("::/0", Some("2001:db8:0:0:1::2"), 10).unwrap();

    assert_eq!(
        config.render().unwrap(),
        "ifconfig-push 192.168.10.1 255.255.255.0\n\
         iroute 192.168.20.0 255.255.255.0\n\
         iroute 192.168.30.0 255.255.255.0\n\
         iroute 192.168.40.0\n\
         iroute 0.0.0.0 0.0.0.0\n\
         iroute-ipv6 2001:db8:20::/64\n\
         iroute-ipv6 2001:db8:30::/64\n\
         iroute-ipv6 2001:db8:40::/128\n\
         iroute-ipv6 ::/0\n\
         push \"route 192.168.90.1\"\n\
         push \"route 192.168.90.1\"\n\
         push \"route 192.168.90.1 0.0.0.0\"\n\
         push \"route 0.0.0.0 0.0.0.0\"\n\
         push \"route 192.168.30.0 255.255.255.0\"\n\
         push \"route 192.168.40.0 255.255.255.0 192.168.254.1\"\n\
         push \"route 192.168.50.0 255.255.255.0 192.168.254.1 10\"\n\
         push \"route-ipv6 dead:beef:7654:3210:fedc:3210:7654:ba98/128\"\n\
         push \"route-ipv6 2001:db8:85a3::/56 2001:db8::1:0:0:1\"\n\
         push \"route-ipv6 2001:db8:85a4::/56 2001:db8::1:0:0:2 10\"\n\
         push \"route-ipv6 ::/0 2001:db8::1:0:0:2 10\"\n"
    );
}

#[test]
fn secondary_stack_lines_follow_the_tunnel_address() {
    let mut config = ClientConfig::new("192.168.10.1", "255.255.255.0").unwrap();
    config
        .set_ipv6_addr("2001:db8:10::1/64", Some("2001:db8:10::2"))
        .unwrap();
    config.add_network("192.168.20.0/24").unwrap();

    assert_eq!(
        config.render().unwrap(),
        "ifconfig-push 192.168.10.1 255.255.255.0\n\
         ifconfig-ipv6-push 2001:db8:10::1/64 2001:db8:10::2\n\
         iroute 192.168.20.0 255.255.255.0\n"
    );
}
