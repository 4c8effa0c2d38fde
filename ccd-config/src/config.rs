use std::net::{Ipv4Addr, Ipv6Addr};

use ccd_common::Vector;
use ccd_inet::{
    parse_ipv4_addr, parse_ipv4_cidr, parse_ipv6_addr, parse_ipv6_cidr, predict_family,
    AddressFamily,
};

use crate::{ConfigError, NetworkEntry, RouteEntry};

/// The optional secondary-stack interface addresses of a client.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Ipv6Interface {
    pub(crate) addr: Ipv6Addr,
    pub(crate) prefix: u8,
    /// Unspecified means "no remote".
    pub(crate) remote_addr: Ipv6Addr,
}

/// One client's tunnel configuration: its interface addresses plus the
/// ordered network and route lists.
///
/// Entries accumulate in insertion order and cannot be removed;
/// [`render`](Self::render) transcribes them without reordering or
/// deduplication.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    ipv4_addr: Ipv4Addr,
    ipv4_remote_addr: Ipv4Addr,
    ipv6_interface: Option<Ipv6Interface>,
    networks: Vector<NetworkEntry>,
    routes: Vector<RouteEntry>,
}

impl ClientConfig {
    /// Creates a configuration from the client's tunnel address and tunnel
    /// remote address. Both must be valid IPv4 addresses; either parse
    /// failure aborts creation.
    pub fn new(ipv4_addr: &str, ipv4_remote_addr: &str) -> Result<Self, ConfigError> {
        let ipv4_addr = parse_ipv4_addr(ipv4_addr)?;
        let ipv4_remote_addr = parse_ipv4_addr(ipv4_remote_addr)?;

        Ok(Self {
            ipv4_addr,
            ipv4_remote_addr,
            ipv6_interface: None,
            networks: Vector::new(),
            routes: Vector::new(),
        })
    }

    /// Sets the client's IPv6 interface address from a CIDR string, with
    /// an optional plain IPv6 remote address.
    ///
    /// Nothing is assigned unless every parse succeeds.
    pub fn set_ipv6_addr(&mut self, cidr: &str, remote: Option<&str>) -> Result<(), ConfigError> {
        let (addr, prefix) = parse_ipv6_cidr(cidr)?;
        let remote_addr = match remote {
            Some(text) => parse_ipv6_addr(text)?,
            None => Ipv6Addr::UNSPECIFIED,
        };

        self.ipv6_interface = Some(Ipv6Interface {
            addr,
            prefix,
            remote_addr,
        });
        Ok(())
    }

    /// Appends a reachable subnet, deciding the address family from the
    /// CIDR's syntax.
    pub fn add_network(&mut self, cidr: &str) -> Result<(), ConfigError> {
        match predict_family(cidr)? {
            AddressFamily::V4 => self.add_ipv4_network(cidr),
            AddressFamily::V6 => self.add_ipv6_network(cidr),
        }
    }

    /// Appends an IPv4 subnet reachable through the client.
    pub fn add_ipv4_network(&mut self, cidr: &str) -> Result<(), ConfigError> {
        let (addr, prefix) = parse_ipv4_cidr(cidr)?;
        self.networks.push_back(NetworkEntry::V4 { addr, prefix })?;
        Ok(())
    }

    /// Appends an IPv6 subnet reachable through the client.
    pub fn add_ipv6_network(&mut self, cidr: &str) -> Result<(), ConfigError> {
        let (addr, prefix) = parse_ipv6_cidr(cidr)?;
        self.networks.push_back(NetworkEntry::V6 { addr, prefix })?;
        Ok(())
    }

    /// Appends a route to push to the client, deciding the address family
    /// from the destination's syntax.
    ///
    /// A gateway, if given, must sniff to the same family as the
    /// destination. A metric greater than zero requires a gateway.
    pub fn add_route(
        &mut self,
        dest: &str,
        gateway: Option<&str>,
        metric: u16,
    ) -> Result<(), ConfigError> {
        let destination = predict_family(dest)?;

        if let Some(gateway) = gateway {
            let gateway = predict_family(gateway)?;
            if gateway != destination {
                return Err(ConfigError::GatewayFamilyMismatch {
                    destination,
                    gateway,
                });
            }
        }

        match destination {
            AddressFamily::V4 => self.add_ipv4_route(dest, gateway, metric),
            AddressFamily::V6 => self.add_ipv6_route(dest, gateway, metric),
        }
    }

    /// Appends an IPv4 route. An absent gateway is stored as the
    /// unspecified address; an explicit all-zero gateway counts as unset.
    pub fn add_ipv4_route(
        &mut self,
        dest: &str,
        gateway: Option<&str>,
        metric: u16,
    ) -> Result<(), ConfigError> {
        let (addr, prefix) = parse_ipv4_cidr(dest)?;
        let gateway = match gateway {
            Some(text) => parse_ipv4_addr(text)?,
            None => Ipv4Addr::UNSPECIFIED,
        };

        if metric > 0 && gateway == Ipv4Addr::UNSPECIFIED {
            return Err(ConfigError::MetricWithoutGateway);
        }

        self.routes.push_back(RouteEntry::V4 {
            addr,
            prefix,
            gateway,
            metric,
        })?;
        Ok(())
    }

    /// Appends an IPv6 route. An absent gateway is stored as the
    /// unspecified address; an explicit all-zero gateway counts as unset.
    pub fn add_ipv6_route(
        &mut self,
        dest: &str,
        gateway: Option<&str>,
        metric: u16,
    ) -> Result<(), ConfigError> {
        let (addr, prefix) = parse_ipv6_cidr(dest)?;
        let gateway = match gateway {
            Some(text) => parse_ipv6_addr(text)?,
            None => Ipv6Addr::UNSPECIFIED,
        };

        if metric > 0 && gateway == Ipv6Addr::UNSPECIFIED {
            return Err(ConfigError::MetricWithoutGateway);
        }

        self.routes.push_back(RouteEntry::V6 {
            addr,
            prefix,
            gateway,
            metric,
        })?;
        Ok(())
    }

    /// The client's tunnel address.
    #[inline]
    pub fn ipv4_addr(&self) -> Ipv4Addr {
        self.ipv4_addr
    }

    /// The client's tunnel remote address.
    #[inline]
    pub fn ipv4_remote_addr(&self) -> Ipv4Addr {
        self.ipv4_remote_addr
    }

    /// The IPv6 interface address and prefix, if one was set.
    pub fn ipv6_addr(&self) -> Option<(Ipv6Addr, u8)> {
        self.ipv6_interface.map(|iface| (iface.addr, iface.prefix))
    }

    /// The IPv6 remote address, if an interface was set and the remote is
    /// not the unspecified address.
    pub fn ipv6_remote_addr(&self) -> Option<Ipv6Addr> {
        self.ipv6_interface
            .map(|iface| iface.remote_addr)
            .filter(|addr| *addr != Ipv6Addr::UNSPECIFIED)
    }

    /// The reachable subnets, in insertion order.
    #[inline]
    pub fn networks(&self) -> &Vector<NetworkEntry> {
        &self.networks
    }

    /// The pushed routes, in insertion order.
    #[inline]
    pub fn routes(&self) -> &Vector<RouteEntry> {
        &self.routes
    }

    pub(crate) fn ipv6_interface(&self) -> Option<&Ipv6Interface> {
        self.ipv6_interface.as_ref()
    }
}
