//! Rendering of a [`ClientConfig`] into its directive text block.
//!
//! The block is always built in an internal buffer first: if any step
//! fails, the partial buffer is dropped and the caller's sink never sees
//! incomplete output.

use std::{fmt, io, net::Ipv4Addr};

use bytes::BytesMut;

use ccd_inet::{
    ipv4_prefix_to_netmask, IPV4_ADDR_MAX_LEN, IPV6_ADDR_MAX_LEN, IPV6_CIDR_MAX_LEN,
};

use crate::{config::Ipv6Interface, ClientConfig, ConfigError, NetworkEntry, RouteEntry};

impl ClientConfig {
    /// Renders the full directive block into a string.
    ///
    /// Pure: the configuration is not mutated and repeated calls return
    /// identical output.
    pub fn render(&self) -> Result<String, ConfigError> {
        let mut out = String::with_capacity(self.capacity_hint());
        self.render_into(&mut out)?;
        Ok(out)
    }

    /// Renders the full directive block and writes it to `sink` in a
    /// single write. On error nothing reaches the sink.
    pub fn build_to<W: io::Write>(&self, sink: &mut W) -> Result<(), ConfigError> {
        let mut buf = BytesMut::with_capacity(self.capacity_hint());
        self.render_into(&mut buf)?;

        sink.write_all(&buf)?;
        Ok(())
    }

    fn render_into<W: fmt::Write>(&self, out: &mut W) -> Result<(), ConfigError> {
        write_ifconfig_push(out, self)?;

        if let Some(iface) = self.ipv6_interface() {
            write_ifconfig_ipv6_push(out, iface)?;
        }

        for network in self.networks() {
            write_iroute(out, network)?;
        }

        for route in self.routes() {
            write_push_route(out, route)?;
        }

        Ok(())
    }

    /// Worst-case size of the rendered block, one line per directive.
    fn capacity_hint(&self) -> usize {
        let v4 = IPV4_ADDR_MAX_LEN + 1;
        let v6 = IPV6_ADDR_MAX_LEN + 1;
        let v6_cidr = IPV6_CIDR_MAX_LEN + 1;

        let mut hint = "ifconfig-push\n".len() + 2 * v4;
        if self.ipv6_interface().is_some() {
            hint += "ifconfig-ipv6-push\n".len() + v6_cidr + v6;
        }
        hint += self.networks().len() * ("iroute-ipv6\n".len() + v6_cidr.max(2 * v4));
        hint += self.routes().len() * ("push \"route-ipv6\"\n".len() + v6_cidr.max(3 * v4) + v6 + 6);

        hint
    }
}

fn write_ifconfig_push<W: fmt::Write>(out: &mut W, config: &ClientConfig) -> Result<(), ConfigError> {
    writeln!(
        out,
        "ifconfig-push {} {}",
        config.ipv4_addr(),
        config.ipv4_remote_addr()
    )?;
    Ok(())
}

fn write_ifconfig_ipv6_push<W: fmt::Write>(
    out: &mut W,
    iface: &Ipv6Interface,
) -> Result<(), ConfigError> {
    write!(out, "ifconfig-ipv6-push {}/{}", iface.addr, iface.prefix)?;

    if !iface.remote_addr.is_unspecified() {
        write!(out, " {}", iface.remote_addr)?;
    }

    writeln!(out)?;
    Ok(())
}

fn write_iroute<W: fmt::Write>(out: &mut W, network: &NetworkEntry) -> Result<(), ConfigError> {
    match network {
        NetworkEntry::V4 { addr, prefix } => {
            write!(out, "iroute {addr}")?;

            // The all-ones netmask is the directive's implicit default.
            let netmask = ipv4_prefix_to_netmask(*prefix)?;
            if netmask != Ipv4Addr::BROADCAST {
                write!(out, " {netmask}")?;
            }

            writeln!(out)?;
        }
        NetworkEntry::V6 { addr, prefix } => {
            writeln!(out, "iroute-ipv6 {addr}/{prefix}")?;
        }
    }

    Ok(())
}

fn write_push_route<W: fmt::Write>(out: &mut W, route: &RouteEntry) -> Result<(), ConfigError> {
    match route {
        RouteEntry::V4 {
            addr,
            prefix,
            gateway,
            metric,
        } => {
            write!(out, "push \"route {addr}")?;

            let netmask = ipv4_prefix_to_netmask(*prefix)?;
            let has_gateway = !gateway.is_unspecified();

            // The netmask may only be suppressed when it is the implicit
            // all-ones default AND no gateway follows it: a gateway token
            // in third position would otherwise be read as a netmask.
            if netmask != Ipv4Addr::BROADCAST || has_gateway {
                write!(out, " {netmask}")?;
            }

            if has_gateway {
                write!(out, " {gateway}")?;
            }

            if has_gateway && *metric > 0 {
                write!(out, " {metric}")?;
            }

            out.write_str("\"\n")?;
        }
        RouteEntry::V6 {
            addr,
            prefix,
            gateway,
            metric,
        } => {
            write!(out, "push \"route-ipv6 {addr}/{prefix}")?;

            let has_gateway = !gateway.is_unspecified();

            if has_gateway {
                write!(out, " {gateway}")?;
            }

            if has_gateway && *metric > 0 {
                write!(out, " {metric}")?;
            }

            out.write_str("\"\n")?;
        }
    }

    Ok(())
}
