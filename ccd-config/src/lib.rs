//! Per-client tunnel configuration: the network/route data model and the
//! directive builder rendering it into a `client-config-dir` fragment.

use thiserror::Error;

use ccd_common::VectorError;
use ccd_inet::{AddressFamily, InetError};

mod config;
mod entry;
mod render;

pub use config::ClientConfig;
pub use entry::{NetworkEntry, RouteEntry};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Address error: {0}")]
    Inet(#[from] InetError),
    #[error("Container error: {0}")]
    Vector(#[from] VectorError),
    #[error("Gateway family {gateway:?} does not match destination family {destination:?}")]
    GatewayFamilyMismatch {
        destination: AddressFamily,
        gateway: AddressFamily,
    },
    #[error("A metric greater than zero requires a gateway")]
    MetricWithoutGateway,
    #[error("Format error: {0}")]
    Fmt(#[from] std::fmt::Error),
    #[error("IO error: {0:?}")]
    Io(#[from] std::io::Error),
}
