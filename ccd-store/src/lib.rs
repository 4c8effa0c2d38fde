//! The lookup boundary the config assembly consumes: client and network
//! records, the [`ClientStore`] trait, and an in-memory reference
//! implementation.
//!
//! The configuration core has no dependency on how or where this data is
//! stored; any backend that can answer the two lookups can stand behind
//! the trait.

use thiserror::Error;

mod memory;
mod model;

pub use memory::MemoryStore;
pub use model::{VpnClient, VpnClientNetwork, RFC5280_CN_MAX_LENGTH};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No client record exists for the requested common name.
    #[error("No client found for common name {0:?}")]
    NotFound(String),
    #[error("Common name exceeds {RFC5280_CN_MAX_LENGTH} characters: {0:?}")]
    CnTooLong(String),
}

/// Read access to the client records a configuration is assembled from.
pub trait ClientStore {
    /// Looks up a single client record by its certificate common name.
    fn find_client_by_cn(&self, cn: &str) -> Result<VpnClient, StoreError>;

    /// Returns the client's network rows in stored order. A client
    /// without networks yields an empty list, not an error.
    fn find_networks_by_client_id(&self, client_id: i64)
        -> Result<Vec<VpnClientNetwork>, StoreError>;
}
