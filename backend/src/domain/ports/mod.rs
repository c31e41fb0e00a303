//! Domain ports for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod key_value_store;
mod upstream_gateway;

#[cfg(test)]
pub use key_value_store::MockKeyValueStore;
pub use key_value_store::{KeyValueStore, StorageError};
#[cfg(test)]
pub use upstream_gateway::MockUpstreamGateway;
pub use upstream_gateway::{UpstreamGateway, UpstreamGatewayError, UpstreamReply, UpstreamRequest};
