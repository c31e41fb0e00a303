//! HTTP inbound adapter: the `/api` catch-all proxy and health probes.

pub mod error;
pub mod health;
pub mod proxy;
pub mod state;

pub use error::ApiResult;
