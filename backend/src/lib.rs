//! Authenticated same-origin proxy and typed client for the fleet management
//! API.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod models;
pub mod outbound;
pub mod settings;

pub use middleware::Trace;
