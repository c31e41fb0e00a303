//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on the domain service and stay testable without network I/O.

use std::sync::Arc;

use crate::domain::proxy::ProxyService;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub proxy: Arc<ProxyService>,
}

impl HttpState {
    /// Bundle the forwarding service.
    pub fn new(proxy: Arc<ProxyService>) -> Self {
        Self { proxy }
    }
}
