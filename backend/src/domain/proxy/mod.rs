//! Same-origin forwarding of fleet API calls.
//!
//! Inbound requests under `/api` are matched against a declarative
//! [`RouteTable`] and re-issued upstream by one generic [`ProxyService`].
//! Upstream replies come back byte for byte; failures inside the proxy turn
//! into `{"success": false, "message": ..}` envelopes.

mod method;
mod route;
mod service;
mod table;

pub use method::{ProxyMethod, UnsupportedMethod};
pub use route::{PathParams, ProxyRoute, RouteTemplate, RouteTemplateError};
pub use service::{
    ForwardRequest, METHOD_NOT_ALLOWED_MESSAGE, NOT_FOUND_MESSAGE, PROXY_ERROR_PREFIX,
    ProxyResponse, ProxyService,
};
pub use table::RouteTable;
