//! Domain core of the fleet console backend.
//!
//! Purpose: hold the transport-agnostic rules. Adapters talk to the domain
//! through the traits in [`ports`] and never the other way round.
//!
//! Public surface:
//! - Error / ErrorCode: failure payload rendered by the HTTP adapter.
//! - proxy: route table and the generic forwarding service.
//! - session: bearer token and user record persistence.
//! - role: role checks and role-gated navigation.
//! - formatting: wire date/time handling and display helpers.

pub mod error;
pub mod formatting;
pub mod ports;
pub mod proxy;
pub mod role;
pub mod session;

pub use self::error::{Error, ErrorCode, TRACE_ID_HEADER};
pub use self::role::UserRole;
pub use self::session::{AuthToken, SessionStore};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use fleet_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::invalid_request("body is not valid UTF-8"))
/// }
/// # assert!(handler().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
