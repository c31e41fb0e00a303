//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **upstream**: reqwest gateway that re-issues proxied requests
//! - **storage**: key-value stores behind the session
//! - **fleet_api**: typed client returning `CallOutcome`s
//!
//! Adapters translate between domain types and transport representations.
//! They contain no business rules.

pub mod fleet_api;
pub mod storage;
pub mod upstream;
