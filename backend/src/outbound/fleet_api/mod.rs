//! Typed client for the fleet API.
//!
//! Every call returns a [`CallOutcome`] wrapping the decoded envelope, so
//! callers branch the same way on every endpoint.

mod client;
mod endpoints;
mod outcome;
mod query;

pub use client::{FleetClient, QueryPairs};
pub use endpoints::Ack;
pub use outcome::{CallOutcome, PARSE_FAILURE_PREFIX, invoke};
pub use query::{MaintenanceCostFilter, ReportRange, TripCostFilter, VehicleCostQuery};
