//! Endpoint methods on [`FleetClient`](super::FleetClient), one file per
//! service area.

mod auth;
mod costs;
mod dashboard;
mod documents;
mod drivers;
mod reports;
mod team;
mod trips;
mod vehicles;

/// Envelope for calls whose `data`, if any, is not used.
pub type Ack = pagination::Envelope<serde_json::Value>;
