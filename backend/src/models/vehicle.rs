//! Vehicle payloads.

use serde::{Deserialize, Serialize};

use super::driver::Driver;
use super::trip::TripListItem;

wire_status! {
    /// Operational state of a vehicle.
    pub enum VehicleState {
        /// Available for trips.
        Active => "active",
        /// Parked or decommissioned.
        Inactive => "inactive",
        /// In the workshop.
        Maintenance => "maintenance",
    }
}

/// A fleet vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vehicle {
    /// Vehicle identifier.
    pub id: i64,
    /// Registration plate.
    pub registration_number: String,
    /// Manufacturer.
    pub make: String,
    /// Model name.
    pub model: String,
    /// Model year.
    pub year: i32,
    /// Body type, for example `truck`.
    pub vehicle_type: String,
    /// Fuel type, for example `diesel`.
    pub fuel_type: String,
    /// Load capacity.
    pub capacity: f64,
    /// Paint colour.
    pub color: Option<String>,
    /// Odometer reading.
    pub mileage: Option<f64>,
    /// Raw state; see [`Vehicle::vehicle_state`].
    pub state: String,
    /// Driver assigned to this vehicle.
    pub assigned_driver_id: Option<i64>,
    /// Expanded driver record, when the endpoint embeds it.
    pub assigned_driver: Option<Driver>,
    /// Owning account.
    pub owner_id: i64,
    /// Creation timestamp.
    pub created_at: Option<String>,
    /// Last update timestamp.
    pub updated_at: Option<String>,
}

impl Default for Vehicle {
    fn default() -> Self {
        Self {
            id: 0,
            registration_number: String::new(),
            make: String::new(),
            model: String::new(),
            year: 0,
            vehicle_type: String::new(),
            fuel_type: String::new(),
            capacity: 0.0,
            color: None,
            mileage: None,
            state: VehicleState::Active.as_str().to_owned(),
            assigned_driver_id: None,
            assigned_driver: None,
            owner_id: 0,
            created_at: None,
            updated_at: None,
        }
    }
}

impl Vehicle {
    /// Parsed state; unknown values read as active.
    #[must_use]
    pub fn vehicle_state(&self) -> VehicleState {
        VehicleState::from_wire(&self.state)
    }

    /// `make model (registration)`.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {} ({})", self.make, self.model, self.registration_number)
    }
}

/// Create or update a vehicle. Absent fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleRequest {
    /// Registration plate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_number: Option<String>,
    /// Manufacturer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,
    /// Model name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Model year.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// Body type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<String>,
    /// Fuel type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel_type: Option<String>,
    /// Load capacity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<f64>,
    /// Paint colour.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Odometer reading.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mileage: Option<f64>,
    /// Driver to assign.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_driver_id: Option<i64>,
}

/// Body of `PATCH /vehicles/{id}/state`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleStateRequest {
    /// Target state in wire form.
    pub state: String,
}

impl From<VehicleState> for VehicleStateRequest {
    fn from(state: VehicleState) -> Self {
        Self {
            state: state.as_str().to_owned(),
        }
    }
}

/// Last known position of a vehicle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleLocation {
    /// Vehicle identifier.
    pub vehicle_id: i64,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Speed in km/h.
    pub speed: Option<f64>,
    /// Heading in degrees.
    pub heading: Option<f64>,
    /// Altitude in metres.
    pub altitude: Option<f64>,
    /// Fix accuracy in metres.
    pub accuracy: Option<f64>,
    /// When the fix was recorded.
    pub recorded_at: Option<String>,
}

/// Headline figures for the vehicle detail screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleOverview {
    /// The vehicle itself.
    pub vehicle: Vehicle,
    /// Last known location.
    pub current_location: Option<VehicleLocation>,
    /// Trips ever assigned.
    pub total_trips: u32,
    /// Trips currently running.
    pub active_trips: u32,
    /// Distance covered in km.
    pub total_distance: f64,
    /// Maintenance entries recorded.
    pub maintenance_count: u32,
}

/// Overview plus recent trips and document counts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleDetail {
    /// Headline figures.
    pub overview: VehicleOverview,
    /// Most recent trips.
    pub recent_trips: Vec<TripListItem>,
    /// Document counts by status.
    pub documents_summary: Option<DocumentsSummary>,
}

/// Document counts for one vehicle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentsSummary {
    /// All documents.
    pub total: u32,
    /// Verified documents.
    pub verified: u32,
    /// Awaiting verification.
    pub pending: u32,
    /// Past their expiry date.
    pub expired: u32,
    /// Expiring soon.
    pub expiring: u32,
}
