//! Trip payloads, including stops, progress and live location updates.

use serde::{Deserialize, Serialize};

use super::driver::Driver;
use super::vehicle::Vehicle;

wire_status! {
    /// Lifecycle state of a trip.
    pub enum TripState {
        /// Scheduled, not started.
        Planned => "planned",
        /// On the road.
        InProgress => "in_progress",
        /// Delivered.
        Completed => "completed",
        /// Called off.
        Cancelled => "cancelled",
    }
}

wire_status! {
    /// Dispatch priority of a trip.
    pub enum TripPriority {
        /// Default priority.
        Normal => "normal",
        /// Can wait.
        Low => "low",
        /// Ahead of normal trips.
        High => "high",
        /// Dispatch immediately.
        Urgent => "urgent",
    }
}

/// Trip row as shown in list views. Labels are preformatted upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TripListItem {
    /// Trip identifier.
    pub id: i64,
    /// Vehicle on the trip.
    pub vehicle_id: i64,
    /// Driver on the trip.
    pub driver_id: i64,
    /// Registration of the vehicle.
    pub vehicle_number: Option<String>,
    /// Driver display name.
    pub driver_name: Option<String>,
    /// Raw state; see [`TripListItem::trip_state`].
    pub state: String,
    /// Human label for the state.
    pub state_label: Option<String>,
    /// Origin.
    pub start_location: String,
    /// Destination.
    pub end_location: String,
    /// Scheduled date, `DD-MM-YYYY`.
    pub scheduled_date: Option<String>,
    /// Planned distance in km.
    pub estimated_distance: Option<f64>,
    /// Planned distance label.
    pub estimated_distance_label: Option<String>,
    /// Planned duration in minutes.
    pub estimated_duration_minutes: Option<u32>,
    /// Planned duration label.
    pub estimated_duration_label: Option<String>,
    /// Distance shown for the current state.
    pub distance_display: Option<String>,
    /// Duration shown for the current state.
    pub duration_display: Option<String>,
    /// Cargo type code.
    pub cargo_type: Option<String>,
    /// Cargo type label.
    pub cargo_type_label: Option<String>,
    /// Sum of recorded costs.
    pub total_cost: Option<f64>,
    /// Formatted total cost.
    pub total_cost_label: Option<String>,
    /// Whether any cost was recorded.
    pub has_costs: bool,
    /// Raw priority.
    pub priority: Option<String>,
    /// Customer name.
    pub customer_name: Option<String>,
}

impl Default for TripListItem {
    fn default() -> Self {
        Self {
            id: 0,
            vehicle_id: 0,
            driver_id: 0,
            vehicle_number: None,
            driver_name: None,
            state: TripState::Planned.as_str().to_owned(),
            state_label: None,
            start_location: String::new(),
            end_location: String::new(),
            scheduled_date: None,
            estimated_distance: None,
            estimated_distance_label: None,
            estimated_duration_minutes: None,
            estimated_duration_label: None,
            distance_display: None,
            duration_display: None,
            cargo_type: None,
            cargo_type_label: None,
            total_cost: None,
            total_cost_label: None,
            has_costs: false,
            priority: None,
            customer_name: None,
        }
    }
}

impl TripListItem {
    /// Parsed state; unknown values read as planned.
    #[must_use]
    pub fn trip_state(&self) -> TripState {
        TripState::from_wire(&self.state)
    }
}

/// Full trip record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Trip {
    /// Trip identifier.
    pub id: i64,
    /// Vehicle on the trip.
    pub vehicle_id: i64,
    /// Driver on the trip.
    pub driver_id: i64,
    /// Embedded vehicle.
    pub vehicle: Option<Vehicle>,
    /// Embedded driver.
    pub driver: Option<Driver>,
    /// Raw state.
    pub state: String,
    /// Scheduled date, `DD-MM-YYYY`.
    pub scheduled_date: Option<String>,
    /// Scheduled start, `HH:MM`.
    pub start_time: Option<String>,
    /// Promised delivery date.
    pub delivery_date: Option<String>,
    /// Promised delivery time.
    pub delivery_time: Option<String>,
    /// Planned start timestamp.
    pub planned_start: Option<String>,
    /// Planned end timestamp.
    pub planned_end: Option<String>,
    /// Actual start timestamp.
    pub actual_start: Option<String>,
    /// Actual end timestamp.
    pub actual_end: Option<String>,
    /// Origin.
    pub start_location: String,
    /// Origin latitude.
    pub start_lat: f64,
    /// Origin longitude.
    pub start_lng: f64,
    /// Destination.
    pub end_location: String,
    /// Destination latitude.
    pub end_lat: f64,
    /// Destination longitude.
    pub end_lng: f64,
    /// Last reported latitude.
    pub current_lat: Option<f64>,
    /// Last reported longitude.
    pub current_lng: Option<f64>,
    /// Planned distance in km.
    pub estimated_distance: Option<f64>,
    /// Distance covered so far.
    pub covered_distance: Option<f64>,
    /// Final distance.
    pub actual_distance: Option<f64>,
    /// Cargo type code.
    pub cargo_type: Option<String>,
    /// Cargo description.
    pub cargo_description: Option<String>,
    /// Weight at loading.
    pub cargo_loading_weight: Option<f64>,
    /// Weight at unloading.
    pub cargo_unloading_weight: Option<f64>,
    /// Unladen vehicle weight.
    pub vehicle_weight: Option<f64>,
    /// Unit for the weights.
    pub weight_unit: Option<String>,
    /// Fuel type.
    pub fuel_type: Option<String>,
    /// Fuel filled before departure.
    pub filled_fuel_quantity: Option<f64>,
    /// Fuel consumed.
    pub used_fuel_quantity: Option<f64>,
    /// Price per unit of fuel.
    pub fuel_rate: Option<f64>,
    /// Fuel efficiency.
    pub km_per_liter: Option<f64>,
    /// Cargo purchase price.
    pub purchase_price: Option<f64>,
    /// Amount billed to the customer.
    pub selling_value: Option<f64>,
    /// Expected expenses.
    pub estimated_expense: Option<f64>,
    /// Payment status.
    pub payment_status: Option<String>,
    /// Amount still owed.
    pub pending_amount: Option<f64>,
    /// Payment mode.
    pub payment_mode: Option<String>,
    /// Customer name.
    pub customer_name: Option<String>,
    /// Customer phone.
    pub customer_contact: Option<String>,
    /// Customer email.
    pub customer_email: Option<String>,
    /// Customer address.
    pub customer_address: Option<String>,
    /// Raw priority.
    pub priority: Option<String>,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Instructions for the driver.
    pub special_instructions: Option<String>,
    /// State-dependent display blocks.
    pub display_info: Option<TripDisplayInfo>,
    /// Owning account.
    pub owner_id: i64,
    /// Creation timestamp.
    pub created_at: Option<String>,
    /// Last update timestamp.
    pub updated_at: Option<String>,
}

impl Default for Trip {
    fn default() -> Self {
        Self {
            id: 0,
            vehicle_id: 0,
            driver_id: 0,
            vehicle: None,
            driver: None,
            state: TripState::Planned.as_str().to_owned(),
            scheduled_date: None,
            start_time: None,
            delivery_date: None,
            delivery_time: None,
            planned_start: None,
            planned_end: None,
            actual_start: None,
            actual_end: None,
            start_location: String::new(),
            start_lat: 0.0,
            start_lng: 0.0,
            end_location: String::new(),
            end_lat: 0.0,
            end_lng: 0.0,
            current_lat: None,
            current_lng: None,
            estimated_distance: None,
            covered_distance: None,
            actual_distance: None,
            cargo_type: None,
            cargo_description: None,
            cargo_loading_weight: None,
            cargo_unloading_weight: None,
            vehicle_weight: None,
            weight_unit: None,
            fuel_type: None,
            filled_fuel_quantity: None,
            used_fuel_quantity: None,
            fuel_rate: None,
            km_per_liter: None,
            purchase_price: None,
            selling_value: None,
            estimated_expense: None,
            payment_status: None,
            pending_amount: None,
            payment_mode: None,
            customer_name: None,
            customer_contact: None,
            customer_email: None,
            customer_address: None,
            priority: None,
            notes: None,
            special_instructions: None,
            display_info: None,
            owner_id: 0,
            created_at: None,
            updated_at: None,
        }
    }
}

impl Trip {
    /// Parsed state; unknown values read as planned.
    #[must_use]
    pub fn trip_state(&self) -> TripState {
        TripState::from_wire(&self.state)
    }

    /// Parsed priority; missing or unknown values read as normal.
    #[must_use]
    pub fn trip_priority(&self) -> TripPriority {
        self.priority
            .as_deref()
            .map_or(TripPriority::Normal, TripPriority::from_wire)
    }
}

/// Display blocks the API computes per trip state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TripDisplayInfo {
    /// Distance figures.
    pub distance_info: Option<DistanceInfo>,
    /// Duration figures.
    pub duration_info: Option<DurationInfo>,
    /// Cargo figures.
    pub cargo_info: Option<CargoInfo>,
    /// Cost figures.
    pub cost_info: Option<CostInfo>,
    /// Progress figures.
    pub progress_info: Option<ProgressInfo>,
}

/// Distance block of [`TripDisplayInfo`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistanceInfo {
    /// Planned distance.
    pub estimated_distance: Option<f64>,
    /// Planned distance label.
    pub estimated_distance_label: Option<String>,
    /// Covered distance.
    pub covered_distance: Option<f64>,
    /// Covered distance label.
    pub covered_distance_label: Option<String>,
    /// Final distance.
    pub total_distance: Option<f64>,
    /// Final distance label.
    pub total_distance_label: Option<String>,
    /// Value to show.
    pub display_value: Option<String>,
    /// Caption to show.
    pub display_label: Option<String>,
}

/// Duration block of [`TripDisplayInfo`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DurationInfo {
    /// Planned minutes.
    pub planned_duration_minutes: Option<u32>,
    /// Planned duration label.
    pub planned_duration_label: Option<String>,
    /// Actual minutes.
    pub actual_duration_minutes: Option<u32>,
    /// Actual duration label.
    pub actual_duration_label: Option<String>,
    /// Value to show.
    pub display_value: Option<String>,
    /// Caption to show.
    pub display_label: Option<String>,
}

/// Cargo block of [`TripDisplayInfo`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CargoInfo {
    /// Cargo type code.
    pub cargo_type: Option<String>,
    /// Cargo type label.
    pub cargo_type_label: Option<String>,
    /// Cargo description.
    pub cargo_description: Option<String>,
    /// Loading weight.
    pub loading_weight: Option<f64>,
    /// Loading weight label.
    pub loading_weight_label: Option<String>,
    /// Weight unit.
    pub weight_unit: Option<String>,
}

/// Cost block of [`TripDisplayInfo`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostInfo {
    /// Whether any cost exists.
    pub has_costs: bool,
    /// Sum of costs.
    pub total_cost: Option<f64>,
    /// Formatted sum.
    pub total_cost_label: Option<String>,
    /// Number of cost entries.
    pub cost_count: u32,
    /// Fuel share.
    pub fuel_cost: Option<f64>,
    /// Toll share.
    pub toll_cost: Option<f64>,
    /// Everything else.
    pub other_costs: Option<f64>,
}

/// Progress block of [`TripDisplayInfo`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressInfo {
    /// Completion percentage.
    pub progress_percent: Option<f64>,
    /// Completion label.
    pub progress_percent_label: Option<String>,
    /// Distance left.
    pub remaining_distance: Option<f64>,
    /// Distance left label.
    pub remaining_distance_label: Option<String>,
    /// Estimated arrival timestamp.
    pub estimated_arrival: Option<String>,
    /// Estimated arrival label.
    pub estimated_arrival_label: Option<String>,
}

/// Body of `POST /trips`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateTripRequest {
    /// Vehicle to dispatch.
    pub vehicle_id: i64,
    /// Driver to dispatch.
    pub driver_id: i64,
    /// Date, `DD-MM-YYYY`.
    pub scheduled_date: String,
    /// Time, `HH:MM`.
    pub start_time: String,
    /// Delivery date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<String>,
    /// Delivery time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_time: Option<String>,
    /// Planned start timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planned_start: Option<String>,
    /// Planned end timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planned_end: Option<String>,
    /// Origin.
    pub start_location: String,
    /// Origin latitude.
    pub start_lat: f64,
    /// Origin longitude.
    pub start_lng: f64,
    /// Destination.
    pub end_location: String,
    /// Destination latitude.
    pub end_lat: f64,
    /// Destination longitude.
    pub end_lng: f64,
    /// Planned distance in km.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_distance: Option<f64>,
    /// Cargo type code.
    pub cargo_type: String,
    /// Cargo description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cargo_description: Option<String>,
    /// Weight at loading.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cargo_loading_weight: Option<f64>,
    /// Weight at unloading.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cargo_unloading_weight: Option<f64>,
    /// Unladen vehicle weight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_weight: Option<f64>,
    /// Weight unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_unit: Option<String>,
    /// Fuel type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel_type: Option<String>,
    /// Fuel filled before departure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filled_fuel_quantity: Option<f64>,
    /// Price per unit of fuel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel_rate: Option<f64>,
    /// Fuel efficiency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub km_per_liter: Option<f64>,
    /// Cargo purchase price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_price: Option<f64>,
    /// Amount billed to the customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selling_value: Option<f64>,
    /// Expected expenses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_expense: Option<f64>,
    /// Payment status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<String>,
    /// Amount still owed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_amount: Option<f64>,
    /// Payment mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_mode: Option<String>,
    /// Customer name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    /// Customer phone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_contact: Option<String>,
    /// Priority in wire form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}

/// Body of `PATCH /trips/{id}/state`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripStateRequest {
    /// Target state in wire form.
    pub state: String,
}

impl From<TripState> for TripStateRequest {
    fn from(state: TripState) -> Self {
        Self {
            state: state.as_str().to_owned(),
        }
    }
}

/// Body of `PATCH /trips/{id}/location`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TripLocationRequest {
    /// Latitude in degrees.
    pub current_lat: f64,
    /// Longitude in degrees.
    pub current_lng: f64,
}

/// Body of `PATCH /trips/{id}/progress`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TripProgressRequest {
    /// Distance covered so far.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub covered_distance: Option<f64>,
    /// Minutes on the road so far.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub covered_duration_minutes: Option<u32>,
    /// Latitude in degrees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_lat: Option<f64>,
    /// Longitude in degrees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_lng: Option<f64>,
}

/// Intermediate stop on a trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TripStop {
    /// Stop identifier.
    pub id: i64,
    /// Parent trip.
    pub trip_id: i64,
    /// Position in the route, from 1.
    pub stop_order: u32,
    /// Place name.
    pub location: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Planned arrival.
    pub arrival_time: Option<String>,
    /// Actual departure.
    pub departure_time: Option<String>,
    /// Planned dwell in minutes.
    pub stop_duration: Option<u32>,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Whether the stop was visited.
    pub is_completed: bool,
    /// When the stop was visited.
    pub completed_at: Option<String>,
}

/// Body of `POST /trips/{id}/stops`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTripStopRequest {
    /// Position in the route, from 1.
    pub stop_order: u32,
    /// Place name.
    pub location: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Planned arrival.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrival_time: Option<String>,
    /// Planned dwell in minutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_duration: Option<u32>,
    /// Free-form notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
