//! Dashboard payloads.

use serde::{Deserialize, Serialize};

use super::trip::TripListItem;

/// Role dashboard returned by `GET /dashboard/{owner,manager,supervisor}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dashboard {
    /// Who is looking.
    pub user_info: Option<DashboardUserInfo>,
    /// Fleet counts.
    pub fleet_overview: Option<FleetOverview>,
    /// Today's trips and money.
    pub today_summary: Option<TodaySummary>,
    /// Active alerts.
    pub alerts: Vec<DashboardAlert>,
    /// Shortcut counts and permissions.
    pub quick_actions: Option<QuickActions>,
    /// Vehicle movement counts.
    pub live_status: Option<LiveStatus>,
    /// Team counts, owners only.
    pub team_stats: Option<TeamStats>,
    /// Document counts.
    pub document_stats: Option<DocumentStats>,
    /// Alert count, may exceed `alerts.len()`.
    pub total_alerts: u32,
}

/// Viewer identity block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardUserInfo {
    /// Display name.
    pub name: String,
    /// Raw role.
    pub role: String,
    /// Email.
    pub email: String,
}

/// Vehicle and driver counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FleetOverview {
    /// All vehicles.
    pub total_vehicles: u32,
    /// Vehicles in service.
    pub active_vehicles: u32,
    /// Vehicles on a trip.
    pub on_trip: u32,
    /// Vehicles in maintenance.
    pub maintenance: u32,
    /// All drivers.
    pub total_drivers: u32,
    /// Drivers free for assignment.
    pub available_drivers: u32,
    /// Drivers on duty.
    pub on_duty: u32,
    /// Drivers on leave.
    pub on_leave: u32,
}

/// Today's activity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TodaySummary {
    /// Trips scheduled today.
    pub trips_planned: u32,
    /// Trips on the road.
    pub trips_in_progress: u32,
    /// Trips delivered today.
    pub trips_completed: u32,
    /// Revenue in rupees.
    pub total_revenue: f64,
    /// Expenses in rupees.
    pub total_expenses: f64,
    /// Revenue minus expenses.
    pub profit_loss: f64,
}

/// One alert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardAlert {
    /// Alert identifier.
    pub id: i64,
    /// Alert kind.
    #[serde(rename = "type")]
    pub kind: String,
    /// `critical`, `warning` or `info`.
    pub priority: String,
    /// Headline.
    pub title: String,
    /// Detail.
    pub message: String,
    /// Kind of entity concerned.
    pub entity_type: Option<String>,
    /// Identifier of the entity concerned.
    pub entity_id: Option<i64>,
    /// Raised at.
    pub created_at: Option<String>,
}

/// Shortcut counts and permissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuickActions {
    /// Vehicle count.
    pub vehicles_count: u32,
    /// Driver count.
    pub drivers_count: u32,
    /// Trip count.
    pub trips_count: u32,
    /// Unpaid trips.
    pub pending_payments_count: u32,
    /// May add vehicles.
    pub can_add_vehicle: bool,
    /// May add drivers.
    pub can_add_driver: bool,
    /// May add trips.
    pub can_add_trip: bool,
    /// May manage the team.
    pub can_manage_team: bool,
}

impl Default for QuickActions {
    fn default() -> Self {
        Self {
            vehicles_count: 0,
            drivers_count: 0,
            trips_count: 0,
            pending_payments_count: 0,
            can_add_vehicle: true,
            can_add_driver: true,
            can_add_trip: true,
            can_manage_team: false,
        }
    }
}

/// Vehicle movement counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiveStatus {
    /// Moving now.
    pub vehicles_moving: u32,
    /// Engine on, not moving.
    pub vehicles_idle: u32,
    /// Stopped.
    pub vehicles_stopped: u32,
    /// Snapshot time.
    pub last_updated: Option<String>,
}

/// Team counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamStats {
    /// Managers.
    pub total_managers: u32,
    /// Supervisors.
    pub total_supervisors: u32,
    /// Members active recently.
    pub active_members: u32,
}

/// Document counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentStats {
    /// Expiring soon.
    pub expiring_soon: u32,
    /// Already expired.
    pub expired: u32,
    /// Awaiting review.
    pub pending_verification: u32,
}

/// `GET /dashboard/cost-overview` and trip profit/loss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostOverview {
    /// Expenses in rupees.
    pub total_expenses: f64,
    /// Revenue minus expenses.
    pub total_profit_loss: f64,
    /// Trips included.
    pub completed_trips: u32,
    /// Revenue in rupees.
    pub total_revenue: f64,
    /// Fuel share.
    pub fuel_cost: f64,
    /// Toll share.
    pub toll_cost: f64,
    /// Maintenance share.
    pub maintenance_cost: f64,
    /// Everything else.
    pub other_costs: f64,
    /// Margin in percent.
    pub profit_margin: f64,
    /// Filter echoed back, for example `today`.
    pub filter: String,
}

impl Default for CostOverview {
    fn default() -> Self {
        Self {
            total_expenses: 0.0,
            total_profit_loss: 0.0,
            completed_trips: 0,
            total_revenue: 0.0,
            fuel_cost: 0.0,
            toll_cost: 0.0,
            maintenance_cost: 0.0,
            other_costs: 0.0,
            profit_margin: 0.0,
            filter: "today".to_owned(),
        }
    }
}

/// Trip with money still owed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PendingPayment {
    /// Trip concerned.
    pub trip_id: i64,
    /// Vehicle registration.
    pub vehicle_registration: String,
    /// Customer name.
    pub customer_name: Option<String>,
    /// Amount billed.
    pub selling_value: f64,
    /// Amount received.
    pub partial_payment: f64,
    /// Amount owed.
    pub pending_amount: f64,
    /// Days past due.
    pub days_overdue: u32,
    /// Payment status.
    pub payment_status: String,
}

/// `GET /dashboard/vehicle-status`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleStatusSummary {
    /// On a planned trip.
    pub on_trip_planned: u32,
    /// On a running trip.
    pub on_trip_in_progress: u32,
    /// In maintenance.
    pub under_maintenance: u32,
    /// Active.
    pub active: u32,
    /// Inactive.
    pub inactive: u32,
    /// All vehicles.
    pub total: u32,
}

/// `GET /dashboard/trips-status`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TripsStatusSummary {
    /// Running.
    pub in_progress: u32,
    /// Scheduled.
    pub planned: u32,
    /// Behind schedule.
    pub delayed: u32,
    /// Delivered today.
    pub completed_today: u32,
    /// Delivered ever.
    pub completed_total: u32,
    /// Cancelled.
    pub cancelled: u32,
    /// All trips.
    pub total: u32,
    /// Latest trips.
    pub recent_trips: Vec<TripListItem>,
}

/// `GET /dashboard/drivers-status`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriversStatusSummary {
    /// On a planned trip.
    pub on_trip_planned: u32,
    /// On a running trip.
    pub on_trip_in_progress: u32,
    /// Free.
    pub available: u32,
    /// On leave.
    pub on_leave: u32,
    /// Inactive.
    pub inactive: u32,
    /// All drivers.
    pub total: u32,
}

/// `GET /dashboard/alerts-status`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertsStatusSummary {
    /// All alerts.
    pub total_alerts: u32,
    /// Critical.
    pub critical_alerts: u32,
    /// Warnings.
    pub warning_alerts: u32,
    /// Informational.
    pub info_alerts: u32,
    /// Documents expiring.
    pub document_expiring: u32,
    /// Licences expiring.
    pub license_expiring: u32,
    /// Unpaid trips.
    pub pending_payments: u32,
    /// Vehicles in maintenance.
    pub maintenance_vehicles: u32,
    /// Alert list.
    pub alerts: Vec<DashboardAlert>,
}
