//! Report payloads.

use serde::{Deserialize, Serialize};

/// Entry of `GET /reports/types`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportType {
    /// Type code.
    #[serde(rename = "type")]
    pub kind: String,
    /// Display label.
    pub label: String,
    /// Longer description.
    #[serde(default)]
    pub description: Option<String>,
}

/// Entry of `GET /reports/periods`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPeriod {
    /// Period code, for example `this_month`.
    pub period: String,
    /// Display label.
    pub label: String,
}

/// Fleet or vehicle profit and loss over a period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfitLossReport {
    /// Period code.
    pub period: Option<String>,
    /// Range start, `DD-MM-YYYY`.
    pub start_date: Option<String>,
    /// Range end, `DD-MM-YYYY`.
    pub end_date: Option<String>,
    /// Revenue in rupees.
    pub total_revenue: f64,
    /// Expenses in rupees.
    pub total_expenses: f64,
    /// Revenue minus expenses.
    pub profit_loss: f64,
    /// Margin in percent.
    pub profit_margin: f64,
    /// Trips included.
    pub trip_count: u32,
    /// Expenses by category.
    pub expense_breakdown: Option<ExpenseBreakdown>,
    /// Per-vehicle figures.
    pub vehicle_breakdown: Vec<VehicleProfitLoss>,
}

/// Expenses by category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpenseBreakdown {
    /// Fuel.
    pub fuel_cost: f64,
    /// Tolls.
    pub toll_cost: f64,
    /// Maintenance.
    pub maintenance_cost: f64,
    /// Driver allowances.
    pub driver_allowance: f64,
    /// Everything else.
    pub other_costs: f64,
}

/// Profit and loss of one vehicle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleProfitLoss {
    /// Vehicle concerned.
    pub vehicle_id: i64,
    /// Registration plate.
    pub registration_number: String,
    /// Revenue in rupees.
    pub revenue: f64,
    /// Expenses in rupees.
    pub expenses: f64,
    /// Revenue minus expenses.
    pub profit_loss: f64,
    /// Trips included.
    pub trip_count: u32,
}
