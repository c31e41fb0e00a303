//! Trip and maintenance cost payloads.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Entry of `GET /trip-costs/types`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostType {
    /// Type code.
    #[serde(rename = "type")]
    pub kind: String,
    /// Display label.
    pub label: String,
    /// Grouping such as `fuel` or `toll`.
    pub category: String,
}

/// Expense recorded against a trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TripCost {
    /// Cost identifier.
    pub id: i64,
    /// Trip charged.
    pub trip_id: i64,
    /// Vehicle charged.
    pub vehicle_id: i64,
    /// Type code.
    pub cost_type: String,
    /// Type label.
    pub cost_type_label: Option<String>,
    /// Amount in rupees.
    pub amount: f64,
    /// Date, `DD-MM-YYYY`.
    pub date: Option<String>,
    /// Time, `HH:MM`.
    pub time: Option<String>,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Name for `other` costs.
    pub custom_cost_type_name: Option<String>,
    /// Fuel type, fuel costs only.
    pub fuel_type: Option<String>,
    /// Quantity filled.
    pub fuel_quantity: Option<f64>,
    /// Price per unit.
    pub fuel_rate: Option<f64>,
    /// Efficiency at fill time.
    pub km_per_liter: Option<f64>,
    /// Creation timestamp.
    pub created_at: Option<String>,
    /// Last update timestamp.
    pub updated_at: Option<String>,
}

/// Body of `POST /trip-costs` and `POST /trips/{id}/costs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTripCostRequest {
    /// Trip charged.
    pub trip_id: i64,
    /// Vehicle charged.
    pub vehicle_id: i64,
    /// Type code.
    pub cost_type: String,
    /// Amount in rupees.
    pub amount: f64,
    /// Date, `DD-MM-YYYY`.
    pub date: String,
    /// Time, `HH:MM`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Free-form notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Name for `other` costs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_cost_type_name: Option<String>,
    /// Fuel type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel_type: Option<String>,
    /// Quantity filled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel_quantity: Option<f64>,
    /// Price per unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel_rate: Option<f64>,
    /// Efficiency at fill time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub km_per_liter: Option<f64>,
}

/// One entry of a bulk trip cost submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkTripCostItem {
    /// Type code.
    pub cost_type: String,
    /// Amount in rupees.
    pub amount: f64,
    /// Date, `DD-MM-YYYY`.
    pub date: String,
    /// Time, `HH:MM`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Free-form notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Name for `other` costs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_cost_type_name: Option<String>,
    /// Fuel type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel_type: Option<String>,
    /// Quantity filled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel_quantity: Option<f64>,
    /// Price per unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel_rate: Option<f64>,
    /// Efficiency at fill time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub km_per_liter: Option<f64>,
}

/// Several costs for one trip in a single request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BulkTripCostRequest {
    /// Costs to record.
    pub costs: Vec<BulkTripCostItem>,
}

/// Cost totals for one trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TripCostSummary {
    /// Sum of all costs.
    pub total_cost: f64,
    /// Fuel share.
    pub fuel_cost: f64,
    /// Toll share.
    pub toll_cost: f64,
    /// Everything else.
    pub other_costs: f64,
    /// Number of entries.
    pub cost_count: u32,
    /// Most recent change.
    pub last_updated: Option<String>,
    /// Totals per type code.
    pub breakdown: BTreeMap<String, f64>,
}

/// Entry of `GET /maintenance-costs/types`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceCostType {
    /// Type code.
    #[serde(rename = "type")]
    pub kind: String,
    /// Display label.
    pub label: String,
}

/// Workshop or upkeep expense for a vehicle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaintenanceCost {
    /// Cost identifier.
    pub id: i64,
    /// Vehicle serviced.
    pub vehicle_id: i64,
    /// Type code.
    pub cost_type: String,
    /// Type label.
    pub cost_type_label: Option<String>,
    /// Amount in rupees.
    pub amount: f64,
    /// Date, `DD-MM-YYYY`.
    pub date: Option<String>,
    /// Time, `HH:MM`.
    pub time: Option<String>,
    /// Work performed.
    pub description: Option<String>,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Workshop name.
    pub vendor_name: Option<String>,
    /// Invoice number.
    pub invoice_no: Option<String>,
    /// Creation timestamp.
    pub created_at: Option<String>,
    /// Last update timestamp.
    pub updated_at: Option<String>,
}

/// Body of `POST /maintenance-costs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateMaintenanceCostRequest {
    /// Vehicle serviced.
    pub vehicle_id: i64,
    /// Type code.
    pub cost_type: String,
    /// Amount in rupees.
    pub amount: f64,
    /// Date, `DD-MM-YYYY`.
    pub date: String,
    /// Time, `HH:MM`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Work performed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Free-form notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Workshop name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_name: Option<String>,
    /// Invoice number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_no: Option<String>,
}

/// Maintenance totals for one vehicle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaintenanceCostSummary {
    /// Sum of all costs.
    pub total_cost: f64,
    /// Totals per type code.
    pub cost_by_type: BTreeMap<String, f64>,
    /// Date of the latest entry.
    pub last_maintenance: Option<String>,
    /// Number of entries.
    pub maintenance_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn trip_cost_request_omits_absent_fuel_fields() {
        let body = serde_json::to_value(CreateTripCostRequest {
            trip_id: 9,
            vehicle_id: 2,
            cost_type: "toll".to_owned(),
            amount: 450.0,
            date: "05-03-2025".to_owned(),
            time: Some("14:30".to_owned()),
            notes: None,
            custom_cost_type_name: None,
            fuel_type: None,
            fuel_quantity: None,
            fuel_rate: None,
            km_per_liter: None,
        })
        .expect("encode");
        assert_eq!(
            body,
            json!({
                "trip_id": 9,
                "vehicle_id": 2,
                "cost_type": "toll",
                "amount": 450.0,
                "date": "05-03-2025",
                "time": "14:30"
            })
        );
    }

    #[test]
    fn summary_breakdown_decodes_as_map() {
        let summary: TripCostSummary = serde_json::from_value(json!({
            "total_cost": 1200.0,
            "breakdown": { "fuel": 900.0, "toll": 300.0 }
        }))
        .expect("decode");
        assert_eq!(summary.breakdown.get("toll"), Some(&300.0));
        assert_eq!(summary.cost_count, 0);
    }
}
