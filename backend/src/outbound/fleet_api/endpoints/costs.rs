//! Trip cost and maintenance cost calls.

use pagination::{Envelope, PageRequest, PaginatedEnvelope};
use reqwest::Method;

use super::Ack;
use crate::models::{
    CostType, CreateMaintenanceCostRequest, CreateTripCostRequest, MaintenanceCost,
    MaintenanceCostType, TripCost,
};
use crate::outbound::fleet_api::query::{MaintenanceCostFilter, TripCostFilter, paged};
use crate::outbound::fleet_api::{CallOutcome, FleetClient};

impl FleetClient {
    /// `GET /trip-costs/types`.
    pub async fn trip_cost_types(&self) -> CallOutcome<Envelope<Vec<CostType>>> {
        self.get("/trip-costs/types", &[]).await
    }

    /// `GET /trip-costs`.
    pub async fn list_trip_costs(
        &self,
        page: PageRequest,
        filter: &TripCostFilter,
    ) -> CallOutcome<PaginatedEnvelope<TripCost>> {
        self.get("/trip-costs", &paged(page, filter.pairs())).await
    }

    /// `GET /trip-costs/{id}`.
    pub async fn trip_cost(&self, id: i64) -> CallOutcome<Envelope<TripCost>> {
        self.get(&format!("/trip-costs/{id}"), &[]).await
    }

    /// `POST /trip-costs`.
    pub async fn create_trip_cost(
        &self,
        request: &CreateTripCostRequest,
    ) -> CallOutcome<Envelope<TripCost>> {
        self.send_json(Method::POST, "/trip-costs", request).await
    }

    /// `PUT /trip-costs/{id}`.
    pub async fn update_trip_cost(
        &self,
        id: i64,
        request: &CreateTripCostRequest,
    ) -> CallOutcome<Envelope<TripCost>> {
        self.send_json(Method::PUT, &format!("/trip-costs/{id}"), request)
            .await
    }

    /// `DELETE /trip-costs/{id}`.
    pub async fn delete_trip_cost(&self, id: i64) -> CallOutcome<Ack> {
        self.send_empty(Method::DELETE, &format!("/trip-costs/{id}"))
            .await
    }

    /// `GET /maintenance-costs/types`.
    pub async fn maintenance_cost_types(&self) -> CallOutcome<Envelope<Vec<MaintenanceCostType>>> {
        self.get("/maintenance-costs/types", &[]).await
    }

    /// `GET /maintenance-costs`.
    pub async fn list_maintenance_costs(
        &self,
        page: PageRequest,
        filter: &MaintenanceCostFilter,
    ) -> CallOutcome<PaginatedEnvelope<MaintenanceCost>> {
        self.get("/maintenance-costs", &paged(page, filter.pairs()))
            .await
    }

    /// `GET /maintenance-costs/{id}`.
    pub async fn maintenance_cost(&self, id: i64) -> CallOutcome<Envelope<MaintenanceCost>> {
        self.get(&format!("/maintenance-costs/{id}"), &[]).await
    }

    /// `POST /maintenance-costs`.
    pub async fn create_maintenance_cost(
        &self,
        request: &CreateMaintenanceCostRequest,
    ) -> CallOutcome<Envelope<MaintenanceCost>> {
        self.send_json(Method::POST, "/maintenance-costs", request)
            .await
    }

    /// `PUT /maintenance-costs/{id}`.
    pub async fn update_maintenance_cost(
        &self,
        id: i64,
        request: &CreateMaintenanceCostRequest,
    ) -> CallOutcome<Envelope<MaintenanceCost>> {
        self.send_json(Method::PUT, &format!("/maintenance-costs/{id}"), request)
            .await
    }

    /// `DELETE /maintenance-costs/{id}`.
    pub async fn delete_maintenance_cost(&self, id: i64) -> CallOutcome<Ack> {
        self.send_empty(Method::DELETE, &format!("/maintenance-costs/{id}"))
            .await
    }
}
