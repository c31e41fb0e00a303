//! Vehicle calls.

use pagination::{Envelope, PageRequest, PaginatedEnvelope};
use reqwest::Method;

use super::Ack;
use crate::models::{
    MaintenanceCost, TripCost, TripListItem, Vehicle, VehicleDetail, VehicleDocument,
    VehicleOverview, VehicleRequest, VehicleState, VehicleStateRequest,
};
use crate::outbound::fleet_api::query::{VehicleCostQuery, paged};
use crate::outbound::fleet_api::{CallOutcome, FleetClient};

impl FleetClient {
    /// `GET /vehicles`, optionally filtered by state.
    pub async fn list_vehicles(
        &self,
        page: PageRequest,
        state: Option<VehicleState>,
    ) -> CallOutcome<PaginatedEnvelope<Vehicle>> {
        let extra = state
            .map(|state| vec![("state", state.as_str().to_owned())])
            .unwrap_or_default();
        self.get("/vehicles", &paged(page, extra)).await
    }

    /// `GET /vehicles/{id}`.
    pub async fn vehicle(&self, id: i64) -> CallOutcome<Envelope<Vehicle>> {
        self.get(&format!("/vehicles/{id}"), &[]).await
    }

    /// `GET /vehicles/{id}/detail`.
    pub async fn vehicle_detail(&self, id: i64) -> CallOutcome<Envelope<VehicleDetail>> {
        self.get(&format!("/vehicles/{id}/detail"), &[]).await
    }

    /// `GET /vehicles/{id}/overview`.
    pub async fn vehicle_overview(&self, id: i64) -> CallOutcome<Envelope<VehicleOverview>> {
        self.get(&format!("/vehicles/{id}/overview"), &[]).await
    }

    /// `POST /vehicles`.
    pub async fn create_vehicle(&self, request: &VehicleRequest) -> CallOutcome<Envelope<Vehicle>> {
        self.send_json(Method::POST, "/vehicles", request).await
    }

    /// `PUT /vehicles/{id}`.
    pub async fn update_vehicle(
        &self,
        id: i64,
        request: &VehicleRequest,
    ) -> CallOutcome<Envelope<Vehicle>> {
        self.send_json(Method::PUT, &format!("/vehicles/{id}"), request)
            .await
    }

    /// `PATCH /vehicles/{id}/state`.
    pub async fn update_vehicle_state(
        &self,
        id: i64,
        state: VehicleState,
    ) -> CallOutcome<Envelope<Vehicle>> {
        let request = VehicleStateRequest::from(state);
        self.send_json(Method::PATCH, &format!("/vehicles/{id}/state"), &request)
            .await
    }

    /// `DELETE /vehicles/{id}`.
    pub async fn delete_vehicle(&self, id: i64) -> CallOutcome<Ack> {
        self.send_empty(Method::DELETE, &format!("/vehicles/{id}"))
            .await
    }

    /// `GET /vehicles/{id}/trips`.
    pub async fn vehicle_trips(
        &self,
        id: i64,
        page: PageRequest,
    ) -> CallOutcome<PaginatedEnvelope<TripListItem>> {
        self.get(&format!("/vehicles/{id}/trips"), &paged(page, Vec::new()))
            .await
    }

    /// `GET /vehicles/{id}/documents`.
    pub async fn vehicle_documents(&self, id: i64) -> CallOutcome<Envelope<Vec<VehicleDocument>>> {
        self.get(&format!("/vehicles/{id}/documents"), &[]).await
    }

    /// `GET /vehicles/{id}/trip-costs`.
    pub async fn vehicle_trip_costs(
        &self,
        id: i64,
        page: PageRequest,
        query: &VehicleCostQuery,
    ) -> CallOutcome<PaginatedEnvelope<TripCost>> {
        self.get(
            &format!("/vehicles/{id}/trip-costs"),
            &paged(page, query.pairs()),
        )
        .await
    }

    /// `GET /vehicles/{id}/maintenance-costs`.
    pub async fn vehicle_maintenance_costs(
        &self,
        id: i64,
        page: PageRequest,
        query: &VehicleCostQuery,
    ) -> CallOutcome<PaginatedEnvelope<MaintenanceCost>> {
        self.get(
            &format!("/vehicles/{id}/maintenance-costs"),
            &paged(page, query.pairs()),
        )
        .await
    }
}
