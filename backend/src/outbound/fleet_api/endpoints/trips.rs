//! Trip calls, including stops and per-trip costs.

use pagination::{Envelope, PageRequest, PaginatedEnvelope};
use reqwest::Method;

use super::Ack;
use crate::models::{
    CostOverview, CreateTripCostRequest, CreateTripRequest, CreateTripStopRequest, Trip, TripCost,
    TripListItem, TripLocationRequest, TripProgressRequest, TripState, TripStateRequest, TripStop,
};
use crate::outbound::fleet_api::query::paged;
use crate::outbound::fleet_api::{CallOutcome, FleetClient};

impl FleetClient {
    /// `GET /trips`, optionally filtered by state.
    pub async fn list_trips(
        &self,
        page: PageRequest,
        state: Option<TripState>,
    ) -> CallOutcome<PaginatedEnvelope<TripListItem>> {
        let extra = state
            .map(|state| vec![("state", state.as_str().to_owned())])
            .unwrap_or_default();
        self.get("/trips", &paged(page, extra)).await
    }

    /// `GET /trips/{id}`.
    pub async fn trip(&self, id: i64) -> CallOutcome<Envelope<Trip>> {
        self.get(&format!("/trips/{id}"), &[]).await
    }

    /// `POST /trips`.
    pub async fn create_trip(&self, request: &CreateTripRequest) -> CallOutcome<Envelope<Trip>> {
        self.send_json(Method::POST, "/trips", request).await
    }

    /// `PUT /trips/{id}`.
    pub async fn update_trip(
        &self,
        id: i64,
        request: &CreateTripRequest,
    ) -> CallOutcome<Envelope<Trip>> {
        self.send_json(Method::PUT, &format!("/trips/{id}"), request)
            .await
    }

    /// `PATCH /trips/{id}/state`.
    pub async fn update_trip_state(&self, id: i64, state: TripState) -> CallOutcome<Envelope<Trip>> {
        let request = TripStateRequest::from(state);
        self.send_json(Method::PATCH, &format!("/trips/{id}/state"), &request)
            .await
    }

    /// `PATCH /trips/{id}/location`.
    pub async fn update_trip_location(
        &self,
        id: i64,
        lat: f64,
        lng: f64,
    ) -> CallOutcome<Envelope<Trip>> {
        let request = TripLocationRequest {
            current_lat: lat,
            current_lng: lng,
        };
        self.send_json(Method::PATCH, &format!("/trips/{id}/location"), &request)
            .await
    }

    /// `PATCH /trips/{id}/progress`.
    pub async fn update_trip_progress(
        &self,
        id: i64,
        request: &TripProgressRequest,
    ) -> CallOutcome<Envelope<Trip>> {
        self.send_json(Method::PATCH, &format!("/trips/{id}/progress"), request)
            .await
    }

    /// `DELETE /trips/{id}`.
    pub async fn delete_trip(&self, id: i64) -> CallOutcome<Ack> {
        self.send_empty(Method::DELETE, &format!("/trips/{id}")).await
    }

    /// `GET /trips/{id}/stops`.
    pub async fn trip_stops(&self, id: i64) -> CallOutcome<Envelope<Vec<TripStop>>> {
        self.get(&format!("/trips/{id}/stops"), &[]).await
    }

    /// `POST /trips/{id}/stops`.
    pub async fn add_trip_stop(
        &self,
        id: i64,
        request: &CreateTripStopRequest,
    ) -> CallOutcome<Envelope<TripStop>> {
        self.send_json(Method::POST, &format!("/trips/{id}/stops"), request)
            .await
    }

    /// `GET /trips/{id}/costs`.
    pub async fn trip_costs(&self, id: i64) -> CallOutcome<Envelope<Vec<TripCost>>> {
        self.get(&format!("/trips/{id}/costs"), &[]).await
    }

    /// `POST /trips/{id}/costs`.
    pub async fn add_trip_cost(
        &self,
        id: i64,
        request: &CreateTripCostRequest,
    ) -> CallOutcome<Envelope<TripCost>> {
        self.send_json(Method::POST, &format!("/trips/{id}/costs"), request)
            .await
    }

    /// `GET /trips/{id}/profit-loss`.
    pub async fn trip_profit_loss(&self, id: i64) -> CallOutcome<Envelope<CostOverview>> {
        self.get(&format!("/trips/{id}/profit-loss"), &[]).await
    }
}
