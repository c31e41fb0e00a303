//! Driver calls.

use pagination::{Envelope, PageRequest, PaginatedEnvelope};
use reqwest::Method;

use super::Ack;
use crate::models::{Driver, DriverRequest, DriverStatus, DriverStatusRequest};
use crate::outbound::fleet_api::query::paged;
use crate::outbound::fleet_api::{CallOutcome, FleetClient};

impl FleetClient {
    /// `GET /drivers`, optionally filtered by status.
    pub async fn list_drivers(
        &self,
        page: PageRequest,
        status: Option<DriverStatus>,
    ) -> CallOutcome<PaginatedEnvelope<Driver>> {
        let extra = status
            .map(|status| vec![("status", status.as_str().to_owned())])
            .unwrap_or_default();
        self.get("/drivers", &paged(page, extra)).await
    }

    /// `GET /drivers/available`.
    pub async fn available_drivers(&self) -> CallOutcome<Envelope<Vec<Driver>>> {
        self.get("/drivers/available", &[]).await
    }

    /// `GET /drivers/{id}`.
    pub async fn driver(&self, id: i64) -> CallOutcome<Envelope<Driver>> {
        self.get(&format!("/drivers/{id}"), &[]).await
    }

    /// `POST /drivers`.
    pub async fn create_driver(&self, request: &DriverRequest) -> CallOutcome<Envelope<Driver>> {
        self.send_json(Method::POST, "/drivers", request).await
    }

    /// `PUT /drivers/{id}`.
    pub async fn update_driver(
        &self,
        id: i64,
        request: &DriverRequest,
    ) -> CallOutcome<Envelope<Driver>> {
        self.send_json(Method::PUT, &format!("/drivers/{id}"), request)
            .await
    }

    /// `PATCH /drivers/{id}/status`.
    pub async fn update_driver_status(
        &self,
        id: i64,
        status: DriverStatus,
    ) -> CallOutcome<Envelope<Driver>> {
        let request = DriverStatusRequest::from(status);
        self.send_json(Method::PATCH, &format!("/drivers/{id}/status"), &request)
            .await
    }

    /// `PATCH /drivers/{id}/toggle-active`, no body.
    pub async fn toggle_driver_active(&self, id: i64) -> CallOutcome<Envelope<Driver>> {
        self.send_empty(Method::PATCH, &format!("/drivers/{id}/toggle-active"))
            .await
    }

    /// `DELETE /drivers/{id}`.
    pub async fn delete_driver(&self, id: i64) -> CallOutcome<Ack> {
        self.send_empty(Method::DELETE, &format!("/drivers/{id}"))
            .await
    }
}
