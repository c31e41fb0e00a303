//! Dashboard calls.

use pagination::{Envelope, PageRequest, PaginatedEnvelope};

use crate::domain::role::UserRole;
use crate::models::{
    AlertsStatusSummary, CostOverview, Dashboard, DriversStatusSummary, PendingPayment,
    TripsStatusSummary, VehicleStatusSummary,
};
use crate::outbound::fleet_api::query::paged;
use crate::outbound::fleet_api::{CallOutcome, FleetClient};

impl FleetClient {
    /// `GET /dashboard`.
    pub async fn dashboard(&self) -> CallOutcome<Envelope<Dashboard>> {
        self.get("/dashboard", &[]).await
    }

    /// Role dashboard: `GET /dashboard/{owner,manager,supervisor}`.
    pub async fn role_dashboard(&self, role: UserRole) -> CallOutcome<Envelope<Dashboard>> {
        self.get(&format!("/dashboard/{role}"), &[]).await
    }

    /// `GET /dashboard/cost-overview?filter=..`, e.g. `today`.
    pub async fn cost_overview(&self, filter: &str) -> CallOutcome<Envelope<CostOverview>> {
        self.get("/dashboard/cost-overview", &[("filter", filter.to_owned())])
            .await
    }

    /// `GET /dashboard/pending-payments`.
    pub async fn pending_payments(
        &self,
        page: PageRequest,
    ) -> CallOutcome<PaginatedEnvelope<PendingPayment>> {
        self.get("/dashboard/pending-payments", &paged(page, Vec::new()))
            .await
    }

    /// `GET /dashboard/vehicle-status`.
    pub async fn vehicle_status(&self) -> CallOutcome<Envelope<VehicleStatusSummary>> {
        self.get("/dashboard/vehicle-status", &[]).await
    }

    /// `GET /dashboard/trips-status`.
    pub async fn trips_status(&self) -> CallOutcome<Envelope<TripsStatusSummary>> {
        self.get("/dashboard/trips-status", &[]).await
    }

    /// `GET /dashboard/drivers-status`.
    pub async fn drivers_status(&self) -> CallOutcome<Envelope<DriversStatusSummary>> {
        self.get("/dashboard/drivers-status", &[]).await
    }

    /// `GET /dashboard/alerts-status`.
    pub async fn alerts_status(&self) -> CallOutcome<Envelope<AlertsStatusSummary>> {
        self.get("/dashboard/alerts-status", &[]).await
    }
}
