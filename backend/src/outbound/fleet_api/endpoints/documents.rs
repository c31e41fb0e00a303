//! Vehicle document calls.

use pagination::Envelope;
use reqwest::Method;

use super::Ack;
use crate::models::{DocumentType, UpdateDocumentRequest, VehicleDocument};
use crate::outbound::fleet_api::{CallOutcome, FleetClient};

impl FleetClient {
    /// `GET /documents/types`.
    pub async fn document_types(&self) -> CallOutcome<Envelope<Vec<DocumentType>>> {
        self.get("/documents/types", &[]).await
    }

    /// `GET /documents/expiring?days=..`.
    pub async fn expiring_documents(&self, days: u32) -> CallOutcome<Envelope<Vec<VehicleDocument>>> {
        self.get("/documents/expiring", &[("days", days.to_string())])
            .await
    }

    /// `GET /documents/expired`.
    pub async fn expired_documents(&self) -> CallOutcome<Envelope<Vec<VehicleDocument>>> {
        self.get("/documents/expired", &[]).await
    }

    /// `GET /documents/{id}`.
    pub async fn document(&self, id: i64) -> CallOutcome<Envelope<VehicleDocument>> {
        self.get(&format!("/documents/{id}"), &[]).await
    }

    /// `PUT /documents/{id}`.
    pub async fn update_document(
        &self,
        id: i64,
        request: &UpdateDocumentRequest,
    ) -> CallOutcome<Envelope<VehicleDocument>> {
        self.send_json(Method::PUT, &format!("/documents/{id}"), request)
            .await
    }

    /// `DELETE /documents/{id}`.
    pub async fn delete_document(&self, id: i64) -> CallOutcome<Ack> {
        self.send_empty(Method::DELETE, &format!("/documents/{id}"))
            .await
    }
}
