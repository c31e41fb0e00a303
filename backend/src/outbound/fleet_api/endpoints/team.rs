//! Team member calls. The upstream only honours these for owners.

use pagination::{Envelope, PageRequest, PaginatedEnvelope};
use reqwest::Method;

use super::Ack;
use crate::models::{CreateTeamMemberRequest, TeamMember, UpdateTeamMemberRequest};
use crate::outbound::fleet_api::query::paged;
use crate::outbound::fleet_api::{CallOutcome, FleetClient};

impl FleetClient {
    /// `GET /team/members`.
    pub async fn list_team_members(
        &self,
        page: PageRequest,
    ) -> CallOutcome<PaginatedEnvelope<TeamMember>> {
        self.get("/team/members", &paged(page, Vec::new())).await
    }

    /// `GET /team/members/{id}`.
    pub async fn team_member(&self, id: i64) -> CallOutcome<Envelope<TeamMember>> {
        self.get(&format!("/team/members/{id}"), &[]).await
    }

    /// `POST /team/members`.
    pub async fn create_team_member(
        &self,
        request: &CreateTeamMemberRequest,
    ) -> CallOutcome<Envelope<TeamMember>> {
        self.send_json(Method::POST, "/team/members", request).await
    }

    /// `PUT /team/members/{id}`.
    pub async fn update_team_member(
        &self,
        id: i64,
        request: &UpdateTeamMemberRequest,
    ) -> CallOutcome<Envelope<TeamMember>> {
        self.send_json(Method::PUT, &format!("/team/members/{id}"), request)
            .await
    }

    /// `DELETE /team/members/{id}`.
    pub async fn delete_team_member(&self, id: i64) -> CallOutcome<Ack> {
        self.send_empty(Method::DELETE, &format!("/team/members/{id}"))
            .await
    }
}
