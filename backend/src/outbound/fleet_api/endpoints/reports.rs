//! Report calls.

use pagination::Envelope;

use crate::models::{ProfitLossReport, ReportPeriod, ReportType};
use crate::outbound::fleet_api::query::ReportRange;
use crate::outbound::fleet_api::{CallOutcome, FleetClient};

impl FleetClient {
    /// `GET /reports/types`.
    pub async fn report_types(&self) -> CallOutcome<Envelope<Vec<ReportType>>> {
        self.get("/reports/types", &[]).await
    }

    /// `GET /reports/periods`.
    pub async fn report_periods(&self) -> CallOutcome<Envelope<Vec<ReportPeriod>>> {
        self.get("/reports/periods", &[]).await
    }

    /// `GET /reports/profit-loss` for the whole fleet.
    pub async fn fleet_profit_loss(&self, range: &ReportRange) -> CallOutcome<Envelope<ProfitLossReport>> {
        self.get("/reports/profit-loss", &range.pairs()).await
    }
}
