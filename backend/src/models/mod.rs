//! Wire entities exchanged with the fleet API.
//!
//! Field names are snake_case on the wire. Response entities default every
//! missing field so partial payloads still decode; request bodies only mark
//! optional fields as such.

/// Declare a status enum decoded leniently from its wire string.
///
/// Matching is case-insensitive; anything unrecognised maps to the first
/// listed variant.
macro_rules! wire_status {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Decode a wire value, falling back to the default variant.
            #[must_use]
            pub fn from_wire(raw: &str) -> Self {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|status| status.as_str().eq_ignore_ascii_case(raw.trim()))
                    .unwrap_or(Self::ALL[0])
            }

            /// Wire spelling of this status.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub mod auth;
pub mod cost;
pub mod dashboard;
pub mod document;
pub mod driver;
pub mod report;
pub mod team;
pub mod trip;
pub mod vehicle;

pub use auth::{
    ChangePasswordRequest, ForgotPasswordRequest, LoginRequest, LoginResponseData,
    ResetPasswordRequest, SignupRequest, UpdateProfileRequest, User,
};
pub use cost::{
    BulkTripCostItem, BulkTripCostRequest, CostType, CreateMaintenanceCostRequest,
    CreateTripCostRequest, MaintenanceCost, MaintenanceCostSummary, MaintenanceCostType, TripCost,
    TripCostSummary,
};
pub use dashboard::{
    AlertsStatusSummary, CostOverview, Dashboard, DashboardAlert, DriversStatusSummary,
    PendingPayment, TripsStatusSummary, VehicleStatusSummary,
};
pub use document::{
    DocumentStatus, DocumentType, UpdateDocumentRequest, VehicleDocument, VerifyDocumentRequest,
};
pub use driver::{Driver, DriverRequest, DriverStatus, DriverStatusRequest};
pub use report::{ExpenseBreakdown, ProfitLossReport, ReportPeriod, ReportType, VehicleProfitLoss};
pub use team::{CreateTeamMemberRequest, TeamMember, UpdateTeamMemberRequest};
pub use trip::{
    CreateTripRequest, CreateTripStopRequest, Trip, TripListItem, TripLocationRequest,
    TripPriority, TripProgressRequest, TripState, TripStateRequest, TripStop,
};
pub use vehicle::{
    DocumentsSummary, Vehicle, VehicleDetail, VehicleLocation, VehicleOverview, VehicleRequest,
    VehicleState, VehicleStateRequest,
};
