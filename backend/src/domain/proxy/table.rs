//! Declarative routing table for the fleet API surface.

use super::route::{PathParams, ProxyRoute, RouteTemplateError};
use super::ProxyMethod::{self, Delete, Get, Patch, Post, Put};

const GET: &[ProxyMethod] = &[Get];
const POST: &[ProxyMethod] = &[Post];
const PATCH: &[ProxyMethod] = &[Patch];
const GET_POST: &[ProxyMethod] = &[Get, Post];
const GET_PUT: &[ProxyMethod] = &[Get, Put];
const GET_PUT_DELETE: &[ProxyMethod] = &[Get, Put, Delete];

/// Every route the proxy forwards, relative to the `/api` mount. The upstream
/// path mirrors the inbound one below the configured base URL.
const FLEET_ROUTES: &[(&str, &[ProxyMethod])] = &[
    // Authentication, reachable without a token.
    ("auth/login", POST),
    ("auth/signup", POST),
    ("auth/forgot-password", POST),
    ("auth/reset-password", POST),
    // Profile
    ("profile", GET_PUT),
    ("profile/change-password", POST),
    // Dashboard
    ("dashboard", GET),
    ("dashboard/owner", GET),
    ("dashboard/manager", GET),
    ("dashboard/supervisor", GET),
    ("dashboard/cost-overview", GET),
    ("dashboard/vehicle-status", GET),
    ("dashboard/trips-status", GET),
    ("dashboard/drivers-status", GET),
    ("dashboard/alerts-status", GET),
    ("dashboard/pending-payments", GET),
    // Vehicles
    ("vehicles", GET_POST),
    ("vehicles/{id}", GET_PUT_DELETE),
    ("vehicles/{id}/state", PATCH),
    ("vehicles/{id}/overview", GET),
    ("vehicles/{id}/detail", GET),
    ("vehicles/{id}/trips", GET),
    ("vehicles/{id}/documents", GET_POST),
    ("vehicles/{id}/trip-costs", GET),
    ("vehicles/{id}/maintenance-costs", GET),
    // Drivers
    ("drivers", GET_POST),
    ("drivers/available", GET),
    ("drivers/{id}", GET_PUT_DELETE),
    ("drivers/{id}/status", PATCH),
    ("drivers/{id}/toggle-active", PATCH),
    // Trips
    ("trips", GET_POST),
    ("trips/{id}", GET_PUT_DELETE),
    ("trips/{id}/state", PATCH),
    ("trips/{id}/location", PATCH),
    ("trips/{id}/progress", PATCH),
    ("trips/{id}/stops", GET_POST),
    ("trips/{id}/costs", GET_POST),
    ("trips/{id}/profit-loss", GET),
    // Trip costs
    ("trip-costs", GET_POST),
    ("trip-costs/types", GET),
    ("trip-costs/{id}", GET_PUT_DELETE),
    // Maintenance costs
    ("maintenance-costs", GET_POST),
    ("maintenance-costs/types", GET),
    ("maintenance-costs/{id}", GET_PUT_DELETE),
    // Team
    ("team/members", GET_POST),
    ("team/members/{id}", GET_PUT_DELETE),
    // Documents
    ("documents/types", GET),
    ("documents/expiring", GET),
    ("documents/expired", GET),
    ("documents/{id}", GET_PUT_DELETE),
    // Reports
    ("reports/types", GET),
    ("reports/periods", GET),
    ("reports/profit-loss", GET),
];

/// Ordered set of proxied routes.
///
/// # Examples
/// ```
/// use fleet_backend::domain::proxy::{ProxyMethod, RouteTable};
///
/// let table = RouteTable::fleet().expect("built-in routes are valid");
/// let (route, params) = table.resolve("/drivers/available").expect("known route");
/// assert!(route.allows(ProxyMethod::Get));
/// assert!(params.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<ProxyRoute>,
}

impl RouteTable {
    /// Build a table from explicit routes.
    #[must_use]
    pub const fn new(routes: Vec<ProxyRoute>) -> Self {
        Self { routes }
    }

    /// The complete fleet API surface.
    ///
    /// # Errors
    /// Returns [`RouteTemplateError`] if a built-in declaration is malformed.
    pub fn fleet() -> Result<Self, RouteTemplateError> {
        FLEET_ROUTES
            .iter()
            .map(|(template, methods)| ProxyRoute::mirrored(template, methods))
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }

    /// Find the route for `path` along with its captured parameters.
    ///
    /// When several routes match, the one with the most literal segments
    /// wins, so `drivers/available` beats `drivers/{id}`. Ties go to the
    /// earliest declaration.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<(&ProxyRoute, PathParams)> {
        let mut best: Option<(&ProxyRoute, PathParams)> = None;
        for route in &self.routes {
            let Some(params) = route.inbound().matches(path) else {
                continue;
            };
            let better = best.as_ref().is_none_or(|(current, _)| {
                route.inbound().literal_count() > current.inbound().literal_count()
            });
            if better {
                best = Some((route, params));
            }
        }
        best
    }

    /// Number of declared routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn table() -> RouteTable {
        RouteTable::fleet().expect("fleet routes parse")
    }

    #[rstest]
    fn every_declaration_is_loaded(table: RouteTable) {
        assert_eq!(table.len(), FLEET_ROUTES.len());
    }

    #[rstest]
    #[case::literal_before_param("/drivers/available", "drivers/available")]
    #[case::param_route("/drivers/17", "drivers/{id}")]
    #[case::trip_cost_types("/trip-costs/types", "trip-costs/types")]
    #[case::trip_cost_item("/trip-costs/4", "trip-costs/{id}")]
    #[case::document_expiring("/documents/expiring", "documents/expiring")]
    #[case::document_item("/documents/88", "documents/{id}")]
    #[case::nested("/vehicles/3/maintenance-costs", "vehicles/{id}/maintenance-costs")]
    fn resolves_most_specific_route(
        table: RouteTable,
        #[case] path: &str,
        #[case] expected: &str,
    ) {
        let (route, _) = table.resolve(path).expect("route exists");
        assert_eq!(route.inbound().to_string(), expected);
    }

    #[rstest]
    #[case("/unknown")]
    #[case("/vehicles/3/unknown")]
    #[case("/")]
    #[case("/vehicles/../documents")]
    #[case("/trips/%2e%2e/costs")]
    fn unknown_paths_do_not_resolve(table: RouteTable, #[case] path: &str) {
        assert!(table.resolve(path).is_none());
    }

    #[rstest]
    #[case::login("/auth/login", Post, true)]
    #[case::login_get("/auth/login", Get, false)]
    #[case::profile_put("/profile", Put, true)]
    #[case::vehicle_state("/vehicles/1/state", Patch, true)]
    #[case::vehicle_delete("/vehicles/1", Delete, true)]
    #[case::list_delete("/vehicles", Delete, false)]
    #[case::trip_location("/trips/9/location", Patch, true)]
    #[case::report_post("/reports/profit-loss", Post, false)]
    fn declares_expected_methods(
        table: RouteTable,
        #[case] path: &str,
        #[case] method: ProxyMethod,
        #[case] allowed: bool,
    ) {
        let (route, _) = table.resolve(path).expect("route exists");
        assert_eq!(route.allows(method), allowed);
    }

    #[test]
    fn ties_go_to_first_declaration() {
        let table = RouteTable::new(vec![
            ProxyRoute::mirrored("items/{first}", &[Get]).expect("route"),
            ProxyRoute::mirrored("items/{second}", &[Post]).expect("route"),
        ]);
        let (route, params) = table.resolve("/items/5").expect("match");
        assert!(route.allows(Get));
        assert_eq!(params.get("first"), Some("5"));
    }
}
