//! Optional list filters and their query string encoding.

use pagination::PageRequest;

use super::client::QueryPairs;

fn push_opt(pairs: &mut QueryPairs, key: &'static str, value: Option<impl ToString>) {
    if let Some(value) = value {
        pairs.push((key, value.to_string()));
    }
}

/// `page` and `per_page` followed by `extra`.
pub(crate) fn paged(page: PageRequest, extra: QueryPairs) -> QueryPairs {
    let mut pairs: QueryPairs = page.query_pairs().into();
    pairs.extend(extra);
    pairs
}

/// Filters for `GET /trip-costs`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripCostFilter {
    /// Only this trip.
    pub trip_id: Option<i64>,
    /// Only this vehicle.
    pub vehicle_id: Option<i64>,
    /// Only this cost type.
    pub cost_type: Option<String>,
    /// From, `DD-MM-YYYY`.
    pub start_date: Option<String>,
    /// To, `DD-MM-YYYY`.
    pub end_date: Option<String>,
}

impl TripCostFilter {
    pub(crate) fn pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        push_opt(&mut pairs, "trip_id", self.trip_id);
        push_opt(&mut pairs, "vehicle_id", self.vehicle_id);
        push_opt(&mut pairs, "cost_type", self.cost_type.as_deref());
        push_opt(&mut pairs, "start_date", self.start_date.as_deref());
        push_opt(&mut pairs, "end_date", self.end_date.as_deref());
        pairs
    }
}

/// Filters for `GET /maintenance-costs`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaintenanceCostFilter {
    /// Only this vehicle.
    pub vehicle_id: Option<i64>,
    /// Only this cost type.
    pub cost_type: Option<String>,
    /// From, `DD-MM-YYYY`.
    pub start_date: Option<String>,
    /// To, `DD-MM-YYYY`.
    pub end_date: Option<String>,
}

impl MaintenanceCostFilter {
    pub(crate) fn pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        push_opt(&mut pairs, "vehicle_id", self.vehicle_id);
        push_opt(&mut pairs, "cost_type", self.cost_type.as_deref());
        push_opt(&mut pairs, "start_date", self.start_date.as_deref());
        push_opt(&mut pairs, "end_date", self.end_date.as_deref());
        pairs
    }
}

/// Filters and ordering for a vehicle's cost lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleCostQuery {
    /// Only this cost type.
    pub cost_type: Option<String>,
    /// From, `DD-MM-YYYY`.
    pub start_date: Option<String>,
    /// To, `DD-MM-YYYY`.
    pub end_date: Option<String>,
    /// Sort column.
    pub sort_by: String,
    /// `asc` or `desc`.
    pub sort_order: String,
}

impl Default for VehicleCostQuery {
    fn default() -> Self {
        Self {
            cost_type: None,
            start_date: None,
            end_date: None,
            sort_by: "date".to_owned(),
            sort_order: "desc".to_owned(),
        }
    }
}

impl VehicleCostQuery {
    pub(crate) fn pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        push_opt(&mut pairs, "cost_type", self.cost_type.as_deref());
        push_opt(&mut pairs, "start_date", self.start_date.as_deref());
        push_opt(&mut pairs, "end_date", self.end_date.as_deref());
        pairs.push(("sort_by", self.sort_by.clone()));
        pairs.push(("sort_order", self.sort_order.clone()));
        pairs
    }
}

/// Period selection for profit and loss reports.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportRange {
    /// Named period such as `this_month`.
    pub period: Option<String>,
    /// Custom range start, `DD-MM-YYYY`.
    pub start_date: Option<String>,
    /// Custom range end, `DD-MM-YYYY`.
    pub end_date: Option<String>,
}

impl ReportRange {
    pub(crate) fn pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        push_opt(&mut pairs, "period", self.period.as_deref());
        push_opt(&mut pairs, "start_date", self.start_date.as_deref());
        push_opt(&mut pairs, "end_date", self.end_date.as_deref());
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paged_puts_cursor_first() {
        let page = PageRequest::new(2, 20).expect("valid page");
        let pairs = paged(page, vec![("state", "active".to_owned())]);
        assert_eq!(
            pairs,
            vec![
                ("page", "2".to_owned()),
                ("per_page", "20".to_owned()),
                ("state", "active".to_owned()),
            ]
        );
    }

    #[test]
    fn unset_filters_are_omitted() {
        let filter = TripCostFilter {
            trip_id: Some(9),
            cost_type: Some("fuel".to_owned()),
            ..TripCostFilter::default()
        };
        assert_eq!(
            filter.pairs(),
            vec![("trip_id", "9".to_owned()), ("cost_type", "fuel".to_owned())]
        );
        assert!(ReportRange::default().pairs().is_empty());
    }

    #[test]
    fn vehicle_cost_query_always_sorts() {
        let pairs = VehicleCostQuery::default().pairs();
        assert_eq!(
            pairs,
            vec![("sort_by", "date".to_owned()), ("sort_order", "desc".to_owned())]
        );
    }
}
