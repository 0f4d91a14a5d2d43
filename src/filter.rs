//! Category filtering over parsed court records
//!
//! Filtering is the consumer side of the parser: three optional category
//! sets (borough, surface, permit status) are combined by boolean AND,
//! and an absent set matches everything. Records come back in input order.

use crate::models::{Court, CourtFilter};

/// True when `court` satisfies every present category set.
pub fn matches(court: &Court, filter: &CourtFilter) -> bool {
    if let Some(ref boroughs) = filter.boroughs {
        if !boroughs.iter().any(|b| b.matches(&court.borough)) {
            return false;
        }
    }

    if let Some(ref surfaces) = filter.surfaces {
        if !surfaces.iter().any(|s| s.matches(&court.surface)) {
            return false;
        }
    }

    if let Some(ref statuses) = filter.permit_statuses {
        if !statuses.iter().any(|p| p.matches(&court.permit_status)) {
            return false;
        }
    }

    true
}

/// Filter `courts` down to the records matching `filter`, preserving
/// input order. The input slice is left untouched.
pub fn apply_filter(courts: &[Court], filter: &CourtFilter) -> Vec<Court> {
    courts
        .iter()
        .filter(|court| matches(court, filter))
        .cloned()
        .collect()
}
