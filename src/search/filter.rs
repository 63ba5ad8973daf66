// src/search/filter.rs
use crate::domain::Listing;
use crate::search::{SearchCriteria, SortKey};
use std::cmp::Ordering;

/// Derives the display view: listings inside the price range whose title,
/// address or any amenity contains the query (case-insensitive), ordered
/// ascending by the sort key. Equal keys keep their input order.
pub fn filter_and_sort<'a>(listings: &'a [Listing], criteria: &SearchCriteria) -> Vec<&'a Listing> {
    let needle = criteria.query.to_lowercase();

    let mut view: Vec<&Listing> = listings
        .iter()
        .filter(|l| criteria.price.contains(l.price) && matches_text(l, &needle))
        .collect();

    // sort_by is stable.
    match criteria.sort {
        SortKey::Price => view.sort_by(|a, b| numeric_cmp(a.price, b.price)),
        SortKey::Distance => view.sort_by(|a, b| {
            numeric_cmp(a.distance_from_university, b.distance_from_university)
        }),
    }

    view
}

/// Numeric order: `-0.0` and `0.0` are equal keys. Validated listings are
/// finite, so the `Equal` fallback is never reached for them.
fn numeric_cmp(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// `needle` must already be lowercased.
fn matches_text(listing: &Listing, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    listing.title.to_lowercase().contains(needle)
        || listing.address.to_lowercase().contains(needle)
        || listing
            .amenities
            .iter()
            .any(|a| a.to_lowercase().contains(needle))
}
