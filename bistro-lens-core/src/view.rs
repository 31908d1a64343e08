use serde::{Deserialize, Serialize};

use crate::table::{Record, Table};

pub const REVIEW_LABELS: [&str; 5] = ["Excellent", "Very good", "Average", "Poor", "Terrible"];
pub const CATEGORY_LABELS: [&str; 4] = ["Food", "Service", "Value", "Atmosphere"];
/// Fixed y-axis for the category bars.
pub const CATEGORY_AXIS: [f64; 2] = [1.0, 5.0];

/// A clicked map coordinate. Exact equality against the stored coordinates
/// is the de facto restaurant key for detail lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub lon: f64,
    pub lat: f64,
    pub label: String,
    pub color_value: f64,
}

/// One marker per filtered row with usable coordinates. An empty filtered
/// set is an empty marker list, not an error.
pub fn map_markers(rows: &[&Record]) -> Vec<MapMarker> {
    rows.iter()
        .filter_map(|r| {
            let (lon, lat) = (r.longitude?, r.latitude?);
            Some(MapMarker {
                lon,
                lat,
                label: format!(
                    "{}; {}",
                    r.name.as_deref().unwrap_or_default(),
                    r.address.as_deref().unwrap_or_default()
                ),
                color_value: r.avg_rating.unwrap_or(0.0),
            })
        })
        .collect()
}

/// First row in the FULL table (not the filtered set) whose coordinates
/// match exactly.
pub fn find_restaurant(table: &Table, point: GeoPoint) -> Option<&Record> {
    table
        .rows()
        .iter()
        .find(|r| r.longitude == Some(point.lon) && r.latitude == Some(point.lat))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewPie {
    pub labels: [&'static str; 5],
    pub values: [u64; 5],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBars {
    pub labels: [&'static str; 4],
    pub values: [f64; 4],
    pub axis: [f64; 2],
}

/// Review-count breakdown for the clicked restaurant. `None` is the normal
/// "no data" placeholder: nothing clicked yet, or no coordinate match.
pub fn pie_view(table: &Table, clicked: Option<GeoPoint>) -> Option<ReviewPie> {
    let r = find_restaurant(table, clicked?)?;
    Some(ReviewPie {
        labels: REVIEW_LABELS,
        values: [r.excellent, r.very_good, r.average, r.poor, r.terrible],
    })
}

/// Category ratings for the clicked restaurant, same `None` semantics.
pub fn bar_view(table: &Table, clicked: Option<GeoPoint>) -> Option<CategoryBars> {
    let r = find_restaurant(table, clicked?)?;
    Some(CategoryBars {
        labels: CATEGORY_LABELS,
        values: [r.food, r.service, r.value, r.atmosphere],
        axis: CATEGORY_AXIS,
    })
}
