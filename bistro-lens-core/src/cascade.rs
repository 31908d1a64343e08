use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::table::{Table, TextColumn};

/// Current dropdown selections, top of the hierarchy first. `""` means
/// unselected at that level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationSelection {
    pub country: String,
    pub region: String,
    pub province: String,
    pub city: String,
}

impl LocationSelection {
    pub fn country(country: &str) -> Self {
        Self {
            country: country.to_owned(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CascadeOptions {
    pub region: Vec<String>,
    pub province: Vec<String>,
    pub city: Vec<String>,
}

/// Whether each dependent control should be shown. A hidden level is a
/// visibility signal for the presentation layer, not a data filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CascadeVisibility {
    pub region: bool,
    pub province: bool,
    pub city: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CascadeState {
    pub options: CascadeOptions,
    pub visibility: CascadeVisibility,
    /// The selection after resets: a level survives only if it appears in
    /// its freshly computed option list.
    pub selection: LocationSelection,
}

/// Sorted distinct non-null child values among rows whose parent column
/// equals `parent_value`. Keyed off the parent column alone, not the whole
/// ancestor chain.
fn child_options(
    table: &Table,
    parent: TextColumn,
    parent_value: &str,
    child: TextColumn,
) -> Vec<String> {
    if parent_value.is_empty() {
        return Vec::new();
    }
    let mut out = BTreeSet::new();
    for r in table.rows() {
        if r.text(parent) == Some(parent_value) {
            if let Some(v) = r.text(child) {
                out.insert(v.to_owned());
            }
        }
    }
    out.into_iter().collect()
}

fn keep_if_listed(value: &str, options: &[String]) -> String {
    if !value.is_empty() && options.iter().any(|o| o == value) {
        value.to_owned()
    } else {
        String::new()
    }
}

/// Recompute every dependent level from the current selection. Changing an
/// ancestor invalidates its descendants because they no longer appear in
/// the recomputed option lists; the reset cascades downward. Idempotent:
/// an already-consistent selection passes through unchanged.
pub fn resolve_cascade(table: &Table, selection: &LocationSelection) -> CascadeState {
    let country = selection.country.clone();
    let region_options = child_options(table, TextColumn::Country, &country, TextColumn::Region);
    let region = keep_if_listed(&selection.region, &region_options);
    let province_options = child_options(table, TextColumn::Region, &region, TextColumn::Province);
    let province = keep_if_listed(&selection.province, &province_options);
    let city_options = child_options(table, TextColumn::Province, &province, TextColumn::City);
    let city = keep_if_listed(&selection.city, &city_options);
    CascadeState {
        options: CascadeOptions {
            region: region_options,
            province: province_options,
            city: city_options,
        },
        visibility: CascadeVisibility {
            region: !country.is_empty(),
            province: !region.is_empty(),
            city: !province.is_empty(),
        },
        selection: LocationSelection {
            country,
            region,
            province,
            city,
        },
    }
}
