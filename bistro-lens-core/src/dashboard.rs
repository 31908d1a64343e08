use bistro_lens_common::SelectionError;
use serde::Serialize;

use crate::cascade::{resolve_cascade, CascadeState};
use crate::filter::{filter_rows, Selection};
use crate::table::Table;
use crate::view::{bar_view, map_markers, pie_view, CategoryBars, GeoPoint, MapMarker, ReviewPie};

/// Everything the presentation layer needs to redraw after one event.
/// `pie`/`bars` are `None` when no detail selection is active.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub cascade: CascadeState,
    pub markers: Vec<MapMarker>,
    pub pie: Option<ReviewPie>,
    pub bars: Option<CategoryBars>,
}

/// One synchronous, stateless recomputation: validate the selection,
/// resolve the cascade, rescan the table, derive the views. All state lives
/// in the caller's selection; the table is shared read-only.
pub fn render_dashboard(
    table: &Table,
    selection: &Selection,
    clicked: Option<GeoPoint>,
) -> Result<DashboardView, SelectionError> {
    selection.validate()?;
    let cascade = resolve_cascade(table, &selection.location);
    // scan with the post-reset location so a stale child selection from a
    // prior cascade state cannot leak into the predicate
    let mut effective = selection.clone();
    effective.location = cascade.selection.clone();
    let rows = filter_rows(table, &effective);
    let markers = map_markers(&rows);
    let pie = pie_view(table, clicked);
    let bars = bar_view(table, clicked);
    Ok(DashboardView {
        cascade,
        markers,
        pie,
        bars,
    })
}
