use bistro_lens_common::ExportError;
use std::path::Path;

use crate::catalog::Catalog;
use crate::dashboard::DashboardView;

// --- headless summary output ---

pub fn print_summary(view: &DashboardView) {
    println!("{:<16} {}", "Markers:", view.markers.len());
    println!(
        "{:<16} {}",
        "Country:",
        if view.cascade.selection.country.is_empty() {
            "(none)"
        } else {
            view.cascade.selection.country.as_str()
        }
    );
    let visible = [
        ("region", view.cascade.visibility.region),
        ("province", view.cascade.visibility.province),
        ("city", view.cascade.visibility.city),
    ];
    let shown: Vec<&str> = visible
        .iter()
        .filter(|(_, v)| *v)
        .map(|(name, _)| *name)
        .collect();
    println!(
        "{:<16} {}",
        "Cascade levels:",
        if shown.is_empty() {
            "(hidden)".to_string()
        } else {
            shown.join(", ")
        }
    );
    println!(
        "{:<16} {}",
        "Detail charts:",
        if view.pie.is_some() { "populated" } else { "no data" }
    );
}

// --- JSON export ---

/// Write one rendered dashboard plus the startup option lists as a pretty
/// JSON document, for headless renders and debugging.
pub fn export_json(output_path: &Path, catalog: &Catalog, view: &DashboardView) -> Result<(), ExportError> {
    let doc = serde_json::json!({
        "catalog": catalog,
        "dashboard": view,
    });
    let mut file = std::fs::File::create(output_path)?;
    serde_json::to_writer_pretty(&mut file, &doc)?;
    Ok(())
}
