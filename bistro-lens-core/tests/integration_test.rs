use bistro_lens_core::export::{export_json, print_summary};
use bistro_lens_core::{
    load_dataset, load_dataset_delimited, render_dashboard, resolve_cascade, Catalog,
    DataLoadError, GeoPoint, LocationSelection, RatingRange, Selection,
};
use std::io::Write;
use tempfile::NamedTempFile;

const HEADER: &str = "restaurant_link,restaurant_name,country,region,province,city,address,longitude,latitude,vegetarian_friendly,vegan_options,gluten_free,avg_rating,meals,cuisines,excellent,very_good,average,poor,terrible,food,service,value,atmosphere";

fn write_fixture() -> NamedTempFile {
    let mut tmp = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    writeln!(tmp, "{HEADER}").unwrap();
    writeln!(tmp, "g1,Le Bon,France,Ile-de-France,Paris,Paris,1 Rue de Test,2.35,48.85,N,N,N,4.5,\"Lunch, Dinner\",\"French, Europe\",10,8,5,2,1,4.5,4.0,3.5,4.0").unwrap();
    writeln!(tmp, "g2,La Cave,France,Provence,Var,Toulon,2 Rue du Port,5.93,43.12,N,N,N,2.0,Dinner,\"French, Europe\",1,2,3,4,5,2.0,2.5,3.0,2.0").unwrap();
    writeln!(tmp, "g3,Trattoria,Italy,Lazio,Rome,Rome,Via Roma 3,12.49,41.89,Y,N,N,4.0,\"Lunch, Dinner\",\"Italian, Europe\",7,6,4,1,0,4.0,4.0,4.0,4.0").unwrap();
    tmp.flush().unwrap();
    tmp
}

#[test]
fn load_dataset_materializes_typed_rows() {
    let tmp = write_fixture();
    let table = load_dataset(tmp.path()).unwrap();
    assert_eq!(table.len(), 3);
    let first = &table.rows()[0];
    assert_eq!(first.link, "g1");
    assert_eq!(first.name.as_deref(), Some("Le Bon"));
    assert_eq!(first.country.as_deref(), Some("France"));
    assert_eq!(first.longitude, Some(2.35));
    assert_eq!(first.avg_rating, Some(4.5));
    assert_eq!(first.meals.as_deref(), Some("Lunch, Dinner"));
    assert_eq!(first.excellent, 10);
    assert_eq!(first.atmosphere, 4.0);
}

#[test]
fn missing_required_column_fails_the_load() {
    let mut tmp = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    // header drops `cuisines`
    writeln!(tmp, "{}", HEADER.replace(",cuisines", "")).unwrap();
    writeln!(
        tmp,
        "g1,Le Bon,France,Ile-de-France,Paris,Paris,1 Rue,2.35,48.85,N,N,N,4.5,Lunch,10,8,5,2,1,4.5,4.0,3.5,4.0"
    )
    .unwrap();
    tmp.flush().unwrap();
    let err = load_dataset(tmp.path()).unwrap_err();
    assert!(matches!(err, DataLoadError::MissingColumn(c) if c == "cuisines"));
}

#[test]
fn missing_source_file_is_an_io_error() {
    let err = load_dataset(std::path::Path::new("/no/such/dataset.csv")).unwrap_err();
    assert!(matches!(err, DataLoadError::Io(_)));
}

#[test]
fn semicolon_delimited_table_loads() {
    let mut tmp = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    writeln!(tmp, "{}", HEADER.replace(',', ";")).unwrap();
    writeln!(
        tmp,
        "g1;Le Bon;France;Ile-de-France;Paris;Paris;1 Rue;2.35;48.85;N;N;N;4.5;Lunch, Dinner;French, Europe;10;8;5;2;1;4.5;4.0;3.5;4.0"
    )
    .unwrap();
    tmp.flush().unwrap();
    let table = load_dataset_delimited(tmp.path(), b';').unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table.rows()[0].meals.as_deref(), Some("Lunch, Dinner"));
}

#[test]
fn france_rating_window_end_to_end() {
    let tmp = write_fixture();
    let table = load_dataset(tmp.path()).unwrap();
    let selection = Selection {
        location: LocationSelection::country("France"),
        rating: RatingRange::new(3.0, 5.0).unwrap(),
        ..Selection::default()
    };
    let view = render_dashboard(&table, &selection, None).unwrap();
    // g2 falls below the rating window, g3 is the wrong country
    assert_eq!(view.markers.len(), 1);
    assert_eq!(view.markers[0].label, "Le Bon; 1 Rue de Test");
    assert_eq!(view.markers[0].color_value, 4.5);
    assert!(view.pie.is_none());
    assert!(view.bars.is_none());

    // clicking the surviving marker fills both detail charts
    let clicked = GeoPoint {
        lon: view.markers[0].lon,
        lat: view.markers[0].lat,
    };
    let view = render_dashboard(&table, &selection, Some(clicked)).unwrap();
    let pie = view.pie.unwrap();
    assert_eq!(
        pie.labels,
        ["Excellent", "Very good", "Average", "Poor", "Terrible"]
    );
    assert_eq!(pie.values, [10, 8, 5, 2, 1]);
    let bars = view.bars.unwrap();
    assert_eq!(bars.labels, ["Food", "Service", "Value", "Atmosphere"]);
    assert_eq!(bars.values, [4.5, 4.0, 3.5, 4.0]);
    assert_eq!(bars.axis, [1.0, 5.0]);
}

#[test]
fn cascade_options_come_from_the_loaded_table() {
    let tmp = write_fixture();
    let table = load_dataset(tmp.path()).unwrap();
    let state = resolve_cascade(&table, &LocationSelection::country("France"));
    assert_eq!(state.options.region, vec!["Ile-de-France", "Provence"]);
    assert!(state.visibility.region);
    assert!(!state.visibility.province);
}

#[test]
fn startup_catalog_tokenizes_multi_value_columns() {
    let tmp = write_fixture();
    let table = load_dataset(tmp.path()).unwrap();
    let catalog = Catalog::from_table(&table);
    assert_eq!(catalog.countries, vec!["France", "Italy"]);
    assert_eq!(catalog.meals, vec!["Dinner", "Lunch"]);
    assert_eq!(catalog.cuisines, vec!["Europe", "French", "Italian"]);
}

#[test]
fn export_writes_a_readable_json_document() {
    let tmp = write_fixture();
    let table = load_dataset(tmp.path()).unwrap();
    let catalog = Catalog::from_table(&table);
    let selection = Selection {
        location: LocationSelection::country("France"),
        ..Selection::default()
    };
    let view = render_dashboard(&table, &selection, None).unwrap();
    print_summary(&view);
    let out = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    export_json(out.path(), &catalog, &view).unwrap();
    let doc: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(out.path()).unwrap()).unwrap();
    assert_eq!(doc["catalog"]["countries"][0], "France");
    assert_eq!(doc["dashboard"]["cascade"]["selection"]["country"], "France");
    assert!(doc["dashboard"]["pie"].is_null()); // no click: the no-data placeholder
}
