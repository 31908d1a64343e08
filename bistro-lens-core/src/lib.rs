pub mod cascade;
pub mod catalog;
pub mod dashboard;
pub mod export;
pub mod filter;
pub mod loader;
pub mod table;
pub mod view;

pub use bistro_lens_common::{Config, DataLoadError, ExportError, LoadResult, SelectionError};
pub use cascade::{resolve_cascade, CascadeState, LocationSelection};
pub use catalog::{extract_tokens, Catalog};
pub use dashboard::{render_dashboard, DashboardView};
pub use filter::{filter_rows, DietChoice, RatingRange, Selection};
pub use loader::{load_dataset, load_dataset_delimited};
pub use table::{Record, Table, TextColumn};
pub use view::{find_restaurant, CategoryBars, GeoPoint, MapMarker, ReviewPie};
