use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One restaurant row. Location fields and multi-value strings keep their
/// raw form; dietary flags stay raw strings so filtering is literal
/// equality against "Y"/"N" rather than anything cleverer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub link: String,
    pub name: Option<String>,
    pub country: Option<String>,
    pub region: Option<String>,
    pub province: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub vegetarian_friendly: Option<String>,
    pub vegan_options: Option<String>,
    pub gluten_free: Option<String>,
    pub avg_rating: Option<f64>,
    pub meals: Option<String>,
    pub cuisines: Option<String>,
    pub excellent: u64,
    pub very_good: u64,
    pub average: u64,
    pub poor: u64,
    pub terrible: u64,
    pub food: f64,
    pub service: f64,
    pub value: f64,
    pub atmosphere: f64,
}

/// String columns the engine enumerates for option lists and cascading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextColumn {
    Country,
    Region,
    Province,
    City,
    Meals,
    Cuisines,
}

impl Record {
    pub fn text(&self, col: TextColumn) -> Option<&str> {
        match col {
            TextColumn::Country => self.country.as_deref(),
            TextColumn::Region => self.region.as_deref(),
            TextColumn::Province => self.province.as_deref(),
            TextColumn::City => self.city.as_deref(),
            TextColumn::Meals => self.meals.as_deref(),
            TextColumn::Cuisines => self.cuisines.as_deref(),
        }
    }
}

/// The in-memory dataset: loaded once at startup, read-only afterwards.
/// Concurrent interactions may share one copy without locking.
#[derive(Debug, Clone, Default)]
pub struct Table {
    rows: Vec<Record>,
}

impl Table {
    pub fn new(rows: Vec<Record>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sorted distinct non-null values of a string column.
    pub fn distinct_values(&self, col: TextColumn) -> BTreeSet<String> {
        self.rows
            .iter()
            .filter_map(|r| r.text(col))
            .map(str::to_owned)
            .collect()
    }
}
