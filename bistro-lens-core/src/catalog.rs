use serde::Serialize;
use std::collections::BTreeSet;

use crate::table::{Table, TextColumn};

/// Split comma-joined multi-value cells into the set of distinct trimmed
/// tokens. Input order is irrelevant; duplicates collapse.
pub fn extract_tokens<'a, I>(values: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut out = BTreeSet::new();
    for value in values.into_iter().flatten() {
        for piece in value.split(',') {
            let piece = piece.trim();
            if !piece.is_empty() {
                out.insert(piece.to_owned());
            }
        }
    }
    out
}

/// Full option lists for the dashboard dropdowns, computed once at startup.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    pub countries: Vec<String>,
    pub meals: Vec<String>,
    pub cuisines: Vec<String>,
}

impl Catalog {
    pub fn from_table(table: &Table) -> Self {
        // tokenize over the distinct raw strings, not every row: tokenization
        // is value-dependent, so the unique values carry the same information
        let meal_values = table.distinct_values(TextColumn::Meals);
        let cuisine_values = table.distinct_values(TextColumn::Cuisines);
        Self {
            countries: table
                .distinct_values(TextColumn::Country)
                .into_iter()
                .collect(),
            meals: extract_tokens(meal_values.iter().map(|s| Some(s.as_str())))
                .into_iter()
                .collect(),
            cuisines: extract_tokens(cuisine_values.iter().map(|s| Some(s.as_str())))
                .into_iter()
                .collect(),
        }
    }
}
