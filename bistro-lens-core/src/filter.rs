use bistro_lens_common::{FilterDefaults, SelectionError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::cascade::LocationSelection;
use crate::table::{Record, Table};

/// Radio choice for a dietary flag. `No` is the untoggled default, and it
/// still filters: the predicate compares the record's raw flag against the
/// literal letter, so `No` keeps only rows whose flag is exactly "N".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DietChoice {
    #[serde(rename = "Y")]
    Yes,
    #[default]
    #[serde(rename = "N")]
    No,
}

impl DietChoice {
    pub const fn as_letter(self) -> &'static str {
        match self {
            Self::Yes => "Y",
            Self::No => "N",
        }
    }
}

impl FromStr for DietChoice {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Y" => Ok(Self::Yes),
            "N" => Ok(Self::No),
            other => Err(SelectionError::InvalidDietChoice(other.to_owned())),
        }
    }
}

/// Inclusive average-rating bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingRange {
    lo: f64,
    hi: f64,
}

impl RatingRange {
    pub fn new(lo: f64, hi: f64) -> Result<Self, SelectionError> {
        let range = Self { lo, hi };
        range.validate()?;
        Ok(range)
    }

    /// Re-checkable after deserialization, which bypasses `new`.
    pub fn validate(&self) -> Result<(), SelectionError> {
        if !self.lo.is_finite() || !self.hi.is_finite() || self.lo > self.hi {
            return Err(SelectionError::InvalidRatingRange {
                lo: self.lo,
                hi: self.hi,
            });
        }
        Ok(())
    }

    pub const fn lo(&self) -> f64 {
        self.lo
    }

    pub const fn hi(&self) -> f64 {
        self.hi
    }

    pub fn contains(&self, rating: f64) -> bool {
        rating >= self.lo && rating <= self.hi
    }
}

impl Default for RatingRange {
    fn default() -> Self {
        Self { lo: 1.0, hi: 5.0 }
    }
}

/// The full filter state the presentation layer hands in on every event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub location: LocationSelection,
    pub vegetarian: DietChoice,
    pub vegan: DietChoice,
    pub gluten_free: DietChoice,
    pub rating: RatingRange,
    pub meals: Vec<String>,
    pub cuisines: Vec<String>,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            location: LocationSelection::default(),
            vegetarian: DietChoice::No,
            vegan: DietChoice::No,
            gluten_free: DietChoice::No,
            rating: RatingRange::default(),
            meals: Vec::new(),
            cuisines: vec!["Europe".into()],
        }
    }
}

impl Selection {
    pub fn from_defaults(defaults: &FilterDefaults) -> Result<Self, SelectionError> {
        Ok(Self {
            rating: RatingRange::new(defaults.rating_lo, defaults.rating_hi)?,
            cuisines: defaults.cuisines.clone(),
            ..Self::default()
        })
    }

    pub fn validate(&self) -> Result<(), SelectionError> {
        self.rating.validate()
    }

    /// The row predicate: a conjunction of every active clause. An empty
    /// country compares every row against `""` and matches nothing.
    pub fn matches(&self, r: &Record) -> bool {
        if r.country.as_deref() != Some(self.location.country.as_str()) {
            return false;
        }
        if !self.location.region.is_empty()
            && r.region.as_deref() != Some(self.location.region.as_str())
        {
            return false;
        }
        if !self.location.province.is_empty()
            && r.province.as_deref() != Some(self.location.province.as_str())
        {
            return false;
        }
        if !self.location.city.is_empty() && r.city.as_deref() != Some(self.location.city.as_str())
        {
            return false;
        }
        // diet clauses always apply; a null flag never equals either letter
        if r.vegetarian_friendly.as_deref() != Some(self.vegetarian.as_letter()) {
            return false;
        }
        if r.vegan_options.as_deref() != Some(self.vegan.as_letter()) {
            return false;
        }
        if r.gluten_free.as_deref() != Some(self.gluten_free.as_letter()) {
            return false;
        }
        match r.avg_rating {
            Some(rating) if self.rating.contains(rating) => {}
            _ => return false,
        }
        // substring containment on the raw string, so "Lunch" also matches
        // a cell holding "Lunch/Dinner"
        if !contains_all(r.meals.as_deref(), &self.meals) {
            return false;
        }
        if !contains_all(r.cuisines.as_deref(), &self.cuisines) {
            return false;
        }
        true
    }
}

fn contains_all(raw: Option<&str>, tokens: &[String]) -> bool {
    if tokens.is_empty() {
        return true;
    }
    match raw {
        Some(raw) => tokens.iter().all(|t| raw.contains(t.as_str())),
        None => false,
    }
}

/// One linear pass over the table, original row order preserved. The
/// signature leaves room to swap the scan for an index later.
pub fn filter_rows<'a>(table: &'a Table, selection: &Selection) -> Vec<&'a Record> {
    table
        .rows()
        .iter()
        .filter(|r| selection.matches(r))
        .collect()
}
