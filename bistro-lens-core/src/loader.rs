use arrow::array::{Array, ArrayRef, Float64Array, Int64Array, StringArray};
use arrow::csv::reader::Format;
use arrow::csv::ReaderBuilder;
use arrow::datatypes::Schema;
use arrow::record_batch::RecordBatch;
use bistro_lens_common::{DataLoadError, LoadResult};
use std::fs::File;
use std::io::Seek;
use std::path::Path;
use std::sync::Arc;

use crate::table::{Record, Table};

/// Every column the engine reads. Absence of any of these fails the load
/// up front instead of surfacing at the first filter.
pub const REQUIRED_COLUMNS: [&str; 24] = [
    "restaurant_link",
    "restaurant_name",
    "country",
    "region",
    "province",
    "city",
    "address",
    "longitude",
    "latitude",
    "vegetarian_friendly",
    "vegan_options",
    "gluten_free",
    "avg_rating",
    "meals",
    "cuisines",
    "excellent",
    "very_good",
    "average",
    "poor",
    "terrible",
    "food",
    "service",
    "value",
    "atmosphere",
];

const BATCH_SIZE: usize = 8192;

pub fn load_dataset(path: &Path) -> LoadResult<Table> {
    load_dataset_delimited(path, b',')
}

pub fn load_dataset_delimited(path: &Path, delimiter: u8) -> LoadResult<Table> {
    let mut file = File::open(path)?;
    let format = Format::default().with_header(true).with_delimiter(delimiter);
    // infer over the whole file so a late-row type change can't poison a batch read
    let (schema, _) = format.infer_schema(&mut file, None)?;
    file.rewind()?;
    let columns = ColumnIndexes::resolve(&schema)?;
    let reader = ReaderBuilder::new(Arc::new(schema))
        .with_header(true)
        .with_delimiter(delimiter)
        .with_batch_size(BATCH_SIZE)
        .build(file)?;
    let mut rows = Vec::new();
    for batch in reader {
        let batch = batch?;
        for row in 0..batch.num_rows() {
            rows.push(columns.record_at(&batch, row)?);
        }
    }
    Ok(Table::new(rows))
}

struct ColumnIndexes {
    link: usize,
    name: usize,
    country: usize,
    region: usize,
    province: usize,
    city: usize,
    address: usize,
    longitude: usize,
    latitude: usize,
    vegetarian_friendly: usize,
    vegan_options: usize,
    gluten_free: usize,
    avg_rating: usize,
    meals: usize,
    cuisines: usize,
    excellent: usize,
    very_good: usize,
    average: usize,
    poor: usize,
    terrible: usize,
    food: usize,
    service: usize,
    value: usize,
    atmosphere: usize,
}

impl ColumnIndexes {
    fn resolve(schema: &Schema) -> LoadResult<Self> {
        let idx = |name: &str| {
            schema
                .index_of(name)
                .map_err(|_| DataLoadError::MissingColumn(name.to_owned()))
        };
        Ok(Self {
            link: idx("restaurant_link")?,
            name: idx("restaurant_name")?,
            country: idx("country")?,
            region: idx("region")?,
            province: idx("province")?,
            city: idx("city")?,
            address: idx("address")?,
            longitude: idx("longitude")?,
            latitude: idx("latitude")?,
            vegetarian_friendly: idx("vegetarian_friendly")?,
            vegan_options: idx("vegan_options")?,
            gluten_free: idx("gluten_free")?,
            avg_rating: idx("avg_rating")?,
            meals: idx("meals")?,
            cuisines: idx("cuisines")?,
            excellent: idx("excellent")?,
            very_good: idx("very_good")?,
            average: idx("average")?,
            poor: idx("poor")?,
            terrible: idx("terrible")?,
            food: idx("food")?,
            service: idx("service")?,
            value: idx("value")?,
            atmosphere: idx("atmosphere")?,
        })
    }

    fn record_at(&self, batch: &RecordBatch, row: usize) -> LoadResult<Record> {
        Ok(Record {
            link: opt_string(batch.column(self.link), row).unwrap_or_default(),
            name: opt_string(batch.column(self.name), row),
            country: opt_string(batch.column(self.country), row),
            region: opt_string(batch.column(self.region), row),
            province: opt_string(batch.column(self.province), row),
            city: opt_string(batch.column(self.city), row),
            address: opt_string(batch.column(self.address), row),
            longitude: opt_f64(batch.column(self.longitude), row, "longitude")?,
            latitude: opt_f64(batch.column(self.latitude), row, "latitude")?,
            vegetarian_friendly: opt_string(batch.column(self.vegetarian_friendly), row),
            vegan_options: opt_string(batch.column(self.vegan_options), row),
            gluten_free: opt_string(batch.column(self.gluten_free), row),
            avg_rating: opt_f64(batch.column(self.avg_rating), row, "avg_rating")?,
            meals: opt_string(batch.column(self.meals), row),
            cuisines: opt_string(batch.column(self.cuisines), row),
            excellent: count_at(batch.column(self.excellent), row, "excellent")?,
            very_good: count_at(batch.column(self.very_good), row, "very_good")?,
            average: count_at(batch.column(self.average), row, "average")?,
            poor: count_at(batch.column(self.poor), row, "poor")?,
            terrible: count_at(batch.column(self.terrible), row, "terrible")?,
            food: opt_f64(batch.column(self.food), row, "food")?.unwrap_or(0.0),
            service: opt_f64(batch.column(self.service), row, "service")?.unwrap_or(0.0),
            value: opt_f64(batch.column(self.value), row, "value")?.unwrap_or(0.0),
            atmosphere: opt_f64(batch.column(self.atmosphere), row, "atmosphere")?.unwrap_or(0.0),
        })
    }
}

// per-type downcast ladder; CSV inference may land any of these on a column
fn opt_string(col: &ArrayRef, row: usize) -> Option<String> {
    if col.is_null(row) {
        return None;
    }
    if let Some(a) = col.as_any().downcast_ref::<StringArray>() {
        let v = a.value(row);
        if v.trim().is_empty() {
            return None;
        }
        return Some(v.to_owned());
    }
    if let Some(a) = col.as_any().downcast_ref::<Int64Array>() {
        return Some(a.value(row).to_string());
    }
    if let Some(a) = col.as_any().downcast_ref::<Float64Array>() {
        return Some(a.value(row).to_string());
    }
    None
}

fn opt_f64(col: &ArrayRef, row: usize, name: &str) -> LoadResult<Option<f64>> {
    if col.is_null(row) {
        return Ok(None);
    }
    if let Some(a) = col.as_any().downcast_ref::<Float64Array>() {
        return Ok(Some(a.value(row)));
    }
    if let Some(a) = col.as_any().downcast_ref::<Int64Array>() {
        return Ok(Some(a.value(row) as f64));
    }
    if let Some(a) = col.as_any().downcast_ref::<StringArray>() {
        let s = a.value(row).trim();
        if s.is_empty() {
            return Ok(None);
        }
        return s.parse::<f64>().map(Some).map_err(|_| DataLoadError::BadColumn {
            column: name.to_owned(),
            reason: format!("non-numeric value '{s}'"),
        });
    }
    Err(DataLoadError::BadColumn {
        column: name.to_owned(),
        reason: format!("unsupported type {:?}", col.data_type()),
    })
}

fn count_at(col: &ArrayRef, row: usize, name: &str) -> LoadResult<u64> {
    // review counts: missing cells read as zero
    let v = opt_f64(col, row, name)?.unwrap_or(0.0);
    if v < 0.0 {
        return Err(DataLoadError::BadColumn {
            column: name.to_owned(),
            reason: format!("negative review count {v}"),
        });
    }
    Ok(v as u64)
}
