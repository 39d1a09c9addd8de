// Table projection: every fetched record, unfiltered, in arrival order.

use crate::model::{DisplayRow, RawRecord};
use serde_json::Value;

/// Straight 1:1 projection into the five display columns. The table is
/// independent of the area query; nothing is dropped or reordered.
pub fn project_rows(records: &[RawRecord]) -> Vec<DisplayRow> {
    records
        .iter()
        .map(|r| DisplayRow {
            year: cell(&r.year),
            area: cell(&r.location),
            price: cell(&r.price),
            demand: cell(&r.demand),
            size_sqft: cell(&r.size_sqft),
        })
        .collect()
}

/// Verbatim display text for one cell. Absent values surface as the
/// empty string, not as a dropped row. Demand and size are passthrough,
/// never numerically coerced.
fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
