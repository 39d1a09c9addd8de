// Core structs: RawRecord, DisplayRow, chart types, error enums
use serde::Deserialize;
use serde_json::Value;

/// One record as delivered by the backend. The upstream dataset is
/// loosely typed, so every field stays a raw JSON value and the
/// accessors below perform the coercions.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub year: Value,
    #[serde(rename = "final location", default)]
    pub location: Value,
    #[serde(rename = "flat - weighted average rate", default)]
    pub price: Value,
    #[serde(rename = "total sold - igr", default)]
    pub demand: Value,
    #[serde(rename = "total carpet area supplied (sqft)", default)]
    pub size_sqft: Value,
}

impl RawRecord {
    /// Trimmed, lower-cased location used as the filter key.
    /// A missing or non-string location never matches a real area.
    pub fn location_key(&self) -> String {
        self.location
            .as_str()
            .map(|s| s.trim().to_lowercase())
            .unwrap_or_default()
    }

    /// Price coerced to f64. Missing or unparseable values become 0.0
    /// so no record is ever dropped over a bad price cell.
    pub fn price_value(&self) -> f64 {
        coerce_number(&self.price).unwrap_or(0.0)
    }

    /// Year coerced to an integer, if the cell holds anything year-like.
    pub fn year_value(&self) -> Option<i64> {
        match &self.year {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.round() as i64)),
            Value::String(s) => {
                let s = s.trim();
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().map(|f| f.round() as i64))
            }
            _ => None,
        }
    }
}

fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Flattened record shown in the table and exported to CSV.
/// All cells are display strings; absent fields surface as "".
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    pub year: String,
    pub area: String,
    pub price: String,
    pub demand: String,
    pub size_sqft: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub year: i64,
    pub price: f64,
}

/// One plotted line: label, points in filtered-record order, display color.
/// Points carry their own x so the chart never has to line them up
/// positionally with the shared axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub points: Vec<ChartPoint>,
    pub color_hex: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartData {
    pub axis: Vec<i64>,
    pub series: Vec<Series>,
}

impl ChartData {
    pub fn is_empty(&self) -> bool {
        self.axis.is_empty() && self.series.is_empty()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("http error: {0}")]
    Http(String),
    #[error("backend returned status {0}")]
    BadStatus(u16),
    #[error("invalid response body: {0}")]
    InvalidBody(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("csv write error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
