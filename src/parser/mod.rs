// Lenient extraction of records and summary from the backend payload.

use crate::model::RawRecord;
use serde_json::Value;

#[derive(Debug, Default)]
pub struct AnalysisPayload {
    pub records: Vec<RawRecord>,
    pub summary: Option<String>,
}

pub struct PayloadParser;

impl PayloadParser {
    pub fn new() -> Self {
        Self
    }

    /// Pulls `realestate` and `summary` out of the response body.
    /// A missing or non-array `realestate` yields an empty record set
    /// rather than an error; elements that are not objects collapse to
    /// all-null records. Leniency here is deliberate.
    pub fn parse(&self, body: &Value) -> AnalysisPayload {
        let records = body
            .get("realestate")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .map(|item| {
                        serde_json::from_value(item.clone()).unwrap_or_default()
                    })
                    .collect()
            })
            .unwrap_or_default();

        let summary = body
            .get("summary")
            .and_then(Value::as_str)
            .map(str::to_string);

        AnalysisPayload { records, summary }
    }
}
