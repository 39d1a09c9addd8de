use crate::model::{ChartData, ChartPoint, RawRecord, Series};

use rand::Rng;

/// Exact-match partition of records for one normalized area.
/// Equality on the trimmed, lower-cased location only; no substring or
/// fuzzy matching.
pub fn filter_by_area<'a>(area: &str, records: &'a [RawRecord]) -> Vec<&'a RawRecord> {
    records
        .iter()
        .filter(|r| r.location_key() == area)
        .collect()
}

/// Shared x-axis: every distinct year in the unfiltered dataset,
/// ascending. Cells that hold nothing year-like are left out.
pub fn year_axis(records: &[RawRecord]) -> Vec<i64> {
    let mut years: Vec<i64> = records.iter().filter_map(|r| r.year_value()).collect();
    years.sort_unstable();
    years.dedup();
    years
}

pub struct SeriesBuilder;

impl SeriesBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Builds one series per queried area, in query order. Points stay
    /// in filtered-record order and carry their own year, so a series
    /// shorter than the axis still plots against the right x values.
    pub fn build(&self, areas: &[String], records: &[RawRecord]) -> ChartData {
        let axis = year_axis(records);

        let series = areas
            .iter()
            .map(|area| {
                let points = filter_by_area(area, records)
                    .into_iter()
                    .map(|r| ChartPoint {
                        year: r.year_value().unwrap_or(0),
                        price: r.price_value(),
                    })
                    .collect();

                Series {
                    label: area.to_uppercase(),
                    points,
                    color_hex: random_color(),
                }
            })
            .collect();

        ChartData { axis, series }
    }
}

/// Uniformly sampled RGB display color. Two series may collide.
fn random_color() -> String {
    let mut rng = rand::rng();
    format!(
        "#{:02x}{:02x}{:02x}",
        rng.random::<u8>(),
        rng.random::<u8>(),
        rng.random::<u8>()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(year: i64, location: &str, price: f64) -> RawRecord {
        serde_json::from_value(json!({
            "year": year,
            "final location": location,
            "flat - weighted average rate": price,
        }))
        .unwrap()
    }

    #[test]
    fn filter_is_an_exact_partition() {
        let records = vec![
            record(2019, "Pune", 100.0),
            record(2020, " PUNE ", 200.0),
            record(2021, "punewadi", 300.0),
            record(2021, "mumbai", 400.0),
        ];

        let matched = filter_by_area("pune", &records);
        assert_eq!(matched.len(), 2);
        for r in matched {
            assert_eq!(r.location_key(), "pune");
        }
    }

    #[test]
    fn missing_location_matches_nothing() {
        let records = vec![RawRecord::default()];
        assert!(filter_by_area("pune", &records).is_empty());
    }

    #[test]
    fn axis_is_sorted_and_deduplicated() {
        let records: Vec<RawRecord> = [2021, 2019, 2021, 2020]
            .iter()
            .map(|y| record(*y, "x", 0.0))
            .collect();
        assert_eq!(year_axis(&records), vec![2019, 2020, 2021]);
    }

    #[test]
    fn axis_covers_unmatched_areas_too() {
        let records = vec![record(2019, "pune", 1.0), record(2021, "mumbai", 2.0)];
        let chart = SeriesBuilder::new().build(&["pune".to_string()], &records);
        assert_eq!(chart.axis, vec![2019, 2021]);
    }

    #[test]
    fn series_follow_query_order_with_duplicates() {
        let records = vec![record(2019, "pune", 1.0)];
        let areas = vec!["mumbai".to_string(), "pune".to_string(), "mumbai".to_string()];
        let chart = SeriesBuilder::new().build(&areas, &records);

        let labels: Vec<&str> = chart.series.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["MUMBAI", "PUNE", "MUMBAI"]);
    }

    #[test]
    fn unparseable_price_becomes_zero_point() {
        let rec: RawRecord = serde_json::from_value(json!({
            "year": 2020,
            "final location": "pune",
            "flat - weighted average rate": "missing"
        }))
        .unwrap();

        let chart = SeriesBuilder::new().build(&["pune".to_string()], &[rec]);
        assert_eq!(chart.series[0].points, vec![ChartPoint { year: 2020, price: 0.0 }]);
    }

    #[test]
    fn structurally_idempotent_modulo_color() {
        let records = vec![
            record(2019, "pune", 100.0),
            record(2020, "pune", 200.0),
            record(2020, "mumbai", 900.0),
        ];
        let areas = vec!["pune".to_string(), "mumbai".to_string()];

        let builder = SeriesBuilder::new();
        let a = builder.build(&areas, &records);
        let b = builder.build(&areas, &records);

        assert_eq!(a.axis, b.axis);
        for (x, y) in a.series.iter().zip(&b.series) {
            assert_eq!(x.label, y.label);
            assert_eq!(x.points, y.points);
        }
    }

    #[test]
    fn empty_records_give_empty_chart() {
        let chart = SeriesBuilder::new().build(&["pune".to_string()], &[]);
        assert!(chart.axis.is_empty());
        assert_eq!(chart.series.len(), 1);
        assert!(chart.series[0].points.is_empty());
    }

    #[test]
    fn color_is_hex_rgb() {
        let color = random_color();
        assert_eq!(color.len(), 7);
        assert!(color.starts_with('#'));
        assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()));
    }
}
