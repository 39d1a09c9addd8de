// CSV export of the display table.

use crate::model::{DisplayRow, ExportError};

use std::fs;
use std::path::Path;
use tracing::info;

const HEADER: [&str; 5] = ["Year", "Area", "Price", "Demand", "Size (sqft)"];

pub struct CsvExporter {
    /// Verbatim comma-join with no quoting, as the original exporter
    /// produced it. The default quotes fields containing delimiters,
    /// quotes or newlines.
    pub legacy: bool,
}

impl CsvExporter {
    pub fn new(legacy: bool) -> Self {
        Self { legacy }
    }

    /// Renders header plus one line per row. An empty table renders to
    /// nothing at all; no header-only output is ever produced.
    pub fn render(&self, rows: &[DisplayRow]) -> Result<Option<String>, ExportError> {
        if rows.is_empty() {
            return Ok(None);
        }

        let text = if self.legacy {
            self.render_legacy(rows)
        } else {
            self.render_quoted(rows)?
        };
        Ok(Some(text))
    }

    fn render_quoted(&self, rows: &[DisplayRow]) -> Result<String, ExportError> {
        let mut buf = Vec::new();
        {
            let mut wtr = csv::Writer::from_writer(&mut buf);
            wtr.write_record(HEADER)?;
            for row in rows {
                wtr.write_record([
                    &row.year,
                    &row.area,
                    &row.price,
                    &row.demand,
                    &row.size_sqft,
                ])?;
            }
            wtr.flush()?;
        }
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    fn render_legacy(&self, rows: &[DisplayRow]) -> String {
        let mut lines = vec![HEADER.join(",")];
        for row in rows {
            lines.push(format!(
                "{},{},{},{},{}",
                row.year, row.area, row.price, row.demand, row.size_sqft
            ));
        }
        lines.join("\n")
    }

    /// Saves the rendered CSV under the given path. Returns false when
    /// the table was empty and no file was written.
    pub fn write_file(&self, rows: &[DisplayRow], path: &Path) -> Result<bool, ExportError> {
        match self.render(rows)? {
            Some(text) => {
                fs::write(path, text)?;
                info!("Saved CSV export: {}", path.display());
                Ok(true)
            }
            None => {
                info!("Nothing to export, skipping CSV");
                Ok(false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(year: &str, area: &str, price: &str, demand: &str, size: &str) -> DisplayRow {
        DisplayRow {
            year: year.to_string(),
            area: area.to_string(),
            price: price.to_string(),
            demand: demand.to_string(),
            size_sqft: size.to_string(),
        }
    }

    #[test]
    fn empty_rows_render_nothing() {
        assert!(CsvExporter::new(false).render(&[]).unwrap().is_none());
        assert!(CsvExporter::new(true).render(&[]).unwrap().is_none());
    }

    #[test]
    fn single_row_is_header_plus_row() {
        let rows = vec![row("2020", "Pune", "5000", "10", "650")];
        let text = CsvExporter::new(false).render(&rows).unwrap().unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["Year,Area,Price,Demand,Size (sqft)", "2020,Pune,5000,10,650"]);
    }

    #[test]
    fn quoted_mode_escapes_embedded_delimiters() {
        let rows = vec![row("2020", "Pune, West", "5000", "said \"10\"", "650")];
        let text = CsvExporter::new(false).render(&rows).unwrap().unwrap();
        assert!(text.contains("\"Pune, West\""));
        assert!(text.contains("\"said \"\"10\"\"\""));
    }

    #[test]
    fn legacy_mode_joins_verbatim() {
        let rows = vec![row("2020", "Pune, West", "5000", "10", "650")];
        let text = CsvExporter::new(true).render(&rows).unwrap().unwrap();
        assert_eq!(
            text,
            "Year,Area,Price,Demand,Size (sqft)\n2020,Pune, West,5000,10,650"
        );
    }

    #[test]
    fn empty_table_writes_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let wrote = CsvExporter::new(false).write_file(&[], &path).unwrap();
        assert!(!wrote);
        assert!(!path.exists());
    }

    #[test]
    fn non_empty_table_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("realestate_data.csv");
        let rows = vec![row("2020", "Pune", "5000", "10", "650")];
        let wrote = CsvExporter::new(false).write_file(&rows, &path).unwrap();
        assert!(wrote);
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("Year,Area,Price,Demand,Size (sqft)"));
    }
}
