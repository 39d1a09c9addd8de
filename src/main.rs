mod analyzer;
mod app;
mod config;
mod export;
mod fetcher;
mod model;
mod parser;
mod query;
mod session;
mod table;

use config::{AppConfig, load_config};
use export::CsvExporter;
use fetcher::BackendClient;
use session::Session;

use std::env;
use std::path::Path;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = match load_config("config.json") {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!("Config load failed ({}), using defaults", e);
            AppConfig::default()
        }
    };

    let raw_query: String = env::args().skip(1).collect::<Vec<_>>().join(" ");

    let client = match BackendClient::new(&config.backend_url) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to build HTTP client: {}", e);
            return;
        }
    };

    info!("Analyzing '{}' against {}", raw_query, config.backend_url);
    let mut session = Session::new();
    app::analyze(&client, &mut session, &raw_query).await;

    render(&session);

    let exporter = CsvExporter::new(config.legacy_csv);
    if let Err(e) = exporter.write_file(&session.view().table, Path::new(&config.csv_path)) {
        warn!("CSV export failed: {}", e);
    }
}

/// Plain-text stand-in for the web UI's summary line, chart and table.
fn render(session: &Session) {
    let view = session.view();

    println!("{}", view.summary);

    if !view.chart.series.is_empty() {
        println!("\nYears: {:?}", view.chart.axis);
        for series in &view.chart.series {
            let points: Vec<String> = series
                .points
                .iter()
                .map(|p| format!("{}={}", p.year, p.price))
                .collect();
            println!("{} [{}]: {}", series.label, series.color_hex, points.join(", "));
        }
    }

    if !view.table.is_empty() {
        println!("\n{:<6} {:<20} {:<12} {:<10} {:<12}", "Year", "Area", "Price", "Demand", "Size (sqft)");
        for row in &view.table {
            println!(
                "{:<6} {:<20} {:<12} {:<10} {:<12}",
                row.year, row.area, row.price, row.demand, row.size_sqft
            );
        }
    }
}
