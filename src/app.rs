// One analyze cycle: fetch, transform, replace the view state.

use crate::analyzer::SeriesBuilder;
use crate::fetcher::{FetchRequest, Fetcher};
use crate::parser::PayloadParser;
use crate::query;
use crate::session::{Session, ViewState};
use crate::table;

use chrono::Utc;
use tracing::{info, warn};

pub const EMPTY_QUERY_MESSAGE: &str = "Please enter at least one location.";
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching data from backend.";
pub const DEFAULT_SUMMARY: &str = "Analysis completed.";

/// Runs the full fetch-then-transform cycle for one query and replaces
/// the session's view state with the result. Never returns an error:
/// every failure path ends in a state replacement plus a one-line
/// summary for the user.
pub async fn analyze<F: Fetcher + ?Sized>(fetcher: &F, session: &mut Session, raw_query: &str) {
    let token = session.begin();

    if query::is_blank(raw_query) {
        info!("Empty query, skipping fetch");
        session.apply_summary(token, EMPTY_QUERY_MESSAGE);
        return;
    }

    info!("Fetching records for '{}'...", raw_query);
    let request = FetchRequest {
        query: raw_query.to_string(),
    };
    let body = match fetcher.fetch(&request).await {
        Ok(body) => body,
        Err(e) => {
            warn!("Fetch error: {e}");
            session.apply(token, ViewState::message(FETCH_ERROR_MESSAGE));
            return;
        }
    };

    let payload = PayloadParser::new().parse(&body);
    info!("Parsed {} records", payload.records.len());

    let areas = query::parse_areas(raw_query);
    let chart = SeriesBuilder::new().build(&areas, &payload.records);
    let table = table::project_rows(&payload.records);
    let summary = payload
        .summary
        .unwrap_or_else(|| DEFAULT_SUMMARY.to_string());

    if !session.apply(
        token,
        ViewState {
            summary,
            table,
            chart,
            updated_at: Utc::now(),
        },
    ) {
        info!("Discarding superseded response for '{}'", raw_query);
    }
}
