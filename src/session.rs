// Session-scoped view state with stale-response protection.

use crate::model::{ChartData, DisplayRow};
use chrono::{DateTime, Utc};

/// The three view slots the UI renders from. Always replaced as a
/// whole, never merged.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub summary: String,
    pub table: Vec<DisplayRow>,
    pub chart: ChartData,
    pub updated_at: DateTime<Utc>,
}

impl ViewState {
    pub fn message(summary: &str) -> Self {
        Self {
            summary: summary.to_string(),
            table: Vec::new(),
            chart: ChartData::default(),
            updated_at: Utc::now(),
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::message("")
    }
}

/// Holds the current view state plus a generation counter. Each
/// analyze cycle takes a token from `begin()`; a response may only be
/// applied while its token is still the latest, so an overlapping
/// request that resolves late cannot clobber newer results.
#[derive(Debug, Default)]
pub struct Session {
    generation: u64,
    state: ViewState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Replaces the full view state. Returns false (and changes
    /// nothing) when the token has been superseded.
    pub fn apply(&mut self, token: u64, state: ViewState) -> bool {
        if token != self.generation {
            return false;
        }
        self.state = state;
        true
    }

    /// Replaces only the summary line. Used by the empty-query
    /// short-circuit, which leaves the last table and chart in place.
    pub fn apply_summary(&mut self, token: u64, summary: &str) -> bool {
        if token != self.generation {
            return false;
        }
        self.state.summary = summary.to_string();
        self.state.updated_at = Utc::now();
        true
    }

    pub fn view(&self) -> &ViewState {
        &self.state
    }
}
