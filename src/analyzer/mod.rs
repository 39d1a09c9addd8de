// Analyzer module: turns filtered records into chart-ready series.

pub mod series;

pub use series::SeriesBuilder;
