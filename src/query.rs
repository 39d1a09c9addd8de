// Comma-separated area query normalization

/// Splits the raw query on commas into normalized area keys: trimmed,
/// lower-cased, empty pieces dropped. Order is preserved and duplicates
/// are kept, since each entry becomes its own chart series.
pub fn parse_areas(query: &str) -> Vec<String> {
    query
        .split(',')
        .map(|piece| piece.trim().to_lowercase())
        .filter(|piece| !piece.is_empty())
        .collect()
}

/// True when the query holds nothing usable and the analyze cycle
/// should short-circuit before issuing a request.
pub fn is_blank(query: &str) -> bool {
    query.trim().is_empty()
}
