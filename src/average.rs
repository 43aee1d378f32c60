//! Arithmetic mean over a window snapshot, plus its wire formatting.

/// Arithmetic mean of `values`, or `None` when the slice is empty.
///
/// The empty case is explicit rather than a silent `0.0`; callers decide
/// how an empty window renders.
pub fn average(values: &[i64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: f64 = values.iter().map(|&v| v as f64).sum();
    Some(sum / values.len() as f64)
}

/// Two-decimal display form used on the wire. An empty window renders as
/// `"NaN"` rather than `"0.00"`, so a never-filled window stays
/// distinguishable to clients.
pub fn format_average(avg: Option<f64>) -> String {
    match avg {
        Some(v) => format!("{v:.2}"),
        None => "NaN".to_string(),
    }
}
