use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunRecord {
    pub strategy: &'static str,
    pub label: &'static str,
    /// Mean over all repeats, in whole microseconds.
    pub micros: u128,
    pub best_micros: u128,
    pub repeats: usize,
    pub matches_reference: bool,
}

/// `"<label>: <N> microseconds"`, label padded to `label_width`.
pub fn format_line(record: &RunRecord, label_width: usize) -> String {
    format!(
        "{:<label_width$}: {} microseconds",
        record.label, record.micros
    )
}

/// One line per record, labels aligned on the longest one.
pub fn format_report(records: &[RunRecord]) -> Vec<String> {
    let width = records.iter().map(|r| r.label.len()).max().unwrap_or(0);
    records.iter().map(|r| format_line(r, width)).collect()
}
