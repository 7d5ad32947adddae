use codemin_minifier::{BatchReport, FileStats};
use serde::Serialize;

/// JSON body printed by `codemin minify --json`
#[derive(Debug, Serialize)]
pub struct MinifyOutput {
    pub content: String,
    pub original_size: usize,
    pub minified_size: usize,

    /// Percent of bytes removed, rounded to two decimals
    pub reduction_percentage: Option<f64>,
    pub files: Vec<FileStats>,

    /// Paths with an unsupported extension
    pub skipped_files: Vec<String>,
    pub unreadable: Vec<String>,
}

impl MinifyOutput {
    pub fn new(report: BatchReport, skipped_files: Vec<String>) -> Self {
        let reduction_percentage = report
            .reduction_percentage()
            .map(|pct| (pct * 100.0).round() / 100.0);
        Self {
            content: report.content,
            original_size: report.original_size,
            minified_size: report.minified_size,
            reduction_percentage,
            files: report.files,
            skipped_files,
            unreadable: report.unreadable,
        }
    }
}

/// One-line summary written to stderr after a plain-text minify
pub fn render_summary(output: &MinifyOutput) -> String {
    let reduction = output
        .reduction_percentage
        .map_or_else(|| "n/a".to_string(), |pct| format!("{pct:.2}%"));
    let mut line = format!(
        "Minified {} file(s): {} -> {} bytes ({} smaller)",
        output.files.len(),
        output.original_size,
        output.minified_size,
        reduction
    );
    if !output.skipped_files.is_empty() {
        line.push_str(&format!(", {} skipped", output.skipped_files.len()));
    }
    if !output.unreadable.is_empty() {
        line.push_str(&format!(", {} unreadable", output.unreadable.len()));
    }
    line
}
