use std::path::Path;

use crate::cleaner::{CleanReport, CleanStats};

/// Append an "s" unless there is exactly one
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

/// "N line(s)" style count
pub fn format_count(count: usize, word: &str) -> String {
    format!("{} {}", count, pluralize(word, count))
}

/// The per-file / summary line: `Fixed 3 lines and 1 tab in foo.c`.
/// The tab clause only appears when tabs were adjusted, the file
/// clause only when a path is given.
pub fn format_fixed(stats: &CleanStats, path: Option<&Path>) -> String {
    let mut line = format!("Fixed {}", format_count(stats.trimmed, "line"));
    if stats.tabs > 0 {
        line.push_str(&format!(" and {}", format_count(stats.tabs, "tab")));
    }
    if let Some(path) = path {
        line.push_str(&format!(" in {}", path.display()));
    }
    line
}

/// File tally under the summary: `3 files: 2 cleaned (1 rewritten), 1 skipped, 0 failed`
pub fn format_file_counts(report: &CleanReport) -> String {
    let total = report.files_cleaned + report.files_skipped + report.files_failed;
    format!(
        "{}: {} cleaned ({} rewritten), {} skipped, {} failed",
        format_count(total, "file"),
        report.files_cleaned,
        report.files_written,
        report.files_skipped,
        report.files_failed
    )
}
