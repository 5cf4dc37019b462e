use colored::*;
use std::path::Path;

use crate::cleaner::{CleanReport, EofNotice, FileOutcome};
use crate::common::format::{self, format_fixed};

/// Print everything there is to say about one processed file:
/// skip/failure notices, end-of-file notices, then the "Fixed" line.
pub fn print_file_outcome(path: &Path, outcome: &FileOutcome) {
    match outcome {
        FileOutcome::NotRegular => {
            println!("{}", format!("Couldn't clean {}", path.display()).yellow());
        }
        FileOutcome::Binary => {
            println!("{}", format!("Didn't clean binary file {}", path.display()).dimmed());
        }
        FileOutcome::Failed(err) => {
            println!(
                "{}",
                format!("Couldn't clean {}: {}", path.display(), err.reason()).red()
            );
        }
        FileOutcome::Cleaned(file) => {
            for notice in &file.notices {
                println!("{}", format_notice(path, notice).cyan());
            }
        }
    }
    println!("{}", format_fixed(&outcome.stats(), Some(path)));
}

fn format_notice(path: &Path, notice: &EofNotice) -> String {
    match notice {
        EofNotice::AddedTrailingNewline => {
            format!("Added trailing newline to {}", path.display())
        }
        EofNotice::RemovedBlankLines(n) => format!(
            "Removed {} from {}",
            format::format_count(*n, "trailing blank line"),
            path.display()
        ),
    }
}

/// Aggregate line printed after all files
pub fn print_summary(report: &CleanReport, dry_run: bool) {
    println!("{}", format_fixed(&report.stats, None).bold());
    println!("{}", format::format_file_counts(report).dimmed());
    if dry_run {
        println!("{}", "Dry run: no files were modified.".dimmed());
    }
}

pub fn print_no_files() {
    println!("No files to work on.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_notice() {
        let path = Path::new("a.txt");
        assert_eq!(
            format_notice(path, &EofNotice::AddedTrailingNewline),
            "Added trailing newline to a.txt"
        );
        assert_eq!(
            format_notice(path, &EofNotice::RemovedBlankLines(1)),
            "Removed 1 trailing blank line from a.txt"
        );
        assert_eq!(
            format_notice(path, &EofNotice::RemovedBlankLines(3)),
            "Removed 3 trailing blank lines from a.txt"
        );
    }
}
