use std::path::{Path, PathBuf};

use super::classify::{self, Kind};
use super::transform::{self, CleanStats, EofNotice};
use crate::common::config::CleanConfig;
use crate::common::errors::CleanError;

/// A text file that went through the cleaner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedFile {
    pub stats: CleanStats,
    pub notices: Vec<EofNotice>,
    /// Whether the cleaned bytes differ from what was on disk
    pub changed: bool,
    /// Whether the new contents were written back
    pub written: bool,
}

/// What happened to one path
#[derive(Debug)]
pub enum FileOutcome {
    Cleaned(CleanedFile),
    /// Missing, unstattable, or not a regular file
    NotRegular,
    Binary,
    /// Read or write failed part way; the file may be in any state
    Failed(CleanError),
}

impl FileOutcome {
    /// Counts to report for this file (zero unless it was cleaned)
    pub fn stats(&self) -> CleanStats {
        match self {
            FileOutcome::Cleaned(file) => file.stats,
            _ => CleanStats::default(),
        }
    }
}

/// Totals from a batch run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CleanReport {
    pub stats: CleanStats,
    pub files_cleaned: usize,
    /// Cleaned files whose new contents were written back
    pub files_written: usize,
    pub files_skipped: usize,
    pub files_failed: usize,
}

impl CleanReport {
    pub fn record(&mut self, outcome: &FileOutcome) {
        self.stats += outcome.stats();
        match outcome {
            FileOutcome::Cleaned(file) => {
                self.files_cleaned += 1;
                if file.written {
                    self.files_written += 1;
                }
            }
            FileOutcome::NotRegular | FileOutcome::Binary => self.files_skipped += 1,
            FileOutcome::Failed(_) => self.files_failed += 1,
        }
    }
}

/// `metadata` follows symlinks; any error means "not regular"
pub fn is_regular(path: &Path) -> bool {
    std::fs::metadata(path)
        .map(|meta| meta.is_file())
        .unwrap_or(false)
}

/// Clean one file in place.
///
/// The file is read once; the classifier looks at the loaded prefix and
/// the same buffer feeds the transforms. Writing truncates and overwrites
/// the original, so a failed write can leave it partially written.
pub fn process_file(path: &Path, config: &CleanConfig) -> FileOutcome {
    if !is_regular(path) {
        tracing::debug!("{} is not a regular file", path.display());
        return FileOutcome::NotRegular;
    }

    let contents = match std::fs::read(path) {
        Ok(contents) => contents,
        Err(e) => {
            let err = CleanError::io(path, e);
            tracing::warn!("{}", err);
            return FileOutcome::Failed(err);
        }
    };

    if classify::classify(&contents) == Kind::Binary {
        tracing::debug!("{} looks binary", path.display());
        return FileOutcome::Binary;
    }

    match clean_contents(path, &contents, config) {
        Ok(file) => FileOutcome::Cleaned(file),
        Err(err) => {
            tracing::warn!("{}", err);
            FileOutcome::Failed(err)
        }
    }
}

fn clean_contents(
    path: &Path,
    contents: &[u8],
    config: &CleanConfig,
) -> Result<CleanedFile, CleanError> {
    let text = std::str::from_utf8(contents).map_err(|e| CleanError::InvalidUtf8 {
        path: path.to_path_buf(),
        offset: e.valid_up_to(),
    })?;

    let cleaned = transform::clean_text(text, config);
    let changed = cleaned.text.as_bytes() != contents;
    let write = changed && !config.dry_run;

    tracing::debug!(
        "{}: {} trimmed, {} tab-adjusted, changed={}, dry_run={}",
        path.display(),
        cleaned.stats.trimmed,
        cleaned.stats.tabs,
        changed,
        config.dry_run
    );

    if write {
        std::fs::write(path, cleaned.text.as_bytes()).map_err(|e| CleanError::io(path, e))?;
    }

    Ok(CleanedFile {
        stats: cleaned.stats,
        notices: cleaned.notices,
        changed,
        written: write,
    })
}

/// Clean every path in order, handing each outcome to `on_file` as soon
/// as that file is done. Nothing here is fatal.
pub fn clean_files<F>(paths: &[PathBuf], config: &CleanConfig, mut on_file: F) -> CleanReport
where
    F: FnMut(&Path, &FileOutcome),
{
    let mut report = CleanReport::default();
    for path in paths {
        let outcome = process_file(path, config);
        on_file(path, &outcome);
        report.record(&outcome);
    }
    report
}
