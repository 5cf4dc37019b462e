use std::path::PathBuf;

/// Custom error types for tidyspace operations.
/// We use `anyhow` at the top level for CLI error handling,
/// but these typed errors let the cleaner be precise about failures.
#[derive(Debug, thiserror::Error)]
pub enum CleanError {
    /// File system operation failed
    #[error("I/O error at '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Classified as text, but the bytes past the sniffed prefix are not UTF-8
    #[error("'{}' is not valid UTF-8 (first bad byte at offset {offset})", path.display())]
    InvalidUtf8 { path: PathBuf, offset: usize },

    /// Both `-e` and `-c` were requested
    #[error("Can't contract and expand tabs.")]
    ConflictingIndentModes,
}

impl CleanError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CleanError::Io {
            path: path.into(),
            source,
        }
    }

    /// Short reason shown next to a "Couldn't clean" line
    pub fn reason(&self) -> String {
        match self {
            CleanError::Io { source, .. } => source.to_string(),
            CleanError::InvalidUtf8 { offset, .. } => {
                format!("invalid UTF-8 at byte {}", offset)
            }
            CleanError::ConflictingIndentModes => self.to_string(),
        }
    }
}
