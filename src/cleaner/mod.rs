pub mod classify;
pub mod engine;
pub mod transform;

pub use classify::{classify, is_text, Kind};
pub use engine::{clean_files, process_file, CleanReport, CleanedFile, FileOutcome};
pub use transform::{clean_text, CleanStats, CleanedText, EofNotice};
