//! # tidyspace
//!
//! Whitespace normalizer for text files.
//!
//! Each file named on the command line is rewritten in place:
//!
//! - **Trailing whitespace**: spaces and tabs at the end of every line are trimmed
//! - **Indentation**: leading tabs expanded to spaces (`-e`) or leading space runs contracted to tabs (`-c`)
//! - **End of file**: optional stripping of trailing blank lines, always one final newline
//! - **Binary-safe**: files whose first 1024 bytes are not plain text are skipped
//! - **Reporting**: per-file and total counts of trimmed lines and adjusted tabs

pub mod cleaner;
pub mod cli;
pub mod common;
