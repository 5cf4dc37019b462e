use crate::cli::args::Cli;
use crate::common::errors::CleanError;

/// Tab width used when `-ts` is not given
pub const DEFAULT_TAB_SIZE: usize = 4;

/// Leading-whitespace conversion applied to every line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndentMode {
    /// Leave indentation alone
    #[default]
    Keep,
    /// Leading tabs become `tab_size` spaces
    Expand,
    /// Leading runs of `tab_size` spaces become tabs
    Contract,
}

impl std::fmt::Display for IndentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndentMode::Keep => write!(f, "keep"),
            IndentMode::Expand => write!(f, "expand"),
            IndentMode::Contract => write!(f, "contract"),
        }
    }
}

/// What to do with the end of the file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EofPolicy {
    /// Drop every blank line at the end of the file
    pub strip_trailing_blank: bool,
    /// Report files that were missing their final newline
    pub ensure_trailing_newline: bool,
}

/// Cleaning options, built once from the command line and passed
/// explicitly to every stage of the cleaner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanConfig {
    pub indent: IndentMode,
    pub tab_size: usize,
    pub eof: EofPolicy,
    /// Compute and report counts without writing anything
    pub dry_run: bool,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            indent: IndentMode::Keep,
            tab_size: DEFAULT_TAB_SIZE,
            eof: EofPolicy::default(),
            dry_run: false,
        }
    }
}

impl CleanConfig {
    /// Pick the indentation mode from the two mutually exclusive flags
    pub fn indent_mode(expand: bool, contract: bool) -> Result<IndentMode, CleanError> {
        match (expand, contract) {
            (true, true) => Err(CleanError::ConflictingIndentModes),
            (true, false) => Ok(IndentMode::Expand),
            (false, true) => Ok(IndentMode::Contract),
            (false, false) => Ok(IndentMode::Keep),
        }
    }

    /// Validate parsed arguments into a config
    pub fn from_cli(cli: &Cli) -> Result<Self, CleanError> {
        Ok(Self {
            indent: Self::indent_mode(cli.expand, cli.contract)?,
            tab_size: cli.tab_size as usize,
            eof: EofPolicy {
                strip_trailing_blank: cli.strip_trailing_blank,
                ensure_trailing_newline: cli.ensure_trailing_newline,
            },
            dry_run: cli.dry_run,
        })
    }
}
