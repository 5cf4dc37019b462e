use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Largest accepted `-ts`
pub const MAX_TAB_SIZE: u32 = 256;

/// Flags spelled with a single dash but more than one letter.
/// clap only knows them as `--ts` / `--at`.
const SINGLE_DASH_LONG_FLAGS: &[&str] = &["ts", "at"];

/// tidyspace — trim trailing whitespace and fix indentation in place
#[derive(Parser, Debug)]
#[command(
    name = "tidyspace",
    version,
    about = "Trim trailing whitespace and convert indentation in text files",
    long_about = "tidyspace rewrites each FILE in place: trailing spaces and tabs are\n\
                  trimmed from every line, and leading indentation can be expanded\n\
                  to spaces or contracted to tabs. Binary files are left alone.",
    after_help = "EXAMPLES:\n  \
        tidyspace src/*.c                    Trim trailing whitespace\n  \
        tidyspace -e -ts 8 Makefile.inc      Expand leading tabs to 8 spaces\n  \
        tidyspace -c notes.txt               Contract 4-space runs to tabs\n  \
        tidyspace -t -at README              Fix blank lines at end of file\n  \
        tidyspace -n *.txt                   Report without writing"
)]
pub struct Cli {
    /// Expand tabs into spaces
    #[arg(short = 'e', long = "expand")]
    pub expand: bool,

    /// Contract spaces into tabs
    #[arg(short = 'c', long = "contract")]
    pub contract: bool,

    /// Size of tabs
    #[arg(
        long = "ts",
        value_name = "N",
        default_value_t = 4,
        value_parser = clap::value_parser!(u32).range(1..=MAX_TAB_SIZE as i64)
    )]
    pub tab_size: u32,

    /// Strip trailing blank lines
    #[arg(short = 't', long = "strip-trailing")]
    pub strip_trailing_blank: bool,

    /// Ensure the file ends with a single newline
    #[arg(long = "at")]
    pub ensure_trailing_newline: bool,

    /// Report what would change without writing files
    #[arg(long, short = 'n')]
    pub dry_run: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose output
    #[arg(long, short)]
    pub verbose: bool,

    /// Files to clean in place
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

impl Cli {
    /// Parse the process arguments, accepting `-ts 8` and `-at`
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }
}

/// Rewrite Go-style `-ts`/`-at` (and `-ts=8`) into their `--` forms.
/// Everything after a bare `--` is left as is.
pub fn normalize_args<I, S>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut out = Vec::new();
    let mut positional_only = false;

    for arg in args.into_iter().map(Into::into) {
        if positional_only {
            out.push(arg);
            continue;
        }
        let Some(s) = arg.to_str() else {
            out.push(arg);
            continue;
        };
        if s == "--" {
            positional_only = true;
            out.push(arg);
            continue;
        }
        match s.strip_prefix('-') {
            Some(body) if !body.starts_with('-') => {
                let name = body.split('=').next().unwrap_or(body);
                if SINGLE_DASH_LONG_FLAGS.contains(&name) {
                    out.push(OsString::from(format!("--{}", body)));
                } else {
                    out.push(arg);
                }
            }
            _ => out.push(arg),
        }
    }
    out
}
