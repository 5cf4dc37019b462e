use std::borrow::Cow;
use std::ops::AddAssign;

use crate::common::config::{CleanConfig, IndentMode};

/// Per-file (and, summed, per-run) modification counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanStats {
    /// Lines that lost trailing whitespace
    pub trimmed: usize,
    /// Lines whose indentation was expanded or contracted
    pub tabs: usize,
}

impl CleanStats {
    pub fn is_clean(&self) -> bool {
        self.trimmed == 0 && self.tabs == 0
    }
}

impl AddAssign for CleanStats {
    fn add_assign(&mut self, other: Self) {
        self.trimmed += other.trimmed;
        self.tabs += other.tabs;
    }
}

/// Something the end-of-file policy did to a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EofNotice {
    AddedTrailingNewline,
    RemovedBlankLines(usize),
}

/// Result of cleaning a whole file's text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedText {
    pub text: String,
    pub stats: CleanStats,
    pub notices: Vec<EofNotice>,
}

/// Strip trailing spaces and tabs
pub fn trim_trailing(line: &str) -> &str {
    line.trim_end_matches([' ', '\t'])
}

fn is_blank(line: &str) -> bool {
    trim_trailing(line).is_empty()
}

/// Replace each leading tab with `tab_size` spaces. Scanning stops at the
/// first character that is not a tab; later tabs are kept.
pub fn expand_leading_tabs(line: &str, tab_size: usize) -> String {
    if tab_size == 0 {
        return line.to_string();
    }
    let rest = line.trim_start_matches('\t');
    let spaces = (line.len() - rest.len()) * tab_size;

    let mut out = String::with_capacity(spaces + rest.len());
    out.extend(std::iter::repeat(' ').take(spaces));
    out.push_str(rest);
    out
}

/// Strip leading runs of exactly `tab_size` spaces and put one tab in
/// front for each run removed. A shorter leftover run stays as spaces.
pub fn contract_leading_spaces(line: &str, tab_size: usize) -> String {
    if tab_size == 0 {
        return line.to_string();
    }
    let run = " ".repeat(tab_size);
    let mut rest = line;
    let mut runs = 0;
    while let Some(r) = rest.strip_prefix(run.as_str()) {
        rest = r;
        runs += 1;
    }

    let mut out = String::with_capacity(runs + rest.len());
    out.extend(std::iter::repeat('\t').take(runs));
    out.push_str(rest);
    out
}

/// Apply the configured indentation mode to an already trimmed line
pub fn convert_indent<'a>(line: &'a str, config: &CleanConfig) -> Cow<'a, str> {
    match config.indent {
        IndentMode::Keep => Cow::Borrowed(line),
        IndentMode::Expand => Cow::Owned(expand_leading_tabs(line, config.tab_size)),
        IndentMode::Contract => Cow::Owned(contract_leading_spaces(line, config.tab_size)),
    }
}

/// Drop blank (empty or whitespace-only) lines from the end.
/// Returns how many were removed.
pub fn strip_trailing_blank_lines(lines: &mut Vec<&str>) -> usize {
    let keep = lines
        .iter()
        .rposition(|line| !is_blank(line))
        .map_or(0, |i| i + 1);
    let removed = lines.len() - keep;
    lines.truncate(keep);
    removed
}

/// Clean a file's full text.
///
/// The final newline is chomped before splitting and every output line is
/// terminated with `\n`, so the result always ends with exactly one newline
/// per kept line. Empty input stays empty.
///
/// Stages run in a fixed order: end-of-file policy, trailing trim, then
/// indentation conversion.
pub fn clean_text(contents: &str, config: &CleanConfig) -> CleanedText {
    if contents.is_empty() {
        return CleanedText {
            text: String::new(),
            stats: CleanStats::default(),
            notices: Vec::new(),
        };
    }

    let (body, terminated) = match contents.strip_suffix('\n') {
        Some(body) => (body, true),
        None => (contents, false),
    };
    let mut lines: Vec<&str> = body.split('\n').collect();
    let mut notices = Vec::new();

    let removed = if config.eof.strip_trailing_blank {
        strip_trailing_blank_lines(&mut lines)
    } else {
        0
    };
    // A stripped tail means the kept last line already had its newline
    if config.eof.ensure_trailing_newline && !terminated && removed == 0 {
        notices.push(EofNotice::AddedTrailingNewline);
    }
    if removed > 0 {
        notices.push(EofNotice::RemovedBlankLines(removed));
    }

    let mut stats = CleanStats::default();
    let mut text = String::with_capacity(contents.len() + 1);
    for line in lines {
        let trimmed = trim_trailing(line);
        if trimmed.len() < line.len() {
            stats.trimmed += 1;
        }
        let converted = convert_indent(trimmed, config);
        if converted.len() != trimmed.len() {
            stats.tabs += 1;
        }
        text.push_str(&converted);
        text.push('\n');
    }

    CleanedText {
        text,
        stats,
        notices,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::config::EofPolicy;

    fn config(indent: IndentMode, tab_size: usize) -> CleanConfig {
        CleanConfig {
            indent,
            tab_size,
            ..CleanConfig::default()
        }
    }

    #[test]
    fn test_trim_trailing() {
        assert_eq!(trim_trailing("baz  "), "baz");
        assert_eq!(trim_trailing("foo\t \t"), "foo");
        assert_eq!(trim_trailing("  keep leading"), "  keep leading");
        assert_eq!(trim_trailing(" \t "), "");
    }

    #[test]
    fn test_trim_is_idempotent() {
        for line in ["a  ", "\tb\t", "c", "   ", "d \t e  "] {
            let once = trim_trailing(line);
            assert_eq!(trim_trailing(once), once);
        }
    }

    #[test]
    fn test_expand_only_leading_tabs() {
        assert_eq!(expand_leading_tabs("\t\tx", 4), "        x");
        assert_eq!(expand_leading_tabs("\tx\ty", 2), "  x\ty");
        assert_eq!(expand_leading_tabs(" \tx", 4), " \tx");
        assert_eq!(expand_leading_tabs("x", 4), "x");
    }

    #[test]
    fn test_contract_runs() {
        assert_eq!(contract_leading_spaces("        x", 4), "\t\tx");
        assert_eq!(contract_leading_spaces("      x", 4), "\t  x");
        assert_eq!(contract_leading_spaces("  x", 4), "  x");
        assert_eq!(contract_leading_spaces("\t    x", 4), "\t    x");
        assert_eq!(contract_leading_spaces("", 4), "");
    }

    #[test]
    fn test_zero_tab_size_is_noop() {
        assert_eq!(expand_leading_tabs("\tx", 0), "\tx");
        assert_eq!(contract_leading_spaces("  x", 0), "  x");
    }

    #[test]
    fn test_expand_then_contract_round_trips() {
        for line in ["\tx", "\t\t\ty = 1", "plain", "\t\tmid\ttab"] {
            let expanded = expand_leading_tabs(line, 4);
            assert_eq!(contract_leading_spaces(&expanded, 4), line);
        }
    }

    #[test]
    fn test_strip_trailing_blank_lines() {
        let mut lines = vec!["a", "", "  ", "\t"];
        assert_eq!(strip_trailing_blank_lines(&mut lines), 3);
        assert_eq!(lines, ["a"]);

        let mut lines = vec!["", ""];
        assert_eq!(strip_trailing_blank_lines(&mut lines), 2);
        assert!(lines.is_empty());
    }

    #[test]
    fn test_clean_text_expand_scenario() {
        let cleaned = clean_text("foo\t\t\n    bar\nbaz  \n", &config(IndentMode::Expand, 4));
        assert_eq!(cleaned.text, "foo\n    bar\nbaz\n");
        assert_eq!(cleaned.stats, CleanStats { trimmed: 2, tabs: 0 });
    }

    #[test]
    fn test_clean_text_contract_counts_tabs() {
        let cleaned = clean_text("        x\ny\n", &config(IndentMode::Contract, 4));
        assert_eq!(cleaned.text, "\t\tx\ny\n");
        assert_eq!(cleaned.stats, CleanStats { trimmed: 0, tabs: 1 });
    }

    #[test]
    fn test_clean_text_already_clean() {
        let input = "alpha\n  beta\ngamma\n";
        let cleaned = clean_text(input, &CleanConfig::default());
        assert_eq!(cleaned.text, input);
        assert!(cleaned.stats.is_clean());
        assert!(cleaned.notices.is_empty());
    }

    #[test]
    fn test_clean_text_adds_missing_newline() {
        let cleaned = clean_text("a\nb", &CleanConfig::default());
        assert_eq!(cleaned.text, "a\nb\n");
        assert!(cleaned.notices.is_empty());
    }

    #[test]
    fn test_clean_text_keeps_interior_and_trailing_blank_lines_by_default() {
        let cleaned = clean_text("a\n\nb\n\n\n", &CleanConfig::default());
        assert_eq!(cleaned.text, "a\n\nb\n\n\n");
    }

    #[test]
    fn test_clean_text_empty_input() {
        let cleaned = clean_text("", &config(IndentMode::Expand, 4));
        assert_eq!(cleaned.text, "");
        assert!(cleaned.stats.is_clean());
    }

    #[test]
    fn test_eof_policy_notices() {
        let cfg = CleanConfig {
            eof: EofPolicy {
                strip_trailing_blank: true,
                ensure_trailing_newline: true,
            },
            ..CleanConfig::default()
        };

        let cleaned = clean_text("a\n\n  \n", &cfg);
        assert_eq!(cleaned.text, "a\n");
        assert_eq!(cleaned.notices, [EofNotice::RemovedBlankLines(2)]);

        let cleaned = clean_text("a\nb", &cfg);
        assert_eq!(cleaned.text, "a\nb\n");
        assert_eq!(cleaned.notices, [EofNotice::AddedTrailingNewline]);

        let cleaned = clean_text("a\n", &cfg);
        assert!(cleaned.notices.is_empty());
    }

    #[test]
    fn test_stats_accumulate() {
        let mut total = CleanStats::default();
        total += CleanStats { trimmed: 2, tabs: 1 };
        total += CleanStats { trimmed: 1, tabs: 0 };
        assert_eq!(total, CleanStats { trimmed: 3, tabs: 1 });
    }
}
