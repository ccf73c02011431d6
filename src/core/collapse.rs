//! Whitespace collapsing.
//!
//! Blank lines are dropped, every surviving line is trimmed and its internal
//! whitespace runs become single spaces, and the survivors are joined with
//! one space. The output always ends with a newline unless nothing survived.

use crate::core::lines::{split_lines, LineReader};
use crate::core::{FilterOutput, FilterReport, LineFilter};
use crate::utils::error::Result;
use regex::Regex;
use std::borrow::Cow;
use std::io::BufRead;
use std::sync::OnceLock;

pub const FILTER_NAME: &str = "collapse-whitespace";

fn whitespace_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\n\t ]+").expect("whitespace pattern should be valid"))
}

fn is_collapsible(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n')
}

/// Normalizes one line, or returns `None` when it is blank.
pub fn collapse_line(line: &str) -> Option<Cow<'_, str>> {
    let trimmed = line.trim_matches(is_collapsible);
    if trimmed.is_empty() {
        return None;
    }
    Some(whitespace_run().replace_all(trimmed, " "))
}

/// Collapses an in-memory text.
pub fn collapse_text(text: &str) -> String {
    let survivors: Vec<_> = split_lines(text).filter_map(collapse_line).collect();
    if survivors.is_empty() {
        return String::new();
    }
    let mut joined = survivors.join(" ");
    joined.push('\n');
    joined
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceCollapser;

impl LineFilter for WhitespaceCollapser {
    fn name(&self) -> &'static str {
        FILTER_NAME
    }

    fn apply(&self, reader: &mut dyn BufRead) -> Result<FilterOutput> {
        let mut text = String::new();
        let mut report = FilterReport {
            filter: FILTER_NAME.to_string(),
            ..FilterReport::default()
        };

        for line in LineReader::new(&mut *reader) {
            let line = line?;
            report.lines_read += 1;

            let Some(collapsed) = collapse_line(&line) else {
                report.lines_skipped += 1;
                continue;
            };

            if report.lines_written > 0 {
                text.push(' ');
            }
            text.push_str(&collapsed);
            report.lines_written += 1;
        }

        if report.lines_written > 0 {
            text.push('\n');
        }
        report.bytes_written = text.len();

        tracing::debug!(
            "Collapsed {} of {} lines ({} blank)",
            report.lines_written,
            report.lines_read,
            report.lines_skipped
        );

        Ok(FilterOutput { text, report })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_collapse_mixed_blank_lines() {
        assert_eq!(collapse_text("a   b\n\n  \nc\td\n"), "a b c d\n");
    }

    #[test]
    fn test_collapse_only_blank_lines_produces_nothing() {
        assert_eq!(collapse_text("\n\n\n"), "");
        assert_eq!(collapse_text(" \t \n\t\n   "), "");
        assert_eq!(collapse_text(""), "");
    }

    #[test]
    fn test_collapse_line() {
        assert_eq!(collapse_line("  hello \t  world  ").as_deref(), Some("hello world"));
        assert_eq!(collapse_line("plain").as_deref(), Some("plain"));
        assert_eq!(collapse_line(" \t "), None);
        assert_eq!(collapse_line(""), None);
    }

    #[test]
    fn test_trailing_blank_lines_still_end_with_newline() {
        assert_eq!(collapse_text("first\nsecond\n\n   \n"), "first second\n");
    }

    #[test]
    fn test_unterminated_last_line_ends_with_newline() {
        assert_eq!(collapse_text("one\n  two  three"), "one two three\n");
    }

    #[test]
    fn test_crlf_input() {
        assert_eq!(collapse_text("a  b\r\n\r\nc\r\n"), "a b c\n");
    }

    #[test]
    fn test_lone_carriage_return_ends_a_line() {
        assert_eq!(collapse_text("a\rb\n"), "a b\n");
        assert_eq!(collapse_text("a \r"), "a\n");

        let mut reader = Cursor::new("a\rb\n\r  \rc");
        let output = WhitespaceCollapser.apply(&mut reader).unwrap();
        assert_eq!(output.text, "a b c\n");
        assert_eq!(output.report.lines_read, 5);
        assert_eq!(output.report.lines_skipped, 2);
    }

    #[test]
    fn test_collapse_is_idempotent() {
        let inputs = [
            "a   b\n\n  \nc\td\n",
            "\t lead\n trail \t\nmid   dle\n",
            "single",
            "a \r",
            "x\r\r y \r\n\tz",
        ];
        for input in inputs {
            let once = collapse_text(input);
            assert_eq!(collapse_text(&once), once, "input: {:?}", input);
        }
    }

    #[test]
    fn test_output_has_no_whitespace_runs() {
        let output = collapse_text("  x \t\t y\n\n\t z  \n w\t\t\n");
        assert_eq!(output, "x y z w\n");

        let body = output.strip_suffix('\n').unwrap();
        assert!(!body.starts_with(' ') && !body.ends_with(' '));
        assert!(!body.contains("  "));
        assert!(!body.contains('\t'));
    }

    #[test]
    fn test_report_counts() {
        let mut reader = Cursor::new("a\n\n b \n\t\n");
        let output = WhitespaceCollapser.apply(&mut reader).unwrap();

        assert_eq!(output.text, "a b\n");
        assert_eq!(output.report.filter, FILTER_NAME);
        assert_eq!(output.report.lines_read, 4);
        assert_eq!(output.report.lines_written, 2);
        assert_eq!(output.report.lines_skipped, 2);
        assert_eq!(output.report.bytes_written, 4);
        assert!(!output.report.truncated);
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let mut reader = Cursor::new(vec![b'o', b'k', b'\n', 0xff, 0xfe, b'\n']);
        assert!(WhitespaceCollapser.apply(&mut reader).is_err());
    }
}
