use crate::core::lines::{split_lines, LineReader};
use crate::core::{FilterOutput, FilterReport, LineFilter};
use crate::utils::error::Result;
use std::io::BufRead;

pub const FILTER_NAME: &str = "strip-empty-lines";

/// Lines read before the remover stops.
pub const DEFAULT_LINE_CAP: usize = 100_000;

/// Drops zero-length lines and copies every other line verbatim.
///
/// Whitespace-only lines are kept. At most `line_cap` lines are read; input
/// past the cap is never decoded.
#[derive(Debug, Clone, Copy)]
pub struct EmptyLineRemover {
    line_cap: usize,
}

impl EmptyLineRemover {
    pub fn new(line_cap: usize) -> Self {
        Self { line_cap }
    }

    pub fn line_cap(&self) -> usize {
        self.line_cap
    }
}

impl Default for EmptyLineRemover {
    fn default() -> Self {
        Self::new(DEFAULT_LINE_CAP)
    }
}

impl LineFilter for EmptyLineRemover {
    fn name(&self) -> &'static str {
        FILTER_NAME
    }

    fn apply(&self, reader: &mut dyn BufRead) -> Result<FilterOutput> {
        let mut text = String::new();
        let mut report = FilterReport {
            filter: FILTER_NAME.to_string(),
            ..FilterReport::default()
        };

        for line in LineReader::new(&mut *reader).take(self.line_cap) {
            let line = line?;
            report.lines_read += 1;

            if line.is_empty() {
                report.lines_skipped += 1;
                continue;
            }
            text.push_str(&line);
            text.push('\n');
            report.lines_written += 1;
        }

        report.truncated = !reader.fill_buf()?.is_empty();
        report.bytes_written = text.len();

        if report.truncated {
            tracing::warn!(
                "Line cap of {} reached; remaining input was not processed",
                self.line_cap
            );
        }
        tracing::debug!(
            "Kept {} of {} lines ({} empty)",
            report.lines_written,
            report.lines_read,
            report.lines_skipped
        );

        Ok(FilterOutput { text, report })
    }
}

/// Removes empty lines from an in-memory text.
pub fn strip_empty_lines(text: &str, line_cap: usize) -> String {
    split_lines(text)
        .take(line_cap)
        .filter(|line| !line.is_empty())
        .fold(String::new(), |mut acc, line| {
            acc.push_str(line);
            acc.push('\n');
            acc
        })
}
