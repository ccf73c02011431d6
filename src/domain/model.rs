use serde::Serialize;

/// Raw bytes of a source file. Lines are decoded lazily by the filter.
#[derive(Debug, Clone)]
pub struct SourceText {
    pub path: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterReport {
    pub filter: String,
    pub lines_read: usize,
    pub lines_written: usize,
    pub lines_skipped: usize,
    /// Unread input remained when the line cap stopped processing.
    pub truncated: bool,
    pub bytes_written: usize,
}

#[derive(Debug, Clone)]
pub struct FilterOutput {
    pub text: String,
    pub report: FilterReport,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub job: String,
    pub source_path: String,
    pub output_path: String,
    #[serde(flatten)]
    pub report: FilterReport,
}
