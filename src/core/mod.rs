pub mod collapse;
pub mod empty_lines;
pub mod engine;
pub mod lines;
pub mod pipeline;

pub use crate::domain::model::{FilterOutput, FilterReport, RunSummary, SourceText};
pub use crate::domain::ports::{ConfigProvider, LineFilter, Pipeline, Storage};
pub use crate::utils::error::Result;
pub use collapse::WhitespaceCollapser;
pub use empty_lines::{EmptyLineRemover, DEFAULT_LINE_CAP};
