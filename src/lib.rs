pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::LocalStorage;
pub use app::{run_job, run_jobs};
pub use config::{toml_config::TomlConfig, FilterKind, JobSpec};
pub use core::collapse::{collapse_line, collapse_text};
pub use core::empty_lines::strip_empty_lines;
pub use core::{
    engine::ScrubEngine, pipeline::FilterPipeline, EmptyLineRemover, WhitespaceCollapser,
    DEFAULT_LINE_CAP,
};
pub use domain::model::{FilterReport, RunSummary};
pub use utils::error::{Result, ScrubError};
