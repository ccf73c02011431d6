pub mod jobs;
pub mod report;

pub use jobs::{run_job, run_jobs};
