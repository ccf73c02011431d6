use crate::config::{FilterKind, JobSpec};
use crate::core::engine::ScrubEngine;
use crate::core::pipeline::FilterPipeline;
use crate::core::{EmptyLineRemover, RunSummary, Storage, WhitespaceCollapser};
use crate::utils::error::Result;

/// Runs one job end to end against `storage`.
pub async fn run_job<S: Storage>(storage: S, job: JobSpec, monitor: bool) -> Result<RunSummary> {
    match job.filter {
        FilterKind::CollapseWhitespace => {
            let pipeline = FilterPipeline::new(storage, WhitespaceCollapser, job);
            ScrubEngine::new_with_monitoring(pipeline, monitor).run().await
        }
        FilterKind::StripEmptyLines => {
            let remover = EmptyLineRemover::new(job.line_cap());
            let pipeline = FilterPipeline::new(storage, remover, job);
            ScrubEngine::new_with_monitoring(pipeline, monitor).run().await
        }
    }
}

/// Runs jobs in order and stops at the first failure.
pub async fn run_jobs<S: Storage + Clone>(
    storage: S,
    jobs: Vec<JobSpec>,
    monitor: bool,
) -> Result<Vec<RunSummary>> {
    let mut summaries = Vec::with_capacity(jobs.len());
    for job in jobs {
        summaries.push(run_job(storage.clone(), job, monitor).await?);
    }
    Ok(summaries)
}
