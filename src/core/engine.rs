use crate::core::{Pipeline, RunSummary};
use crate::utils::error::Result;
use crate::utils::monitor::ProcessMonitor;

pub struct ScrubEngine<P: Pipeline> {
    pipeline: P,
    monitor: ProcessMonitor,
}

impl<P: Pipeline> ScrubEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: ProcessMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<RunSummary> {
        let job = self.pipeline.job_name().to_string();
        tracing::info!("Starting job '{}'", job);

        let source = self.pipeline.extract().await?;
        let source_path = source.path.clone();
        tracing::info!("Read {} bytes from {}", source.bytes.len(), source_path);
        self.monitor.log_phase("read");

        let output = self.pipeline.transform(source).await?;
        let report = output.report.clone();
        tracing::info!(
            "{}: {} lines read, {} written, {} skipped",
            report.filter,
            report.lines_read,
            report.lines_written,
            report.lines_skipped
        );
        self.monitor.log_phase("filter");

        let output_path = self.pipeline.load(output).await?;
        tracing::info!("Wrote {} bytes to {}", report.bytes_written, output_path);
        self.monitor.log_phase("write");
        self.monitor.log_final();

        Ok(RunSummary {
            job,
            source_path,
            output_path,
            report,
        })
    }
}
