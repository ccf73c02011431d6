use crate::domain::model::{FilterOutput, SourceText};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::io::BufRead;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn job_name(&self) -> &str;
    fn source_path(&self) -> &str;
    fn destination_path(&self) -> &str;
}

/// A single-pass transformation from input lines to output text.
pub trait LineFilter: Send + Sync {
    fn name(&self) -> &'static str;
    fn apply(&self, reader: &mut dyn BufRead) -> Result<FilterOutput>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    fn job_name(&self) -> &str;
    async fn extract(&self) -> Result<SourceText>;
    async fn transform(&self, source: SourceText) -> Result<FilterOutput>;
    async fn load(&self, output: FilterOutput) -> Result<String>;
}
