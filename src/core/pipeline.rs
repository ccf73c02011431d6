use crate::core::{ConfigProvider, FilterOutput, LineFilter, Pipeline, SourceText, Storage};
use crate::utils::error::{Result, ScrubError};
use std::io::Cursor;

/// Reads one file through a [`Storage`], runs a [`LineFilter`] over it and
/// writes the result to the destination.
pub struct FilterPipeline<S: Storage, F: LineFilter, C: ConfigProvider> {
    storage: S,
    filter: F,
    config: C,
}

impl<S: Storage, F: LineFilter, C: ConfigProvider> FilterPipeline<S, F, C> {
    pub fn new(storage: S, filter: F, config: C) -> Self {
        Self {
            storage,
            filter,
            config,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, F: LineFilter, C: ConfigProvider> Pipeline for FilterPipeline<S, F, C> {
    fn job_name(&self) -> &str {
        self.config.job_name()
    }

    async fn extract(&self) -> Result<SourceText> {
        let path = self.config.source_path();
        tracing::debug!("Reading source: {}", path);

        let bytes = self
            .storage
            .read_file(path)
            .await
            .map_err(|e| match e {
                ScrubError::IoError(source) => ScrubError::SourceRead {
                    path: path.to_string(),
                    source,
                },
                other => other,
            })?;

        tracing::debug!("Read {} bytes from {}", bytes.len(), path);
        Ok(SourceText {
            path: path.to_string(),
            bytes,
        })
    }

    async fn transform(&self, source: SourceText) -> Result<FilterOutput> {
        tracing::debug!("Applying {} to {}", self.filter.name(), source.path);

        let mut reader = Cursor::new(source.bytes);
        self.filter.apply(&mut reader).map_err(|e| match e {
            ScrubError::IoError(io) => ScrubError::SourceRead {
                path: source.path.clone(),
                source: io,
            },
            other => other,
        })
    }

    async fn load(&self, output: FilterOutput) -> Result<String> {
        let path = self.config.destination_path();
        tracing::debug!("Writing {} bytes to {}", output.text.len(), path);

        self.storage
            .write_file(path, output.text.as_bytes())
            .await
            .map_err(|e| match e {
                ScrubError::IoError(source) => ScrubError::DestinationWrite {
                    path: path.to_string(),
                    source,
                },
                other => other,
            })?;

        Ok(path.to_string())
    }
}
