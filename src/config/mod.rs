#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::{ConfigProvider, DEFAULT_LINE_CAP};
use crate::utils::error::{Result, ScrubError};
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_positive_number, Validate};
use serde::Deserialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterKind {
    CollapseWhitespace,
    StripEmptyLines,
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterKind::CollapseWhitespace => f.write_str(crate::core::collapse::FILTER_NAME),
            FilterKind::StripEmptyLines => f.write_str(crate::core::empty_lines::FILTER_NAME),
        }
    }
}

/// One filter run: which filter, where to read, where to write.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JobSpec {
    pub name: String,
    pub filter: FilterKind,
    pub input: String,
    pub output: String,
    /// Line cap for `strip-empty-lines`.
    pub max_lines: Option<usize>,
}

impl JobSpec {
    pub fn collapse(name: impl Into<String>, input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            filter: FilterKind::CollapseWhitespace,
            input: input.into(),
            output: output.into(),
            max_lines: None,
        }
    }

    pub fn strip_empty(
        name: impl Into<String>,
        input: impl Into<String>,
        output: impl Into<String>,
        max_lines: usize,
    ) -> Self {
        Self {
            name: name.into(),
            filter: FilterKind::StripEmptyLines,
            input: input.into(),
            output: output.into(),
            max_lines: Some(max_lines),
        }
    }

    pub fn line_cap(&self) -> usize {
        self.max_lines.unwrap_or(DEFAULT_LINE_CAP)
    }

    pub(crate) fn validate_as(&self, prefix: &str) -> Result<()> {
        validate_non_empty_string(&format!("{}.name", prefix), &self.name)?;
        validate_path(&format!("{}.input", prefix), &self.input)?;
        validate_path(&format!("{}.output", prefix), &self.output)?;

        if let Some(max_lines) = self.max_lines {
            if self.filter != FilterKind::StripEmptyLines {
                return Err(ScrubError::InvalidConfigValueError {
                    field: format!("{}.max_lines", prefix),
                    value: max_lines.to_string(),
                    reason: format!("max_lines only applies to {}", FilterKind::StripEmptyLines),
                });
            }
            validate_positive_number(&format!("{}.max_lines", prefix), max_lines, 1)?;
        }

        Ok(())
    }
}

impl ConfigProvider for JobSpec {
    fn job_name(&self) -> &str {
        &self.name
    }

    fn source_path(&self) -> &str {
        &self.input
    }

    fn destination_path(&self) -> &str {
        &self.output
    }
}

impl Validate for JobSpec {
    fn validate(&self) -> Result<()> {
        self.validate_as("job")
    }
}
