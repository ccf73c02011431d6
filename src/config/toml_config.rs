use crate::config::{FilterKind, JobSpec};
use crate::core::DEFAULT_LINE_CAP;
use crate::utils::error::{Result, ScrubError};
use crate::utils::validation::{validate_positive_number, validate_unique, Validate};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Deserialize)]
pub struct TomlConfig {
    pub settings: Option<SettingsConfig>,
    #[serde(default)]
    pub jobs: Vec<JobSpec>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsConfig {
    pub monitor: Option<bool>,
    pub log_level: Option<String>,
    pub default_max_lines: Option<usize>,
}

fn env_reference() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("env reference pattern should be valid"))
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| ScrubError::SourceRead {
            path: path.as_ref().display().to_string(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ScrubError::ConfigParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${NOTES_DIR})，未定義者保留原樣
    fn substitute_env_vars(content: &str) -> String {
        env_reference()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.settings
            .as_ref()
            .and_then(|s| s.monitor)
            .unwrap_or(false)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.settings.as_ref().and_then(|s| s.log_level.as_deref())
    }

    pub fn default_max_lines(&self) -> usize {
        self.settings
            .as_ref()
            .and_then(|s| s.default_max_lines)
            .unwrap_or(DEFAULT_LINE_CAP)
    }

    /// Jobs with the settings-level line cap filled in.
    pub fn resolved_jobs(&self) -> Vec<JobSpec> {
        let default_cap = self.default_max_lines();
        self.jobs
            .iter()
            .cloned()
            .map(|mut job| {
                if job.filter == FilterKind::StripEmptyLines && job.max_lines.is_none() {
                    job.max_lines = Some(default_cap);
                }
                job
            })
            .collect()
    }

    pub fn validate_config(&self) -> Result<()> {
        if self.jobs.is_empty() {
            return Err(ScrubError::MissingConfigError {
                field: "jobs".to_string(),
            });
        }

        if let Some(cap) = self.settings.as_ref().and_then(|s| s.default_max_lines) {
            validate_positive_number("settings.default_max_lines", cap, 1)?;
        }

        for (index, job) in self.jobs.iter().enumerate() {
            job.validate_as(&format!("jobs[{}]", index))?;
        }

        validate_unique("jobs.name", self.jobs.iter().map(|job| job.name.as_str()))
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
