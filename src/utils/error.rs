use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrubError {
    #[error("Cannot read source '{path}': {source}")]
    SourceRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write destination '{path}': {source}")]
    DestinationWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Input error: {message}")]
    InputError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Source,
    Destination,
    Io,
    Configuration,
    Input,
}

impl ScrubError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ScrubError::SourceRead { .. } => ErrorCategory::Source,
            ScrubError::DestinationWrite { .. } => ErrorCategory::Destination,
            ScrubError::IoError(_) | ScrubError::SerializationError(_) => ErrorCategory::Io,
            ScrubError::ConfigParseError { .. }
            | ScrubError::InvalidConfigValueError { .. }
            | ScrubError::MissingConfigError { .. } => ErrorCategory::Configuration,
            ScrubError::InputError { .. } => ErrorCategory::Input,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ScrubError::SourceRead { path, source } => match source.kind() {
                std::io::ErrorKind::NotFound => format!("Input file not found: {}", path),
                std::io::ErrorKind::InvalidData => {
                    format!("Input file is not valid UTF-8 text: {}", path)
                }
                _ => format!("Could not read input file {}: {}", path, source),
            },
            ScrubError::DestinationWrite { path, source } => {
                format!("Could not write output file {}: {}", path, source)
            }
            ScrubError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            ScrubError::MissingConfigError { field } => {
                format!("Missing setting '{}'", field)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Source => "Check that the input path exists and is readable text",
            ErrorCategory::Destination => {
                "Check that the output directory exists and is writable"
            }
            ErrorCategory::Io => "Check disk space and file permissions, then retry",
            ErrorCategory::Configuration => "Fix the configuration value and run again",
            ErrorCategory::Input => "Provide both file paths when prompted",
        }
    }
}

pub type Result<T> = std::result::Result<T, ScrubError>;
