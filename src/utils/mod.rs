pub mod error;
pub mod logger;
pub mod monitor;
pub mod prompt;
pub mod validation;
