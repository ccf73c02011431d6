use crate::config::JobSpec;
use crate::core::DEFAULT_LINE_CAP;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Args, Parser, Subcommand};

pub const DEFAULT_REMOVER_INPUT: &str = "../Text-Files/Input.txt";
pub const DEFAULT_REMOVER_OUTPUT: &str = "../Text-Files/Output.txt";

#[derive(Debug, Clone, Parser)]
#[command(name = "text-scrub")]
#[command(about = "Collapse whitespace or strip empty lines from text files")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log process CPU and memory after each phase")]
    pub monitor: bool,

    #[arg(long, global = true, help = "Print the run summary as JSON on stdout")]
    pub json: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Join non-blank lines into one line with single spaces
    Collapse(CollapseArgs),
    /// Copy every non-empty line, up to a line cap
    StripEmpty(StripEmptyArgs),
}

#[derive(Debug, Clone, Args)]
pub struct CollapseArgs {
    /// File to read
    pub input: String,
    /// File to create or overwrite
    pub output: String,
}

#[derive(Debug, Clone, Args)]
pub struct StripEmptyArgs {
    /// File to read
    #[arg(default_value = DEFAULT_REMOVER_INPUT)]
    pub input: String,
    /// File to create or overwrite
    #[arg(default_value = DEFAULT_REMOVER_OUTPUT)]
    pub output: String,
    /// Maximum number of input lines to read
    #[arg(long, default_value_t = DEFAULT_LINE_CAP)]
    pub max_lines: usize,
}

impl CliConfig {
    pub fn job(&self) -> JobSpec {
        match &self.command {
            Command::Collapse(args) => JobSpec::collapse("collapse", &args.input, &args.output),
            Command::StripEmpty(args) => {
                JobSpec::strip_empty("strip-empty", &args.input, &args.output, args.max_lines)
            }
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        self.job().validate()
    }
}
