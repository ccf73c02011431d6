use clap::Parser;
use text_scrub::app::report::{print_summaries, report_failure};
use text_scrub::config::cli::{DEFAULT_REMOVER_INPUT, DEFAULT_REMOVER_OUTPUT};
use text_scrub::utils::{logger, validation::Validate};
use text_scrub::{run_job, JobSpec, LocalStorage, DEFAULT_LINE_CAP};

/// Copy a text file without its empty lines.
#[derive(Parser)]
#[command(name = "empty-line-remover")]
struct Args {
    /// File to read
    #[arg(short, long, default_value = DEFAULT_REMOVER_INPUT)]
    input: String,

    /// File to create or overwrite
    #[arg(short, long, default_value = DEFAULT_REMOVER_OUTPUT)]
    output: String,

    /// Maximum number of input lines to read
    #[arg(long, default_value_t = DEFAULT_LINE_CAP)]
    max_lines: usize,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Print the run summary as JSON
    #[arg(long)]
    json: bool,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.log_json {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    let job = JobSpec::strip_empty("empty-line-remover", args.input, args.output, args.max_lines);
    if let Err(e) = job.validate() {
        report_failure(&e);
        std::process::exit(1);
    }

    match run_job(LocalStorage::working_dir(), job, false).await {
        Ok(summary) => print_summaries(std::slice::from_ref(&summary), args.json)?,
        Err(e) => {
            report_failure(&e);
            std::process::exit(1);
        }
    }

    Ok(())
}
