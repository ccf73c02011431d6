use clap::Parser;
use std::io;
use text_scrub::app::report::{print_summaries, report_failure};
use text_scrub::utils::{logger, prompt::resolve_paths, validation::Validate};
use text_scrub::{run_job, JobSpec, LocalStorage, Result};

/// Collapse whitespace runs and blank lines of a text file into a single line.
///
/// Paths not given as flags are asked for on standard input.
#[derive(Parser)]
#[command(name = "clear-spaces")]
struct Args {
    /// File to read (prompted for when absent)
    #[arg(short, long)]
    input: Option<String>,

    /// File to create or overwrite (prompted for when absent)
    #[arg(short, long)]
    output: Option<String>,

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

    let (source, destination) = {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let resolved: Result<(String, String)> = std::env::current_dir()
            .map_err(Into::into)
            .and_then(|cwd| {
                resolve_paths(
                    args.input.as_deref(),
                    args.output.as_deref(),
                    &cwd,
                    &mut stdin.lock(),
                    &mut stdout.lock(),
                )
            });
        match resolved {
            Ok(paths) => paths,
            Err(e) => {
                report_failure(&e);
                std::process::exit(1);
            }
        }
    };

    let job = JobSpec::collapse("clear-spaces", source, destination);
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
