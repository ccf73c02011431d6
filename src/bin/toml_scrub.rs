use clap::Parser;
use text_scrub::app::report::{print_summaries, report_failure};
use text_scrub::utils::{logger, validation::Validate};
use text_scrub::{run_jobs, FilterKind, LocalStorage, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-scrub")]
#[command(about = "Run text-scrub jobs described in a TOML file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "scrub-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Print the plan without reading or writing any file
    #[arg(long)]
    dry_run: bool,

    /// Print run summaries as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 載入 TOML 配置
    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    logger::init_cli_logger_with_level(args.verbose, config.log_level());
    tracing::info!("📁 Loaded configuration from: {}", args.config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        report_failure(&e);
        std::process::exit(1);
    }

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No files will be touched");
        print_plan(&config);
        return Ok(());
    }

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());
    if monitor_enabled {
        tracing::info!("🔍 Process monitoring enabled");
    }

    match run_jobs(LocalStorage::working_dir(), config.resolved_jobs(), monitor_enabled).await {
        Ok(summaries) => {
            tracing::info!("✅ {} job(s) completed", summaries.len());
            print_summaries(&summaries, args.json)?;
        }
        Err(e) => {
            report_failure(&e);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn print_plan(config: &TomlConfig) {
    println!("📋 Planned jobs:");
    for job in config.resolved_jobs() {
        match job.filter {
            FilterKind::CollapseWhitespace => {
                println!("  {}: {} {} -> {}", job.name, job.filter, job.input, job.output);
            }
            FilterKind::StripEmptyLines => {
                println!(
                    "  {}: {} {} -> {} (max {} lines)",
                    job.name,
                    job.filter,
                    job.input,
                    job.output,
                    job.line_cap()
                );
            }
        }
    }
}
