use clap::Parser;
use text_scrub::app::report::{print_summaries, report_failure};
use text_scrub::utils::{logger, validation::Validate};
use text_scrub::{run_job, CliConfig, LocalStorage};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting text-scrub");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        report_failure(&e);
        std::process::exit(1);
    }

    if config.monitor {
        tracing::info!("🔍 Process monitoring enabled");
    }

    match run_job(LocalStorage::working_dir(), config.job(), config.monitor).await {
        Ok(summary) => {
            print_summaries(std::slice::from_ref(&summary), config.json)?;
        }
        Err(e) => {
            report_failure(&e);
            std::process::exit(1);
        }
    }

    Ok(())
}
