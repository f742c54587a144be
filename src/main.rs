use anyhow::Context;
use clap::Parser;
use collection_drills::utils::{logger, validation::Validate};
use collection_drills::{report, CliConfig, OutputFormat, PerfRunner};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting collection-drills");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let workload = match config.workload() {
        Ok(workload) => workload,
        Err(e) => {
            tracing::error!("❌ Failed to load workload: {}", e);
            return Err(e).context("failed to load workload");
        }
    };
    if config.monitor {
        tracing::info!("🔍 Process monitoring enabled");
    }

    let runner =
        PerfRunner::new_with_monitoring(workload, config.monitor).with_tasks(&config.tasks());

    let result = match runner.run() {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("❌ Drill run failed: {}", e);
            return Err(e).context("drill run failed");
        }
    };

    let rendered = match config.format {
        OutputFormat::Text => report::render_text(&result),
        OutputFormat::Json => match report::render_json(&result) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!("❌ Failed to render report: {}", e);
                return Err(e.into());
            }
        },
    };
    print!("{}", rendered);

    Ok(())
}
