use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use envdump::aws::{load_sdk_config, AwsSources};
use envdump::cli::Cli;
use envdump::{AwsConfig, ExportConfig};
use envdump_core::output::ExportSummary;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli).await {
        Ok(summary) => {
            tracing::info!(%summary, "Export complete");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

/// Initialize the tracing subscriber. Logs go to stderr; `RUST_LOG`
/// overrides the level flags.
fn init_tracing(cli: &Cli) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| cli.default_log_filter().into());

    let registry = tracing_subscriber::registry().with(filter);
    if cli.json_logs {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

async fn run(cli: &Cli) -> Result<ExportSummary> {
    let aws_config = AwsConfig::from(cli);
    let config = ExportConfig::from(cli);

    tracing::info!(
        environment = config.environment.name(),
        mode = %config.mode,
        target = %aws_config.target_display(),
        output = %config.layout.root().display(),
        "Starting export"
    );

    let sdk_config = load_sdk_config(&aws_config)
        .await
        .context("failed to load AWS session")?;
    let clients = AwsSources::new(&sdk_config, &aws_config);

    envdump::run(&config, &clients.sources())
        .await
        .with_context(|| format!("export of environment '{}' failed", config.environment.name()))
}
