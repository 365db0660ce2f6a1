use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::Level;

use dpp_core::{load_config, save_config, targets, DashboardConfig, HttpRecordFetcher};
use dpp_ui::logging::{init_logging, LogLevel, LogStore};
use dpp_ui::{run, Flags};

const LOG_CAPACITY: usize = 2000;

/// Digital product passport dashboard.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// RON file with endpoint and product identifiers.
    #[arg(long, default_value = dpp_core::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Overrides the passport service base URL from the config file.
    #[arg(long)]
    endpoint: Option<String>,

    #[arg(long, default_value = "info")]
    log_level: LogLevel,

    /// Write the effective configuration to `--config` and exit.
    #[arg(long)]
    write_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let log_store = LogStore::new(LOG_CAPACITY);
    let reload_handle = init_logging(log_store.clone(), cli.log_level);

    tracing::info!(target: targets::UI, "DPP dashboard starting");

    let mut config = match load_config(&cli.config) {
        Ok(config) => config,
        Err(error) => {
            tracing::warn!(
                target: targets::CONFIG,
                detail = %error.technical_detail(),
                "{} Falling back to defaults.",
                error.user_summary()
            );
            DashboardConfig::default()
        }
    };
    if let Some(endpoint) = cli.endpoint {
        config = config.with_endpoint(endpoint);
    }

    if cli.write_config {
        save_config(&cli.config, &config)?;
        return Ok(());
    }

    let fetcher = HttpRecordFetcher::new(&config)?;
    tracing::event!(
        target: targets::FETCH,
        Level::DEBUG,
        endpoint = %fetcher.endpoint(),
        "Record fetcher ready"
    );

    run(Flags {
        log_store,
        reload_handle,
        log_level: cli.log_level,
        config,
        fetcher: Arc::new(fetcher),
    })?;

    Ok(())
}
