use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use water_survey::{CollectorConfig, SubmissionClient, SurveyStore};
use water_survey_ratatui::{RatatuiError, RatatuiSurvey};

/// Collect a water service satisfaction survey in the terminal.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Collector URL that receives finished responses as JSON.
    #[arg(long, env = "WATER_SURVEY_ENDPOINT")]
    endpoint: Option<String>,

    /// Seconds to wait for the collector before giving up.
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// Write logs to this file. Nothing is logged without it.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Title shown at the top of the wizard.
    #[arg(long, default_value = "Water Service Satisfaction Survey")]
    title: String,
}

fn init_tracing(path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        init_tracing(path)?;
    }

    let config = match args.endpoint {
        Some(endpoint) => CollectorConfig::new(endpoint),
        None => CollectorConfig::unconfigured(),
    }
    .with_timeout(Duration::from_secs(args.timeout_secs));
    if !config.is_configured() {
        warn!("no collector endpoint configured; submissions will fail");
    }

    let client = SubmissionClient::http(config).context("could not create HTTP client")?;
    let mut store = SurveyStore::new(client);

    match RatatuiSurvey::new().with_title(args.title).run(&mut store) {
        Ok(saved) => {
            info!(saved, "exiting");
            println!("Saved {saved} survey response(s). Thank you!");
            Ok(())
        }
        Err(RatatuiError::Cancelled) => {
            info!("survey cancelled");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
