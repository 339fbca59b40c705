use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use client::{ClientConfig, ResultsClient, SortOrder};
use common::logger::init_logger;
use common::scoring::PassThreshold;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SortKey {
    /// Submission order
    Order,
    /// Student name
    Name,
    /// Percentage, highest first
    Score,
}

impl From<SortKey> for SortOrder {
    fn from(key: SortKey) -> Self {
        match key {
            SortKey::Order => SortOrder::Submission,
            SortKey::Name => SortOrder::Name,
            SortKey::Score => SortOrder::Percentage,
        }
    }
}

/// Shows every student's result for one test.
#[derive(Parser, Debug)]
#[command(name = "results-view", version, about)]
struct Args {
    /// Id of the test to show results for
    test_id: String,
    /// API base URL. Defaults to RESULTS_API_URL, then http://127.0.0.1:3000
    #[arg(long)]
    api_url: Option<String>,
    #[arg(long, value_enum, default_value_t = SortKey::Order)]
    sort: SortKey,
    /// Pass mark in percent. Defaults to PASS_THRESHOLD, then 60
    #[arg(long)]
    threshold: Option<u32>,
    /// Also append log output to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_logger(&args.log_level, args.log_file.as_deref()).context("initialising logger")?;

    let mut config = ClientConfig::from_env();
    if let Some(url) = args.api_url {
        config = ClientConfig::new(url).with_pass_threshold(config.pass_threshold);
    }
    if let Some(percent) = args.threshold {
        config = config.with_pass_threshold(PassThreshold::new(percent));
    }

    let client = ResultsClient::new(config).context("building results client")?;
    let mut view = client.load_view(&args.test_id).await;
    view.sort_by(args.sort.into());

    print!("{}", view.render());

    Ok(if view.is_failed() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
