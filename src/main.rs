use std::fs::File;

use clap::Parser;
use log::{LevelFilter, info};
use simplelog::{ConfigBuilder, WriteLogger};

use todogpt::core::config::{load_config, resolve};
use todogpt::tui;

/// Terminal chat client for a local to-do assistant.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Chat service base URL (overrides config file and TODOGPT_ENDPOINT)
    #[arg(long)]
    endpoint: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    // The terminal belongs to the UI, so logs go to a file.
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();
    WriteLogger::init(
        LevelFilter::Debug,
        log_config,
        File::create("todogpt.log")?,
    )?;

    let config = load_config()?;
    let resolved = resolve(&config, args.endpoint.as_deref());
    info!("Resolved endpoint: {}", resolved.endpoint);

    tui::run(resolved).await?;
    Ok(())
}
