//! Status Check - print the GitHub API status document.

use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use status_check::{StatusClient, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};

#[derive(Parser)]
#[command(name = "status-check")]
#[command(about = "Fetch and print the GitHub API status document")]
struct Cli {
    /// Endpoint to query
    #[arg(long, env = "STATUS_CHECK_URL", default_value = DEFAULT_ENDPOINT)]
    url: String,

    /// Request timeout in seconds
    #[arg(long, env = "STATUS_CHECK_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout carries only the status line
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let client = StatusClient::new(cli.url, Duration::from_secs(cli.timeout_secs))?;
    let data = client.fetch_data().await?;
    println!("GitHub API Status: {}", data);

    Ok(())
}
