//! Executive metrics check binary.
//!
//! Loads Supabase credentials and prints the latest metrics row.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use metrics_check::env_file::{self, DEFAULT_ENV_FILE};
use metrics_check::metrics::{self, METRICS_TABLE};
use metrics_check::{SupabaseClient, SupabaseConfig};

#[derive(Parser)]
#[command(name = "check-metrics")]
#[command(version, about = "Print the most recently updated executive metrics row", long_about = None)]
struct Cli {
    /// Environment file merged under the process environment
    #[arg(long, value_name = "PATH", default_value = DEFAULT_ENV_FILE)]
    env_file: PathBuf,

    /// Table to query
    #[arg(long, default_value = METRICS_TABLE)]
    table: String,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the row data
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let vars = env_file::load(&cli.env_file);

    let config = match SupabaseConfig::from_env_map(&vars) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    tracing::info!(url = %config.url, table = %cli.table, "Supabase configuration loaded");

    let client = SupabaseClient::new(&config);
    let rows = metrics::fetch_latest(&client, &cli.table).await?;

    println!("{}", metrics::render(&rows, cli.pretty)?);
    Ok(())
}
