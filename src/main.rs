//! `socketio_harness` entry point.
//!
//! Connects once, then turns prompt lines into send actions until the
//! operator quits or stdin closes.

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use socketio_harness::prompt::{self, Command};
use socketio_harness::{Bridge, HarnessConfig, HarnessError};

#[tokio::main]
async fn main() -> Result<(), HarnessError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = HarnessConfig::from_env()?;
    tracing::info!(endpoint = %config.endpoint, "connecting");
    let bridge = Bridge::connect(&config).await?;

    println!("{}", prompt::USAGE);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let outcome = match Command::parse(&line) {
            Command::SendText(text) => bridge.send_text(&text).await,
            Command::SendRecord => bridge.send_record().await,
            Command::Quit => break,
            Command::Unknown => {
                println!("{}", prompt::USAGE);
                Ok(())
            }
        };
        if let Err(e) = outcome {
            tracing::error!(error = %e, "send failed");
        }
    }

    bridge.shutdown().await;
    Ok(())
}
