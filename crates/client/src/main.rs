//! Nightreign guide client - composition root binary
//!
//! With arguments, runs them as a single command. Without, reads commands
//! from stdin.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nightreign_client::infrastructure::ApiAdapter;
use nightreign_client::ports::outbound::RawApiPort;
use nightreign_client::runner::{Command, Runner, RunnerDeps};
use nightreign_client::{Api, ClientConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nightreign_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ClientConfig::from_env();
    tracing::info!(backend_url = %config.backend_url, "Starting Nightreign guide client");

    let raw_api: Arc<dyn RawApiPort> = Arc::new(ApiAdapter::new(&config));
    let runner = Runner::new(RunnerDeps {
        api: Api::new(raw_api),
    });

    if let Err(e) = runner.state().refresh().await {
        tracing::warn!(error = %e, "Initial catalog load failed, continuing with an empty catalog");
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        return runner.run_interactive().await;
    }

    let command: Command = args.join(" ").parse()?;
    let output = runner.execute(command).await?;
    println!("{}", output);
    Ok(())
}
