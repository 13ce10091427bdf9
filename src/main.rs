use anyhow::Context;
use tokio::io::AsyncReadExt;

use order_assist::config::OrderConfig;
use order_assist::{AgentDeps, OrderAgent, TurnEvent};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only the response document.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = OrderConfig::from_env();
    config.validate()?;

    let input = match std::env::args().nth(1) {
        Some(path) => tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("reading turn event from {path}"))?,
        None => {
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .context("reading turn event from stdin")?;
            buf
        }
    };

    let event = TurnEvent::from_json(&input)?;
    tracing::debug!(intent = %event.intent_name(), "Turn event received");

    // No enrichment providers are wired in the CLI: sentiment defaults to
    // neutral and confirmations are text only.
    let agent = OrderAgent::new(config, AgentDeps::default());
    let response = agent.handle_turn(&event).await;

    println!("{}", serde_json::to_string_pretty(&response.to_value())?);
    Ok(())
}
