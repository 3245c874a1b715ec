mod events;
mod inventory;
mod manager;
mod scenario;
mod source;
mod types;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;
use tokio::sync::mpsc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::events::{InventoryEvent, dispatch};
use crate::inventory::Inventory;
use crate::scenario::publishers::PublisherKind;
use crate::scenario::scenario::Scenario;
use crate::scenario::sources::SourceKind;
use crate::types::seed::InventorySeed;

#[derive(Debug, Clone, Parser)]
struct Args {
    #[arg(long, value_enum, default_value = "dry-run")]
    pub publisher: PublisherKind,

    #[arg(long, value_enum, default_value = "lines")]
    pub source: SourceKind,

    /// Event file for the lines source, `-` for stdin.
    #[arg(long, default_value = "-")]
    pub input: PathBuf,

    /// Event feed for the websocket source.
    #[arg(long)]
    pub url: Option<String>,

    /// YAML file of objects known before any hardware is observed.
    #[arg(long)]
    pub seed: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("inventory_publisher=debug".parse()?),
        )
        .with_target(false)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    let mut inventory = Scenario::inventory(args.publisher)?;

    if let Some(seed) = &args.seed {
        let seed = InventorySeed::load(seed)?;
        info!(objects = seed.objects.len(), "applying inventory seed");

        for (path, object) in &seed.objects {
            inventory.update_object(path, object).await?;
        }
    }

    let source = Scenario::source(args.source, &args.input, args.url.as_deref())?;
    let (event_sender, mut event_receiver) = mpsc::channel::<InventoryEvent>(1_024);

    let reconnect = args.source == SourceKind::WebSocket;
    tokio::spawn(async move {
        loop {
            if let Err(error) = source.subscribe(event_sender.clone()).await {
                error!("event source stopped with error: {error:?}");
            }

            if !reconnect || event_sender.is_closed() {
                break;
            }

            tokio::time::sleep(Duration::from_secs(1)).await;
        }
    });

    loop {
        tokio::select! {
            event = event_receiver.recv() => {
                let Some(event) = event else {
                    info!("event source exhausted");
                    break;
                };

                tracing::debug!(?event);

                let path = event.path();
                if let Err(error) = dispatch(&mut inventory, &event).await {
                    error!(%path, "failed to publish event: {error:?}");
                    continue;
                }

                tracing::trace!(
                    %path,
                    presence = ?inventory.presence(path),
                    object = ?inventory.cached_object(path),
                    "inventory state"
                );
            }

            _ = tokio::signal::ctrl_c() => {
                info!("interrupted");
                break;
            }
        }
    }

    info!(objects = inventory.cached_objects(), "shutting down");

    Ok(())
}
