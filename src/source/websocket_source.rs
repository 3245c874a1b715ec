use anyhow::{Context, Result};
use async_trait::async_trait;
use futures_util::{Stream, StreamExt};
use tokio::sync::mpsc::Sender;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::{self, Message};

use crate::events::InventoryEvent;
use crate::source::EventSource;

/// Events pushed as JSON text frames by a remote hardware monitor.
#[derive(Debug, Clone)]
pub struct WebSocketEventSource {
    url: String,
}

impl WebSocketEventSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[async_trait]
impl EventSource for WebSocketEventSource {
    async fn subscribe(&self, channel: Sender<InventoryEvent>) -> Result<()> {
        let (ws, _) = connect_async(self.url.as_str())
            .await
            .with_context(|| format!("connect_async({}) failed", self.url))?;

        tracing::info!(url = %self.url, "connected to event feed");

        forward_frames(ws, &channel).await
    }
}

async fn forward_frames<S>(mut frames: S, channel: &Sender<InventoryEvent>) -> Result<()>
where
    S: Stream<Item = Result<Message, tungstenite::Error>> + Unpin,
{
    while let Some(msg) = frames.next().await {
        let text = match msg.context("event feed read failed")? {
            Message::Text(text) => text,
            Message::Close(frame) => {
                tracing::info!(?frame, "event feed closed");
                return Ok(());
            }
            _ => continue,
        };

        let event: InventoryEvent = match serde_json::from_str(&text) {
            Ok(event) => event,
            /* NOTE: ignore keepalives and other non-event frames */
            Err(_) => continue,
        };

        if channel.send(event).await.is_err() {
            return Ok(());
        }
    }

    Ok(())
}
