pub mod line_source;
pub mod websocket_source;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::mpsc::Sender;

use crate::events::InventoryEvent;

#[async_trait]
pub trait EventSource: Send + Sync {
    /// Feed events into `channel` until the source is exhausted or fails.
    async fn subscribe(&self, channel: Sender<InventoryEvent>) -> Result<()>;
}
