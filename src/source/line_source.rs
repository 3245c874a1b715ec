use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::fs::File;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::Sender;
use tracing::{info, warn};

use crate::events::InventoryEvent;
use crate::source::EventSource;

/// Newline-delimited JSON events from a file, or stdin for `-`.
#[derive(Debug, Clone)]
pub struct LineEventSource {
    input: PathBuf,
}

impl LineEventSource {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
        }
    }

    fn is_stdin(&self) -> bool {
        self.input.as_os_str() == "-"
    }
}

#[async_trait]
impl EventSource for LineEventSource {
    async fn subscribe(&self, channel: Sender<InventoryEvent>) -> Result<()> {
        if self.is_stdin() {
            info!("reading events from stdin");
            return forward_lines(BufReader::new(tokio::io::stdin()), &channel).await;
        }

        let file = File::open(&self.input)
            .await
            .with_context(|| format!("failed to open event input {}", self.input.display()))?;

        info!(input = %self.input.display(), "reading events");

        forward_lines(BufReader::new(file), &channel).await
    }
}

async fn forward_lines<R>(reader: R, channel: &Sender<InventoryEvent>) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut line_number = 0usize;

    while let Some(line) = lines.next_line().await.context("failed to read event line")? {
        line_number += 1;

        match parse_line(&line) {
            Ok(Some(event)) => {
                if channel.send(event).await.is_err() {
                    /* NOTE: receiver gone, nobody left to publish to */
                    return Ok(());
                }
            }
            Ok(None) => {}
            Err(error) => warn!(line = line_number, %error, "skipping malformed event"),
        }
    }

    Ok(())
}

/// Blank lines and `#` comments yield `None`.
fn parse_line(line: &str) -> Result<Option<InventoryEvent>, serde_json::Error> {
    let line = line.trim();

    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    serde_json::from_str(line).map(Some)
}
