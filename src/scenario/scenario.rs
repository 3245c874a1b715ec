use std::path::Path;

use anyhow::{Result, anyhow};

use crate::{
    inventory::{
        DynamicInventory, dry_run::DryRunInventory,
        publish_when_present::PublishWhenPresentInventory,
    },
    manager::{manager_config::ManagerConfig, manager_inventory::ManagerInventory},
    scenario::{publishers::PublisherKind, sources::SourceKind},
    source::{EventSource, line_source::LineEventSource, websocket_source::WebSocketEventSource},
};

pub struct Scenario;

pub type GatedInventory = PublishWhenPresentInventory<DynamicInventory>;

type DynamicSource = Box<dyn EventSource>;

impl Scenario {
    pub fn inventory(kind: PublisherKind) -> Result<GatedInventory> {
        tracing::info!(publisher = %kind, "creating inventory publisher");

        let publisher: DynamicInventory = match kind {
            PublisherKind::DryRun => Box::new(DryRunInventory),
            PublisherKind::Manager => {
                let config = ManagerConfig::from_env()?;

                Box::new(ManagerInventory::new(config)?)
            }
        };

        Ok(PublishWhenPresentInventory::new(publisher))
    }

    pub fn source(kind: SourceKind, input: &Path, url: Option<&str>) -> Result<DynamicSource> {
        tracing::info!(source = %kind, "creating event source");

        let source: DynamicSource = match kind {
            SourceKind::Lines => Box::new(LineEventSource::new(input)),
            SourceKind::WebSocket => {
                let url = url.ok_or_else(|| anyhow!("--url is required for the websocket source"))?;

                Box::new(WebSocketEventSource::new(url))
            }
        };

        Ok(source)
    }
}
