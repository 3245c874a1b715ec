use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

use crate::inventory::Inventory;
use crate::types::{object::Object, object_path::ObjectPath};

/// Logs what would have been published and succeeds.
#[derive(Debug, Default)]
pub struct DryRunInventory;

#[async_trait]
impl Inventory for DryRunInventory {
    async fn update_object(&mut self, path: &ObjectPath, updates: &Object) -> Result<()> {
        for (interface, properties) in updates {
            info!(%path, %interface, ?properties, "update object");
        }

        Ok(())
    }

    async fn mark_present(&mut self, path: &ObjectPath) -> Result<()> {
        info!(%path, "mark present");

        Ok(())
    }

    async fn mark_absent(&mut self, path: &ObjectPath) -> Result<()> {
        info!(%path, "mark absent");

        Ok(())
    }
}
