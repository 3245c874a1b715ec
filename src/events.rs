use anyhow::Result;
use serde::Deserialize;

use crate::inventory::Inventory;
use crate::types::{object::Object, object_path::ObjectPath};

/// Hardware observation reported by an event source.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum InventoryEvent {
    Update {
        path: ObjectPath,
        interfaces: Object,
    },
    Present {
        path: ObjectPath,
    },
    Absent {
        path: ObjectPath,
    },
}

impl InventoryEvent {
    pub fn path(&self) -> &ObjectPath {
        match self {
            Self::Update { path, .. } | Self::Present { path } | Self::Absent { path } => path,
        }
    }
}

pub async fn dispatch<I>(inventory: &mut I, event: &InventoryEvent) -> Result<()>
where
    I: Inventory + ?Sized,
{
    match event {
        InventoryEvent::Update { path, interfaces } => {
            inventory.update_object(path, interfaces).await
        }
        InventoryEvent::Present { path } => inventory.mark_present(path).await,
        InventoryEvent::Absent { path } => inventory.mark_absent(path).await,
    }
}
