pub mod accumulate;
pub mod dry_run;
pub mod publish_when_present;

use anyhow::Result;
use async_trait::async_trait;

use crate::types::{object::Object, object_path::ObjectPath};

pub type DynamicInventory = Box<dyn Inventory + Send>;

/// Sink for inventory object state.
#[async_trait]
pub trait Inventory: Send {
    /// Apply `updates` to the object at `path`.
    async fn update_object(&mut self, path: &ObjectPath, updates: &Object) -> Result<()>;

    /// Record the object at `path` as physically present.
    async fn mark_present(&mut self, path: &ObjectPath) -> Result<()>;

    /// Record the object at `path` as physically absent.
    async fn mark_absent(&mut self, path: &ObjectPath) -> Result<()>;
}

#[async_trait]
impl<T: Inventory + ?Sized> Inventory for Box<T> {
    async fn update_object(&mut self, path: &ObjectPath, updates: &Object) -> Result<()> {
        (**self).update_object(path, updates).await
    }

    async fn mark_present(&mut self, path: &ObjectPath) -> Result<()> {
        (**self).mark_present(path).await
    }

    async fn mark_absent(&mut self, path: &ObjectPath) -> Result<()> {
        (**self).mark_absent(path).await
    }
}
