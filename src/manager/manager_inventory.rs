use anyhow::Result;
use async_trait::async_trait;

use crate::inventory::Inventory;
use crate::manager::{
    manager_client::ManagerClient, manager_config::ManagerConfig, method_call::MethodCall,
};
use crate::types::{object::Object, object_path::ObjectPath};

/// Publishes straight to the inventory manager service.
#[derive(Debug, Clone)]
pub struct ManagerInventory {
    client: ManagerClient,
}

impl ManagerInventory {
    pub fn new(config: ManagerConfig) -> Result<Self> {
        Ok(Self {
            client: ManagerClient::new(config)?,
        })
    }
}

#[async_trait]
impl Inventory for ManagerInventory {
    async fn update_object(&mut self, path: &ObjectPath, updates: &Object) -> Result<()> {
        let call = MethodCall::notify(path, updates)?;

        self.client.call(&call).await
    }

    async fn mark_present(&mut self, path: &ObjectPath) -> Result<()> {
        self.client.call(&MethodCall::set_present(path, true)).await
    }

    async fn mark_absent(&mut self, path: &ObjectPath) -> Result<()> {
        self.client.call(&MethodCall::set_present(path, false)).await
    }
}
