use std::collections::BTreeMap;

use anyhow::Result;
use serde::Serialize;
use serde_json::{Value, json};

use crate::types::{
    object::Object,
    object_path::{INVENTORY_ROOT, ObjectPath},
};

pub const INVENTORY_SERVICE: &str = "xyz.openbmc_project.Inventory.Manager";
pub const INVENTORY_MANAGER_IFACE: &str = "xyz.openbmc_project.Inventory.Manager";
pub const INVENTORY_ITEM_IFACE: &str = "xyz.openbmc_project.Inventory.Item";
pub const PROPERTIES_IFACE: &str = "org.freedesktop.DBus.Properties";

/// A method call on an object hosted by the inventory manager service.
#[derive(Debug, Clone, Serialize)]
pub struct MethodCall {
    pub service: &'static str,
    pub object: String,
    pub interface: &'static str,
    pub method: &'static str,
    pub args: Vec<Value>,
}

impl MethodCall {
    /// `Notify` with a single-object batch.
    pub fn notify(path: &ObjectPath, updates: &Object) -> Result<Self> {
        let batch = BTreeMap::from([(path, updates)]);

        Ok(Self {
            service: INVENTORY_SERVICE,
            object: INVENTORY_ROOT.to_string(),
            interface: INVENTORY_MANAGER_IFACE,
            method: "Notify",
            args: vec![serde_json::to_value(batch)?],
        })
    }

    /// Property `Set` of `Item.Present` on the object itself.
    pub fn set_present(path: &ObjectPath, present: bool) -> Self {
        Self {
            service: INVENTORY_SERVICE,
            object: path.absolute(),
            interface: PROPERTIES_IFACE,
            method: "Set",
            args: vec![json!(INVENTORY_ITEM_IFACE), json!("Present"), json!(present)],
        }
    }
}
