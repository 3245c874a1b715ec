use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::types::{object::Object, object_path::ObjectPath};

/// Objects known ahead of time, e.g. static asset data for a platform.
#[derive(Debug, Default, Deserialize)]
pub struct InventorySeed {
    #[serde(default)]
    pub objects: BTreeMap<ObjectPath, Object>,
}

impl InventorySeed {
    pub fn load(file_name: &Path) -> Result<Self> {
        let raw = fs::read_to_string(file_name)
            .with_context(|| format!("failed to read inventory seed {}", file_name.display()))?;

        Self::from_yaml(&raw)
            .with_context(|| format!("failed to load inventory seed {}", file_name.display()))
    }

    pub fn from_yaml(raw: &str) -> Result<Self> {
        let seed: Self = serde_yaml::from_str(raw).context("failed to parse inventory seed")?;

        seed.validate().context("inventory seed validation failed")?;

        Ok(seed)
    }

    fn validate(&self) -> Result<()> {
        for path in self.objects.keys() {
            let raw = path.as_str();

            if !raw.starts_with('/') {
                bail!("object path {raw:?} must start with '/'");
            }
            if raw.len() > 1 && raw.ends_with('/') {
                bail!("object path {raw:?} must not end with '/'");
            }
        }
        Ok(())
    }
}
