use std::env;

use anyhow::{Context, Result};
use url::Url;

pub struct ManagerConfig {
    pub base_url: Url,
    pub token: Option<String>,
}

impl ManagerConfig {
    pub fn from_env() -> Result<Self> {
        let base_url = env::var("INVENTORY_MANAGER_URL")
            .map_err(|_| anyhow::anyhow!("INVENTORY_MANAGER_URL not set"))?;

        let token = env::var("INVENTORY_MANAGER_TOKEN")
            .ok()
            .filter(|token| !token.is_empty());

        Self::new(&base_url, token)
    }

    pub fn new(base_url: &str, token: Option<String>) -> Result<Self> {
        let mut base_url = Url::parse(base_url)
            .with_context(|| format!("invalid inventory manager url {base_url}"))?;

        /* NOTE: keep the last segment when joining endpoint paths */
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self { base_url, token })
    }
}
