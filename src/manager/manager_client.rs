use anyhow::{Context, Result};
use url::Url;

use crate::manager::{manager_config::ManagerConfig, method_call::MethodCall};

#[derive(Clone, Debug)]
pub struct ManagerClient {
    http: reqwest::Client,
    endpoint: Url,
    token: Option<String>,
}

impl ManagerClient {
    pub fn new(config: ManagerConfig) -> Result<Self> {
        let endpoint = config
            .base_url
            .join("call")
            .context("failed to build inventory manager endpoint")?;

        Ok(Self {
            http: reqwest::Client::new(),
            endpoint,
            token: config.token,
        })
    }

    pub async fn call(&self, call: &MethodCall) -> Result<()> {
        let mut request = self.http.post(self.endpoint.clone()).json(call);

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let resp = request
            .send()
            .await
            .with_context(|| format!("{}.{} on {} failed", call.interface, call.method, call.object))?;

        let status = resp.status();
        let text = resp.text().await.context("read response body failed")?;

        if !status.is_success() {
            anyhow::bail!(
                "inventory manager http error {status} for {}.{} on {}: {text}",
                call.interface,
                call.method,
                call.object
            );
        }

        tracing::debug!(object = %call.object, method = call.method, %status, "method call complete");

        Ok(())
    }
}
