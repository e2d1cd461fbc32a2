use crate::adapters::http::JsonHttpClient;
use crate::domain::model::IpAddress;
use crate::domain::ports::IpResolver;
use crate::utils::error::Result;
use serde::Deserialize;

pub const DEFAULT_IP_ENDPOINT: &str = "https://api.ipify.org?format=json";

#[derive(Debug, Deserialize)]
struct IpEchoResponse {
    ip: IpAddress,
}

/// 透過 IP 回顯服務取得呼叫端公開 IP
#[derive(Debug, Clone)]
pub struct IpEchoResolver {
    client: JsonHttpClient,
    endpoint: String,
}

impl IpEchoResolver {
    pub fn new(client: JsonHttpClient, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait::async_trait]
impl IpResolver for IpEchoResolver {
    async fn resolve_my_ip(&self) -> Result<IpAddress> {
        let body: IpEchoResponse = self.client.get_json(&self.endpoint, "fetching IP").await?;
        tracing::debug!("🌐 Public IP: {}", body.ip);
        Ok(body.ip)
    }
}
