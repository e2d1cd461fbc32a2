use crate::utils::error::{FlyoverError, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

pub const DEFAULT_USER_AGENT: &str = concat!("iss-flyover/", env!("CARGO_PKG_VERSION"));

/// 單次 GET + JSON 解碼；逾時交給 reqwest 處理
#[derive(Debug, Clone)]
pub struct JsonHttpClient {
    client: Client,
}

impl JsonHttpClient {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    /// 發出一次 GET。`operation` 只用於錯誤訊息，例如 "fetching IP"
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str, operation: &str) -> Result<T> {
        tracing::debug!("📡 GET {} ({})", url, operation);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        tracing::debug!("📡 {} responded with {}", url, status);

        if !status.is_success() {
            // 讀不到 body 時仍回報狀態碼
            let body = response.text().await.unwrap_or_default();
            return Err(FlyoverError::Upstream {
                status: status.as_u16(),
                operation: operation.to_string(),
                body,
            });
        }

        Ok(response.json::<T>().await?)
    }
}

impl Default for JsonHttpClient {
    fn default() -> Self {
        Self::from_client(Client::new())
    }
}

/// 以參數值原樣替換模板中的 `{name}`，不做 URL 編碼
pub fn render_template(template: &str, params: &[(&str, &str)]) -> String {
    let mut rendered = template.to_string();
    for (name, value) in params {
        let placeholder = format!("{{{}}}", name);
        rendered = rendered.replace(&placeholder, value);
    }
    rendered
}
