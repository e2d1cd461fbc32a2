use crate::adapters::http::{render_template, JsonHttpClient};
use crate::domain::model::{Coordinates, PassList};
use crate::domain::ports::PassPredictor;
use crate::utils::error::Result;
use serde::Deserialize;

pub const DEFAULT_PASSES_ENDPOINT: &str =
    "https://iss-pass.herokuapp.com/json/?lat={latitude}&lon={longitude}";

#[derive(Debug, Deserialize)]
struct PassResponse {
    response: PassList,
}

/// 查詢指定座標上空的 ISS 過境時間
#[derive(Debug, Clone)]
pub struct IssPassPredictor {
    client: JsonHttpClient,
    endpoint_template: String,
}

impl IssPassPredictor {
    pub fn new(client: JsonHttpClient, endpoint_template: impl Into<String>) -> Self {
        Self {
            client,
            endpoint_template: endpoint_template.into(),
        }
    }

    pub fn endpoint_for(&self, coords: &Coordinates) -> String {
        render_template(
            &self.endpoint_template,
            &[
                ("latitude", coords.latitude.as_str()),
                ("longitude", coords.longitude.as_str()),
            ],
        )
    }
}

#[async_trait::async_trait]
impl PassPredictor for IssPassPredictor {
    async fn predict_passes(&self, coords: &Coordinates) -> Result<PassList> {
        let url = self.endpoint_for(coords);
        let body: PassResponse = self
            .client
            .get_json(&url, "fetching Flyover Times for coordinates")
            .await?;

        tracing::debug!("🛰️ Received {} upcoming passes", body.response.len());
        Ok(body.response)
    }
}
