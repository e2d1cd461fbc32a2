use crate::adapters::http::{render_template, JsonHttpClient};
use crate::domain::model::{Coordinates, IpAddress};
use crate::domain::ports::GeolocationResolver;
use crate::utils::error::Result;

pub const DEFAULT_GEOLOCATION_ENDPOINT: &str = "https://freegeoip.app/json/{ip}";

/// 以 IP 查詢經緯度。IP 不做格式檢查，直接交給上游服務判斷
#[derive(Debug, Clone)]
pub struct GeoIpResolver {
    client: JsonHttpClient,
    endpoint_template: String,
}

impl GeoIpResolver {
    pub fn new(client: JsonHttpClient, endpoint_template: impl Into<String>) -> Self {
        Self {
            client,
            endpoint_template: endpoint_template.into(),
        }
    }

    pub fn endpoint_for(&self, ip: &IpAddress) -> String {
        render_template(&self.endpoint_template, &[("ip", ip.as_str())])
    }
}

#[async_trait::async_trait]
impl GeolocationResolver for GeoIpResolver {
    async fn resolve_coordinates(&self, ip: &IpAddress) -> Result<Coordinates> {
        let url = self.endpoint_for(ip);
        let coords: Coordinates = self
            .client
            .get_json(&url, "fetching coordinates for IP")
            .await?;

        tracing::debug!(
            "📍 {} is at lat={}, lon={}",
            ip,
            coords.latitude,
            coords.longitude
        );
        Ok(coords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::FlyoverError;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_resolve_coordinates() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/json/162.245.144.188");
            then.status(200).json_body(serde_json::json!({
                "ip": "162.245.144.188",
                "country_code": "CA",
                "latitude": "49.27670",
                "longitude": "-123.13000"
            }));
        });

        let resolver = GeoIpResolver::new(JsonHttpClient::default(), server.url("/json/{ip}"));
        let coords = resolver
            .resolve_coordinates(&IpAddress::new("162.245.144.188"))
            .await
            .unwrap();

        mock.assert();
        assert_eq!(coords, Coordinates::new("49.27670", "-123.13000"));
    }

    #[tokio::test]
    async fn test_malformed_ip_is_forwarded() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/json/not-an-ip");
            then.status(400).body("invalid IP address");
        });

        let resolver = GeoIpResolver::new(JsonHttpClient::default(), server.url("/json/{ip}"));
        let err = resolver
            .resolve_coordinates(&IpAddress::new("not-an-ip"))
            .await
            .unwrap_err();

        mock.assert();
        match err {
            FlyoverError::Upstream { status, body, .. } => {
                assert_eq!(status, 400);
                assert_eq!(body, "invalid IP address");
            }
            other => panic!("expected upstream error, got {:?}", other),
        }
    }

    #[test]
    fn test_endpoint_for() {
        let resolver = GeoIpResolver::new(JsonHttpClient::default(), DEFAULT_GEOLOCATION_ENDPOINT);
        assert_eq!(
            resolver.endpoint_for(&IpAddress::new("8.8.8.8")),
            "https://freegeoip.app/json/8.8.8.8"
        );
    }
}
