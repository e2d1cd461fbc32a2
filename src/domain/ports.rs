use crate::domain::model::{Coordinates, IpAddress, PassList};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

#[async_trait]
pub trait IpResolver: Send + Sync {
    async fn resolve_my_ip(&self) -> Result<IpAddress>;
}

#[async_trait]
pub trait GeolocationResolver: Send + Sync {
    async fn resolve_coordinates(&self, ip: &IpAddress) -> Result<Coordinates>;
}

#[async_trait]
pub trait PassPredictor: Send + Sync {
    async fn predict_passes(&self, coords: &Coordinates) -> Result<PassList>;
}

pub trait ConfigProvider: Send + Sync {
    fn ip_endpoint(&self) -> &str;
    /// 含 `{ip}` 佔位符
    fn geolocation_endpoint(&self) -> &str;
    /// 含 `{latitude}`、`{longitude}` 佔位符
    fn passes_endpoint(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn user_agent(&self) -> &str;
}
