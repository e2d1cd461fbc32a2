use anyhow::{Context, Result};
use clap::Parser;
use iss_flyover::adapters::{GeoIpResolver, IpEchoResolver, IssPassPredictor, JsonHttpClient};
use iss_flyover::core::{ConfigProvider, GeolocationResolver, IpResolver, PassPredictor};
use iss_flyover::utils::{logger, validation::Validate};
use iss_flyover::CliArgs;

/// 逐一呼叫三個服務並印出中間結果，用來檢查端點設定
#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();
    let config = args.load_config().context("Failed to load configuration")?;

    logger::init_cli_logger(true, config.logging.json);
    config.validate().context("Invalid configuration")?;

    let client = JsonHttpClient::new(config.request_timeout(), config.user_agent())?;

    println!("🚀 Probing lookup services");

    println!("1️⃣  IP echo: {}", config.ip_endpoint());
    let ip = IpEchoResolver::new(client.clone(), config.ip_endpoint())
        .resolve_my_ip()
        .await
        .context("IP echo service failed")?;
    println!("    ip = {}", ip);

    let geolocator = GeoIpResolver::new(client.clone(), config.geolocation_endpoint());
    println!("2️⃣  Geolocation: {}", geolocator.endpoint_for(&ip));
    let coords = geolocator
        .resolve_coordinates(&ip)
        .await
        .context("Geolocation service failed")?;
    println!("    latitude = {}, longitude = {}", coords.latitude, coords.longitude);

    let predictor = IssPassPredictor::new(client, config.passes_endpoint());
    println!("3️⃣  Pass prediction: {}", predictor.endpoint_for(&coords));
    let passes = predictor
        .predict_passes(&coords)
        .await
        .context("Pass prediction service failed")?;
    println!("    {} passes", passes.len());
    for pass in &passes {
        println!("    risetime = {}, duration = {}s", pass.risetime, pass.duration);
    }

    println!("✅ All services responded");
    Ok(())
}
