use crate::config::toml_config::FlyoverConfig;
use crate::utils::error::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "iss-flyover")]
#[command(about = "Show upcoming ISS passes over your current location")]
pub struct CliArgs {
    #[arg(long, short, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "IP echo service URL")]
    pub ip_endpoint: Option<String>,

    #[arg(long, help = "Geolocation service URL template, must contain {ip}")]
    pub geolocation_endpoint: Option<String>,

    #[arg(long, help = "Pass prediction URL template, must contain {latitude} and {longitude}")]
    pub passes_endpoint: Option<String>,

    #[arg(long, help = "Per-request timeout in seconds")]
    pub timeout: Option<u64>,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    #[arg(long, short, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl CliArgs {
    /// 讀取設定檔（若有），再套用命令列覆寫
    pub fn load_config(&self) -> Result<FlyoverConfig> {
        let mut config = match &self.config {
            Some(path) => FlyoverConfig::from_file(path)?,
            None => FlyoverConfig::default(),
        };

        if let Some(ip) = &self.ip_endpoint {
            config.endpoints.ip = ip.clone();
        }
        if let Some(geolocation) = &self.geolocation_endpoint {
            config.endpoints.geolocation = geolocation.clone();
        }
        if let Some(passes) = &self.passes_endpoint {
            config.endpoints.passes = passes.clone();
        }
        if let Some(timeout) = self.timeout {
            config.http.timeout_seconds = timeout;
        }
        config.logging.verbose |= self.verbose;
        config.logging.json |= self.json_logs;

        Ok(config)
    }
}
