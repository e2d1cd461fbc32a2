use crate::adapters::geoip::DEFAULT_GEOLOCATION_ENDPOINT;
use crate::adapters::http::DEFAULT_USER_AGENT;
use crate::adapters::ip_echo::DEFAULT_IP_ENDPOINT;
use crate::adapters::iss_pass::DEFAULT_PASSES_ENDPOINT;
use crate::core::ConfigProvider;
use crate::utils::error::{FlyoverError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const MAX_TIMEOUT_SECONDS: u64 = 300;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlyoverConfig {
    pub endpoints: EndpointConfig,
    pub http: HttpConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    pub ip: String,
    pub geolocation: String,
    pub passes: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            ip: DEFAULT_IP_ENDPOINT.to_string(),
            geolocation: DEFAULT_GEOLOCATION_ENDPOINT.to_string(),
            passes: DEFAULT_PASSES_ENDPOINT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub timeout_seconds: u64,
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub verbose: bool,
    pub json: bool,
}

impl FlyoverConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FlyoverError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${GEOIP_API_KEY})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FlyoverError::Config {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for FlyoverConfig {
    fn ip_endpoint(&self) -> &str {
        &self.endpoints.ip
    }

    fn geolocation_endpoint(&self) -> &str {
        &self.endpoints.geolocation
    }

    fn passes_endpoint(&self) -> &str {
        &self.endpoints.passes
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.http.timeout_seconds)
    }

    fn user_agent(&self) -> &str {
        &self.http.user_agent
    }
}

impl Validate for FlyoverConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("endpoints.ip", &self.endpoints.ip)?;

        validation::validate_url("endpoints.geolocation", &self.endpoints.geolocation)?;
        validation::validate_placeholders(
            "endpoints.geolocation",
            &self.endpoints.geolocation,
            &["ip"],
        )?;

        validation::validate_url("endpoints.passes", &self.endpoints.passes)?;
        validation::validate_placeholders(
            "endpoints.passes",
            &self.endpoints.passes,
            &["latitude", "longitude"],
        )?;

        validation::validate_range(
            "http.timeout_seconds",
            self.http.timeout_seconds,
            1,
            MAX_TIMEOUT_SECONDS,
        )?;
        validation::validate_non_empty_string("http.user_agent", &self.http.user_agent)?;

        Ok(())
    }
}
