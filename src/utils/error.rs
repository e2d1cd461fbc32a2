use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlyoverError {
    /// 網路層失敗（DNS、連線、逾時、回應內容無法解碼）
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// 上游服務回應非 2xx 狀態碼
    #[error("Status Code {status} when {operation}. Response: {body}")]
    Upstream {
        status: u16,
        operation: String,
        body: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration: {field}")]
    MissingConfig { field: String },
}

impl FlyoverError {
    pub fn is_transport(&self) -> bool {
        matches!(self, FlyoverError::Transport(_))
    }

    pub fn is_upstream(&self) -> bool {
        matches!(self, FlyoverError::Upstream { .. })
    }

    /// 上游回應的 HTTP 狀態碼（僅 Upstream 有值）
    pub fn status(&self) -> Option<u16> {
        match self {
            FlyoverError::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_config(&self) -> bool {
        matches!(
            self,
            FlyoverError::Config { .. }
                | FlyoverError::InvalidConfigValue { .. }
                | FlyoverError::MissingConfig { .. }
        )
    }

    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            FlyoverError::Transport(e) if e.is_timeout() => {
                "A lookup service did not answer in time. Check your network connection.".to_string()
            }
            FlyoverError::Transport(e) if e.is_decode() => {
                format!("A lookup service returned an unreadable response: {}", e)
            }
            FlyoverError::Transport(e) => {
                format!("Could not reach a lookup service: {}", e)
            }
            FlyoverError::Upstream { .. } => self.to_string(),
            _ if self.is_config() => format!("Invalid configuration. {}", self),
            _ => self.to_string(),
        }
    }

    /// CLI 結束碼：1 = 上游/網路，2 = 設定，3 = 本機 I/O 或輸出
    pub fn exit_code(&self) -> i32 {
        match self {
            FlyoverError::Transport(_) | FlyoverError::Upstream { .. } => 1,
            _ if self.is_config() => 2,
            _ => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, FlyoverError>;
