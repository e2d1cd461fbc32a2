use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// 呼叫端的公開 IPv4 位址，原樣保留服務回傳的字串
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IpAddress(String);

impl IpAddress {
    pub fn new(ip: impl Into<String>) -> Self {
        Self(ip.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IpAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for IpAddress {
    fn from(ip: &str) -> Self {
        Self::new(ip)
    }
}

/// 經緯度，保留服務回傳的文字形式，不轉成浮點數
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinates {
    #[serde(deserialize_with = "verbatim_text")]
    pub latitude: String,
    #[serde(deserialize_with = "verbatim_text")]
    pub longitude: String,
}

impl Coordinates {
    pub fn new(latitude: impl Into<String>, longitude: impl Into<String>) -> Self {
        Self {
            latitude: latitude.into(),
            longitude: longitude.into(),
        }
    }
}

/// 有些地理服務把座標編成 JSON 數字；兩種都收，保留原本的文字
fn verbatim_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Text {
        Str(String),
        Num(serde_json::Number),
    }

    Ok(match Text::deserialize(deserializer)? {
        Text::Str(s) => s,
        Text::Num(n) => n.to_string(),
    })
}

/// 一次過境：升起時間（Unix 秒）與可見秒數，其餘欄位放在 `extra`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassWindow {
    pub risetime: i64,
    pub duration: i64,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl PassWindow {
    pub fn new(risetime: i64, duration: i64) -> Self {
        Self {
            risetime,
            duration,
            extra: serde_json::Map::new(),
        }
    }
}

/// 依服務回傳順序排列，不重新排序
pub type PassList = Vec<PassWindow>;
