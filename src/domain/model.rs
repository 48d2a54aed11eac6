use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 後端遮蔽敏感欄位時使用的字串；回傳給 PUT /config 時後端會保留原值
pub const MASKED_SECRET: &str = "******";

/// 後端 `config.json` 的型別化檢視
///
/// 全部欄位皆為選填，未知欄位保存在 `extra` 中，序列化時原樣寫回。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpt_load: Option<GptLoadSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_api: Option<NewApiSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync: Option<SyncSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_redirect: Option<ModelRedirectSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log: Option<LogSection>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GptLoadSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_key: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewApiSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// `NEW_API` 或 `VELOERA`，決定後端送出的使用者標頭
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_type: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// 後端對上游服務的逾時設定 (毫秒)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_timeout: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_timeout: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelRedirectSection {
    #[serde(default)]
    pub standard_models: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ConfigData {
    pub fn from_value(value: Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }

    /// 是否含有後端遮蔽過的密鑰
    pub fn has_masked_secrets(&self) -> bool {
        let auth_key = self.gpt_load.as_ref().and_then(|g| g.auth_key.as_deref());
        let access_token = self.new_api.as_ref().and_then(|n| n.access_token.as_deref());

        [auth_key, access_token]
            .into_iter()
            .flatten()
            .any(|secret| secret == MASKED_SECRET)
    }
}
