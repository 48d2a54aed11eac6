use crate::config::ClientConfig;
use crate::utils::error::{ClientError, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, Response};
use serde::Serialize;
use serde_json::Value;

pub const DEFAULT_BASE_URL: &str = "http://localhost:7000";

/// gpt-api-sync 管理後端的 HTTP 用戶端
///
/// 每個方法對應後端一條路由，發出單一請求並以 [`handle_response`] 驗證結果。
/// 不重試、不快取；clone 之間共用 reqwest 的連線池。
#[derive(Debug, Clone)]
pub struct SyncApiClient {
    client: Client,
    base_url: String,
}

impl Default for SyncApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl SyncApiClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::with_base_url(config.base_url.as_str())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, method: Method, path: &str, body: Option<Vec<u8>>) -> Result<Value> {
        let mut request = self.client.request(method.clone(), self.url(path));
        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response = request.send().await?;
        tracing::debug!("{} {} -> {}", method, path, response.status());

        handle_response(response).await
    }

    pub async fn get_service_info(&self) -> Result<Value> {
        self.send(Method::GET, "/", None).await
    }

    pub async fn get_service_status(&self) -> Result<Value> {
        self.send(Method::GET, "/status", None).await
    }

    /// gpt-load 的分組清單
    pub async fn get_gpt_load_info(&self) -> Result<Value> {
        self.send(Method::GET, "/api/gpt-load", None).await
    }

    /// new-api 的渠道清單
    pub async fn get_new_api_info(&self) -> Result<Value> {
        self.send(Method::GET, "/api/new-api", None).await
    }

    /// 目前的後端配置，敏感欄位由後端以 `******` 遮蔽
    pub async fn get_config(&self) -> Result<Value> {
        self.send(Method::GET, "/config", None).await
    }

    pub async fn reload_config(&self) -> Result<Value> {
        self.send(Method::POST, "/config/reload", None).await
    }

    /// 以 JSON 本文覆寫後端配置
    ///
    /// 序列化失敗時回傳 `ParseError`，且不會送出任何請求。
    pub async fn update_config<T: Serialize + ?Sized>(&self, config: &T) -> Result<Value> {
        let body = serde_json::to_vec(config)?;
        self.send(Method::PUT, "/config", Some(body)).await
    }

    pub async fn sync_channels(&self) -> Result<Value> {
        self.send(Method::POST, "/sync", None).await
    }
}

/// 共用的回應驗證
///
/// 非 2xx 時讀取本文並回傳 `RequestError`；否則將本文解析為 JSON。
pub async fn handle_response(response: Response) -> Result<Value> {
    let status = response.status();
    if !status.is_success() {
        let error_text = response.text().await?;
        return Err(ClientError::request(status, &error_text));
    }

    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_url_is_local_backend() {
        let client = SyncApiClient::new();
        assert_eq!(client.base_url(), "http://localhost:7000");
        assert_eq!(client.url("/"), "http://localhost:7000/");
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = SyncApiClient::with_base_url("http://127.0.0.1:9000//");
        assert_eq!(client.url("/config/reload"), "http://127.0.0.1:9000/config/reload");
    }

    #[tokio::test]
    async fn unserializable_config_fails_before_sending() {
        use std::collections::HashMap;

        // 非字串鍵的 map 無法序列化為 JSON 物件
        let mut bad: HashMap<(u8, u8), u8> = HashMap::new();
        bad.insert((1, 2), 3);

        // 埠 9 (discard) 不會被連到，因為請求不應該送出
        let client = SyncApiClient::with_base_url("http://127.0.0.1:9");
        let err = client.update_config(&bad).await.unwrap_err();
        assert!(matches!(err, ClientError::ParseError(_)));
    }
}
