use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    /// 後端回傳非 2xx 狀態碼，message 內含回應本文
    #[error("{message}")]
    RequestError {
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("JSON parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("HTTP transport failed: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ClientError {
    pub fn request(status: reqwest::StatusCode, body: &str) -> Self {
        ClientError::RequestError {
            status,
            message: format!("Network response was not ok: {}", body),
        }
    }

    /// 僅 RequestError 帶有 HTTP 狀態碼
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            ClientError::RequestError { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ClientError::RequestError { status, message } => {
                format!("後端回應錯誤 ({}): {}", status, message)
            }
            ClientError::ParseError(_) => "後端回應不是有效的 JSON".to_string(),
            ClientError::TransportError(e) if e.is_connect() => {
                "無法連線到後端服務，請確認服務已啟動且位址正確".to_string()
            }
            ClientError::TransportError(e) => format!("HTTP 請求失敗: {}", e),
            ClientError::IoError(e) => format!("檔案讀寫失敗: {}", e),
            ClientError::ConfigError { .. } | ClientError::InvalidConfigValueError { .. } => {
                format!("配置錯誤: {}", self)
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            ClientError::RequestError { .. } => 2,
            ClientError::TransportError(_) => 3,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_error_message_carries_body_verbatim() {
        let err = ClientError::request(reqwest::StatusCode::INTERNAL_SERVER_ERROR, "boom");
        assert_eq!(err.to_string(), "Network response was not ok: boom");
        assert_eq!(err.status(), Some(reqwest::StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn parse_error_has_no_status() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = ClientError::from(json_err);
        assert!(err.status().is_none());
        assert_eq!(err.exit_code(), 1);
    }
}
