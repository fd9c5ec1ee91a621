/// 认证服务客户端
///
/// 只封装密码找回这一个调用；登录本身发生在 App 之外，
/// 这里拿到的是已有的会话令牌。
use serde_json::json;
use tracing::debug;

use crate::config::Config;
use crate::error::ClientError;

/// 认证服务客户端
#[derive(Debug, Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl AuthClient {
    /// 创建新的认证客户端
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.auth_url.trim_end_matches('/').to_string(),
            api_key: config.firebase_api_key.clone(),
        }
    }

    /// 发送密码找回邮件
    ///
    /// 只消费成功 / 失败，不解析响应内容。
    pub async fn send_password_reset(&self, email: &str) -> Result<(), ClientError> {
        const ENDPOINT: &str = "accounts:sendOobCode";

        debug!("发送密码找回邮件: {}", email);

        let response = self
            .http
            .post(format!(
                "{}/{}?key={}",
                self.base_url, ENDPOINT, self.api_key
            ))
            .json(&json!({
                "requestType": "PASSWORD_RESET",
                "email": email,
            }))
            .send()
            .await
            .map_err(|source| ClientError::RequestFailed {
                endpoint: ENDPOINT.to_string(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(ClientError::BadStatus {
                endpoint: ENDPOINT.to_string(),
                status: response.status(),
            });
        }

        Ok(())
    }
}
