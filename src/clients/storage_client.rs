/// 图片存储客户端
///
/// 封装对图片上传服务（Cloud Function）的调用逻辑
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::clients::ImageStorage;
use crate::config::Config;
use crate::error::ClientError;

/// 上传接口的响应体
#[derive(Debug, Deserialize)]
struct UploadResponse {
    #[serde(rename = "imageUrl")]
    image_url: Option<String>,
}

/// 图片存储客户端
#[derive(Debug, Clone)]
pub struct StorageClient {
    http: reqwest::Client,
    base_url: String,
}

impl StorageClient {
    /// 创建新的存储客户端
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.storage_url.trim_end_matches('/').to_string(),
        }
    }

    /// 共用已有的 HTTP 连接池
    pub fn with_http(config: &Config, http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: config.storage_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ImageStorage for StorageClient {
    async fn upload_image(&self, base64: &str) -> Result<String, ClientError> {
        const ENDPOINT: &str = "uploadImage";

        debug!("上传图片，base64 长度: {}", base64.len());

        let response = self
            .http
            .post(format!("{}/{}", self.base_url, ENDPOINT))
            .json(&json!({ "image": base64 }))
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

        let body: UploadResponse =
            response
                .json()
                .await
                .map_err(|source| ClientError::JsonParseFailed {
                    endpoint: ENDPOINT.to_string(),
                    source,
                })?;

        body.image_url.ok_or(ClientError::MissingField {
            endpoint: ENDPOINT.to_string(),
            field: "imageUrl",
        })
    }
}
