/// 实时数据库客户端
///
/// 封装所有对 Firebase 实时数据库 REST 接口的调用逻辑
use std::collections::BTreeMap;

use async_trait::async_trait;
use tracing::debug;

use crate::clients::PostDatabase;
use crate::config::Config;
use crate::error::ClientError;
use crate::models::{NewPost, Post};

/// 实时数据库客户端
#[derive(Debug, Clone)]
pub struct DatabaseClient {
    http: reqwest::Client,
    base_url: String,
    auth_token: String,
}

impl DatabaseClient {
    /// 创建新的数据库客户端
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.database_url.trim_end_matches('/').to_string(),
            auth_token: config.auth_token.clone(),
        }
    }

    /// 共用已有的 HTTP 连接池
    pub fn with_http(config: &Config, http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: config.database_url.trim_end_matches('/').to_string(),
            auth_token: config.auth_token.clone(),
        }
    }

    fn posts_url(&self) -> String {
        format!("{}/posts.json?auth={}", self.base_url, self.auth_token)
    }
}

#[async_trait]
impl PostDatabase for DatabaseClient {
    async fn create_post(&self, post: &NewPost) -> Result<(), ClientError> {
        const ENDPOINT: &str = "posts.json";

        debug!("写入帖子: {}", serde_json::to_string(post).unwrap_or_default());

        let response = self
            .http
            .post(self.posts_url())
            .json(post)
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

        // 响应里只有远端分配的记录键，本地用不到
        Ok(())
    }

    async fn fetch_posts(&self) -> Result<Vec<Post>, ClientError> {
        const ENDPOINT: &str = "posts.json";

        let response = self
            .http
            .get(self.posts_url())
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

        // 空库时 Firebase 返回 JSON null
        let map: Option<BTreeMap<String, Post>> =
            response
                .json()
                .await
                .map_err(|source| ClientError::JsonParseFailed {
                    endpoint: ENDPOINT.to_string(),
                    source,
                })?;

        Ok(Post::from_database_map(map.unwrap_or_default()))
    }
}
