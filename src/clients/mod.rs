//! 远程服务客户端
//!
//! 每个客户端封装一类远端调用；流程层只依赖这里的 trait，
//! 测试时可以换成内存实现。

pub mod auth_client;
pub mod database_client;
pub mod storage_client;

pub use auth_client::AuthClient;
pub use database_client::DatabaseClient;
pub use storage_client::StorageClient;

use async_trait::async_trait;

use crate::error::ClientError;
use crate::models::{NewPost, Post};

/// 帖子数据库能力
#[async_trait]
pub trait PostDatabase {
    /// 创建一条新帖子；记录键由远端分配，本地不消费响应内容
    async fn create_post(&self, post: &NewPost) -> Result<(), ClientError>;

    /// 拉取全部帖子（最新在前）
    async fn fetch_posts(&self) -> Result<Vec<Post>, ClientError>;
}

/// 图片存储能力
#[async_trait]
pub trait ImageStorage {
    /// 上传 base64 图片，返回可访问的图片地址
    async fn upload_image(&self, base64: &str) -> Result<String, ClientError>;
}
