//! 信息流服务 - 业务能力层
//!
//! 只负责"拉取信息流"能力：读取全部帖子并保持最新在前的顺序。
//! 渲染交给 post_renderer，写入交给提交流程。

use anyhow::{Context, Result};
use tracing::info;

use crate::clients::PostDatabase;
use crate::models::Post;

/// 信息流服务
pub struct FeedService<D> {
    database: D,
}

impl<D: PostDatabase> FeedService<D> {
    /// 创建新的信息流服务
    pub fn new(database: D) -> Self {
        Self { database }
    }

    /// 拉取信息流
    pub async fn fetch_feed(&self) -> Result<Vec<Post>> {
        let posts = self
            .database
            .fetch_posts()
            .await
            .context("拉取信息流失败")?;

        info!("✓ 信息流加载完成，共 {} 条帖子", posts.len());

        Ok(posts)
    }
}
