//! 图片服务 - 业务能力层
//!
//! 移动端选图器的桌面替身：把本地文件读进内存并编码成 base64。
//! 只产出 ImageDraft，不负责上传。

use std::path::Path;

use anyhow::{Context, Result};
use data_encoding::BASE64;
use tracing::debug;

use crate::models::ImageDraft;

/// 图片服务
pub struct ImageService;

impl ImageService {
    pub fn new() -> Self {
        Self
    }

    /// 选取图片
    ///
    /// # 参数
    /// - `path`: 图片文件路径；None 等同于用户取消选图
    ///
    /// # 返回
    /// 返回待上传的图片草稿；取消时返回 None
    pub async fn pick_image(&self, path: Option<&str>) -> Result<Option<ImageDraft>> {
        let Some(path) = path else {
            return Ok(None);
        };

        let bytes = tokio::fs::read(Path::new(path))
            .await
            .with_context(|| format!("读取图片失败: {}", path))?;

        debug!("已读取图片 {} ({} 字节)", path, bytes.len());

        Ok(Some(ImageDraft {
            uri: path.to_string(),
            base64: BASE64.encode(&bytes),
        }))
    }
}

impl Default for ImageService {
    fn default() -> Self {
        Self::new()
    }
}
