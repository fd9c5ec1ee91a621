//! 提交上下文
//!
//! 原 App 里令牌和当前用户资料是隐式全局状态；这里改成显式上下文，
//! 随登录会话创建，作为参数传给提交流程。

use std::fmt::Display;

use crate::config::Config;
use crate::models::PostAuthor;

/// 提交上下文
///
/// 包含一次提交所需的全部会话信息
#[derive(Debug, Clone)]
pub struct SubmissionCtx {
    /// 当前用户名
    pub username: String,

    /// 当前用户邮箱
    pub email: String,

    /// 当前用户是否为管理员
    pub is_moderator: bool,
}

impl SubmissionCtx {
    /// 创建新的提交上下文
    pub fn new(username: String, email: String, is_moderator: bool) -> Self {
        Self {
            username,
            email,
            is_moderator,
        }
    }

    /// 从配置构造（配置里放的就是当前登录用户）
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.username.clone(),
            config.email.clone(),
            config.is_moderator,
        )
    }

    /// 转成载荷里的作者信息
    pub fn author(&self) -> PostAuthor {
        PostAuthor {
            username: self.username.clone(),
            email: self.email.clone(),
        }
    }
}

impl Display for SubmissionCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[用户 {} <{}> 管理员: {}]",
            self.username, self.email, self.is_moderator
        )
    }
}
