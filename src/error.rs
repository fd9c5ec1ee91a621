//! 应用程序错误类型
//!
//! 错误分三层：
//! - `ValidationError` - 提交前的本地校验失败（直接展示给用户）
//! - `ClientError` - 远程服务调用失败（网络 / 响应格式）
//! - `SubmitError` - 提交流程对外暴露的错误面，记录失败发生在哪个阶段

use thiserror::Error;

/// 本地校验错误
///
/// 按校验顺序排列；第一个失败的检查会中止提交（短路，不累积）。
/// 软上限（选项数 2-4 的 no-op 封顶）不属于错误，不会出现在这里。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// 当前用户不是管理员，无权创建问题
    #[error("未授权: 只有管理员可以创建问题")]
    NotAuthorized,
    /// 问题描述为空（trim 之后）
    #[error("问题描述不能为空")]
    EmptyQuestion,
    /// 某个已存在的选项为空（trim 之后）
    #[error("选项 {label} 不能为空")]
    EmptyChoice { label: char },
    /// 未选择正确选项，或所选标签超出当前选项范围
    #[error("请选择问题的正确选项")]
    NoCorrectChoice,
    /// 未选择问题分类
    #[error("请选择问题的分类")]
    NoCategory,
}

/// 远程服务调用错误
#[derive(Debug, Error)]
pub enum ClientError {
    /// 网络请求失败
    #[error("请求失败 ({endpoint}): {source}")]
    RequestFailed {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    /// 服务返回非成功状态码
    #[error("服务返回错误状态 ({endpoint}): {status}")]
    BadStatus {
        endpoint: String,
        status: reqwest::StatusCode,
    },
    /// 响应 JSON 解析失败
    #[error("响应解析失败 ({endpoint}): {source}")]
    JsonParseFailed {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    /// 响应缺少必需字段（例如上传接口未返回 imageUrl）
    #[error("响应缺少字段 ({endpoint}): {field}")]
    MissingField {
        endpoint: String,
        field: &'static str,
    },
}

/// 提交流程错误
///
/// 每次提交尝试的任何失败都是终态：不重试，直接反馈给用户。
#[derive(Debug, Error)]
pub enum SubmitError {
    /// 校验阶段失败（草稿保持不变，用户可修改后重试）
    #[error("校验失败: {0}")]
    Validation(#[from] ValidationError),
    /// 图片上传阶段失败（整个流程中止，不会继续写库）
    #[error("图片上传失败: {0}")]
    ImageUpload(#[source] ClientError),
    /// 数据库写入阶段失败
    #[error("创建问题失败: {0}")]
    DatabaseWrite(#[source] ClientError),
}

impl SubmitError {
    /// 失败发生时所处的流程阶段（用于日志）
    pub fn phase(&self) -> &'static str {
        match self {
            SubmitError::Validation(_) => "validating",
            SubmitError::ImageUpload(_) => "uploading_image",
            SubmitError::DatabaseWrite(_) => "writing",
        }
    }
}
