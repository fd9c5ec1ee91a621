//! 问题草稿
//!
//! 草稿只存在于内存中：屏幕挂载时创建，用户编辑，提交成功后丢弃。
//! 持久化完全由远端数据库负责，本地不落盘。

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::choice::{choice_key, ChoiceList};

/// 已选取但尚未上传的图片
///
/// 只在"选取"和"提交"之间存在；提交成功后清空。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageDraft {
    /// 本地来源（文件路径）
    pub uri: String,
    /// 图片字节的 base64 编码，上传接口的载荷
    pub base64: String,
}

/// 正在编辑的问题草稿
///
/// 对应原 App 里 AddQuestion 屏幕上的全部可编辑状态：
/// 描述、选项列表、分类、正确选项、已选图片。
#[derive(Debug, Clone, Default)]
pub struct QuestionDraft {
    pub description: String,
    pub choices: ChoiceList,
    /// 分类（例如 "Geografia"）；空串表示未选择
    pub category: String,
    /// 正确选项的字段名（例如 "choiceA"）；空串表示未选择
    pub correct_choice: String,
    pub image: Option<ImageDraft>,
}

impl QuestionDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// 恢复初始状态：两个空选项，其余全部清空
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

/// 发往数据库的完整载荷
///
/// 字段名是远端数据库的既有 schema（包括 categorie 的拼写），
/// 序列化结果必须逐字段一致。
#[derive(Debug, Clone, Serialize)]
pub struct NewPost {
    pub user: PostAuthor,
    pub created_at: DateTime<Utc>,
    pub question: QuestionBody,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostAuthor {
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionBody {
    /// 上传成功后的图片地址；未上传时整个字段缺省（不是 null）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub categorie: String,
    pub description: String,
    /// choiceA..choiceD → 选项文本
    pub choices: BTreeMap<String, String>,
    #[serde(rename = "correctChoice")]
    pub correct_choice: String,
}

/// 组装提交载荷
///
/// 纯合并：把分类、表单字段（含选项映射）、正确选项和可选的图片地址
/// 拼成一个载荷对象。不做 trim、不做校验，那些属于校验阶段。
pub fn assemble_post(
    draft: &QuestionDraft,
    author: PostAuthor,
    image_url: Option<String>,
    created_at: DateTime<Utc>,
) -> NewPost {
    let choices = draft
        .choices
        .labeled()
        .enumerate()
        .map(|(i, (_, text))| (choice_key(i), text.to_string()))
        .collect();

    NewPost {
        user: author,
        created_at,
        question: QuestionBody {
            image: image_url,
            categorie: draft.category.clone(),
            description: draft.description.clone(),
            choices,
            correct_choice: draft.correct_choice.clone(),
        },
    }
}
