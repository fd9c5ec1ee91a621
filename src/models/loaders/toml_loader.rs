//! 草稿 TOML 加载器
//!
//! 没有移动端表单的命令行环境里，草稿以 TOML 文件形式写好放进目录：
//!
//! ```toml
//! description = "Capital of France?"
//! choices = ["Paris", "Lyon"]
//! correct_choice = "A"
//! category = "Geografia"
//! image_path = "photos/paris.jpg"   # 可选
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{info, warn};

use crate::models::choice::ChoiceList;
use crate::models::draft::QuestionDraft;

/// TOML 草稿文件的原始结构
#[derive(Debug, Clone, Deserialize)]
pub struct DraftFile {
    pub description: String,
    /// 按顺序排列的选项文本，2-4 个
    pub choices: Vec<String>,
    /// 正确选项标签，接受 "A" 或 "choiceA" 两种写法
    pub correct_choice: String,
    pub category: String,
    /// 要附带上传的本地图片路径；缺省等同于用户取消选图
    #[serde(default)]
    pub image_path: Option<String>,
}

impl DraftFile {
    /// 转成可提交的草稿
    ///
    /// 选项数量不在 [2, 4] 内时报错（文件是手写的，这里要提前拦住）。
    /// 图片在这里还没有读取，由 ImageService 在提交前载入。
    pub fn into_draft(self) -> Result<(QuestionDraft, Option<String>)> {
        let choices = ChoiceList::from_texts(&self.choices)
            .with_context(|| format!("选项数量必须在 2-4 之间，实际 {}", self.choices.len()))?;

        let correct_choice = normalize_correct_choice(&self.correct_choice);

        let draft = QuestionDraft {
            description: self.description,
            choices,
            category: self.category,
            correct_choice,
            image: None,
        };

        Ok((draft, self.image_path))
    }
}

/// 把 "A" 归一化成 "choiceA"；已是完整写法的原样返回
fn normalize_correct_choice(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.len() == 1 {
        format!("choice{}", trimmed.to_ascii_uppercase())
    } else {
        trimmed.to_string()
    }
}

/// 加载单个草稿文件
pub async fn load_draft_file(path: &Path) -> Result<DraftFile> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("读取草稿文件失败: {}", path.display()))?;

    let draft: DraftFile = toml::from_str(&content)
        .with_context(|| format!("解析草稿文件失败: {}", path.display()))?;

    Ok(draft)
}

/// 扫描目录，加载全部草稿文件
///
/// 单个文件解析失败只警告并跳过，不中断其余草稿。
pub async fn load_all_draft_files(folder: &str) -> Result<Vec<DraftFile>> {
    let mut drafts = Vec::new();

    let mut entries = tokio::fs::read_dir(folder)
        .await
        .with_context(|| format!("草稿目录不存在: {}", folder))?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("toml") {
            continue;
        }

        match load_draft_file(&path).await {
            Ok(draft) => {
                info!("✓ 已加载草稿: {}", path.display());
                drafts.push(draft);
            }
            Err(e) => {
                warn!("⚠️ 跳过无法解析的草稿 {}: {:#}", path.display(), e);
            }
        }
    }

    Ok(drafts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_draft_toml() {
        let content = r#"
            description = "Capital of France?"
            choices = ["Paris", "Lyon"]
            correct_choice = "A"
            category = "Geografia"
        "#;

        let file: DraftFile = toml::from_str(content).unwrap();
        let (draft, image_path) = file.into_draft().unwrap();

        assert_eq!(draft.description, "Capital of France?");
        assert_eq!(draft.choices.len(), 2);
        assert_eq!(draft.correct_choice, "choiceA");
        assert_eq!(draft.category, "Geografia");
        assert!(image_path.is_none());
    }

    #[test]
    fn test_correct_choice_accepts_both_spellings() {
        assert_eq!(normalize_correct_choice("A"), "choiceA");
        assert_eq!(normalize_correct_choice("d"), "choiceD");
        assert_eq!(normalize_correct_choice("choiceB"), "choiceB");
    }

    #[test]
    fn test_too_many_choices_rejected() {
        let content = r#"
            description = "q"
            choices = ["a", "b", "c", "d", "e"]
            correct_choice = "A"
            category = "Geografia"
        "#;

        let file: DraftFile = toml::from_str(content).unwrap();
        assert!(file.into_draft().is_err());
    }
}
