//! 帖子渲染 - 业务能力层
//!
//! 纯展示：把一条帖子排版成文本块。没有状态，没有业务逻辑，
//! 作答状态由调用方给出（远端维护，这里只显示）。

use crate::models::Post;

/// 当前用户对某帖的作答状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerState {
    /// 尚未作答（或状态未知）
    Unanswered,
    /// 答对
    Correct,
    /// 答错
    Wrong,
}

impl AnswerState {
    fn indicator(self) -> &'static str {
        match self {
            AnswerState::Unanswered => "· 未作答",
            AnswerState::Correct => "✅ 已答对",
            AnswerState::Wrong => "❌ 已答错",
        }
    }
}

/// 没有图片时显示的占位标记
const PLACEHOLDER_IMAGE: &str = "[默认配图]";

/// 把一条帖子渲染成多行文本
///
/// 组成部分：图片（或占位）、发布时间、问题与选项、作者、作答状态、评论数。
pub fn render_post(post: &Post, answer_state: AnswerState) -> String {
    let mut lines = Vec::new();

    lines.push("─".repeat(48));

    match &post.question.image {
        Some(url) => lines.push(format!("🖼️  {}", url)),
        None => lines.push(format!("🖼️  {}", PLACEHOLDER_IMAGE)),
    }

    lines.push(format!(
        "🕒 {}",
        post.created_at.format("%Y-%m-%d %H:%M")
    ));

    lines.push(format!("❓ {}", post.question.description));
    for (key, text) in &post.question.choices {
        // "choiceA" → "A"
        let label = key.strip_prefix("choice").unwrap_or(key.as_str());
        lines.push(format!("   {}. {}", label, text));
    }

    lines.push(format!(
        "👤 {} <{}>   {}",
        post.user.username,
        post.user.email,
        answer_state.indicator()
    ));

    lines.push(format!("💬 {} 条评论", post.comments.len()));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Author, Comment, PostQuestion};
    use chrono::Utc;
    use std::collections::BTreeMap;

    fn sample_post(image: Option<String>) -> Post {
        let mut choices = BTreeMap::new();
        choices.insert("choiceA".to_string(), "Paris".to_string());
        choices.insert("choiceB".to_string(), "Lyon".to_string());

        Post {
            id: "-Aaa".to_string(),
            created_at: Utc::now(),
            user: Author {
                username: "maria".to_string(),
                email: "maria@example.com".to_string(),
            },
            question: PostQuestion {
                image,
                categorie: "Geografia".to_string(),
                description: "Capital of France?".to_string(),
                choices,
                correct_choice: "choiceA".to_string(),
            },
            comments: vec![Comment {
                username: "joao".to_string(),
                comment: "fácil!".to_string(),
            }],
        }
    }

    #[test]
    fn test_render_uses_placeholder_without_image() {
        let rendered = render_post(&sample_post(None), AnswerState::Unanswered);
        assert!(rendered.contains(PLACEHOLDER_IMAGE));
        assert!(rendered.contains("Capital of France?"));
        assert!(rendered.contains("A. Paris"));
        assert!(rendered.contains("B. Lyon"));
        assert!(rendered.contains("1 条评论"));
    }

    #[test]
    fn test_render_shows_image_url_when_present() {
        let url = "https://storage.example.com/img/1.jpg";
        let rendered = render_post(&sample_post(Some(url.to_string())), AnswerState::Correct);
        assert!(rendered.contains(url));
        assert!(!rendered.contains(PLACEHOLDER_IMAGE));
        assert!(rendered.contains("已答对"));
    }
}
