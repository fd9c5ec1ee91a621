//! 信息流读模型
//!
//! 只读：本地从不修改已发布的帖子，评论和作答状态都由远端维护。

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// 一条评论
#[derive(Debug, Clone, Deserialize)]
pub struct Comment {
    pub username: String,
    pub comment: String,
}

/// 帖子作者
#[derive(Debug, Clone, Deserialize)]
pub struct Author {
    pub username: String,
    pub email: String,
}

/// 帖子里的问题体
///
/// 远端数据是手工录入的，任何字段都可能缺失，全部给默认值。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostQuestion {
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub categorie: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub choices: BTreeMap<String, String>,
    #[serde(default, rename = "correctChoice")]
    pub correct_choice: String,
}

/// 已发布的帖子：问题 + 互动元数据
#[derive(Debug, Clone, Deserialize)]
pub struct Post {
    /// 数据库分配的记录键
    #[serde(default)]
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub user: Author,
    pub question: PostQuestion,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Post {
    /// 把数据库返回的 id → 帖子 映射摊平成按时间倒序的列表（最新在前）
    pub fn from_database_map(map: BTreeMap<String, Post>) -> Vec<Post> {
        let mut posts: Vec<Post> = map
            .into_iter()
            .map(|(id, mut post)| {
                post.id = id;
                post
            })
            .collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        posts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post_json(created_at: &str) -> serde_json::Value {
        serde_json::json!({
            "created_at": created_at,
            "user": { "username": "maria", "email": "maria@example.com" },
            "question": {
                "categorie": "Geografia",
                "description": "Capital of France?",
                "choices": { "choiceA": "Paris", "choiceB": "Lyon" },
                "correctChoice": "choiceA"
            }
        })
    }

    #[test]
    fn test_deserialize_minimal_post() {
        let post: Post = serde_json::from_value(post_json("2020-06-01T12:00:00Z")).unwrap();
        assert_eq!(post.user.username, "maria");
        assert_eq!(post.question.correct_choice, "choiceA");
        assert!(post.question.image.is_none());
        assert!(post.comments.is_empty());
    }

    #[test]
    fn test_from_database_map_orders_newest_first() {
        let mut map = BTreeMap::new();
        map.insert(
            "-Aaa".to_string(),
            serde_json::from_value::<Post>(post_json("2020-06-01T12:00:00Z")).unwrap(),
        );
        map.insert(
            "-Bbb".to_string(),
            serde_json::from_value::<Post>(post_json("2020-06-02T12:00:00Z")).unwrap(),
        );

        let posts = Post::from_database_map(map);

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, "-Bbb");
        assert_eq!(posts[1].id, "-Aaa");
    }
}
