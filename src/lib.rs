//! # Quiz Question Submit
//!
//! 问答社区 App 的客户端核心：问题草稿的编辑、校验、提交与信息流展示。
//! 数据持久化与认证全部委托给远端服务（实时数据库、对象存储、认证服务），
//! 本地不落盘。
//!
//! ## 架构设计
//!
//! 本系统采用分层架构：
//!
//! ### ① 客户端层（Clients）
//! - `clients/` - 远程服务 REST 客户端，只暴露能力
//! - `DatabaseClient` - 帖子写入 / 信息流读取
//! - `StorageClient` - 图片上传
//! - `AuthClient` - 密码找回
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单个对象
//! - `ImageService` - 把本地图片读成待上传草稿
//! - `FeedService` - 拉取信息流
//! - `post_renderer` - 纯展示，把帖子排版成文本
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一次提交"的完整处理流程
//! - `SubmissionCtx` - 会话上下文（作者 + 权限）
//! - `SubmissionFlow` - 流程编排（校验 → 上传 → 写库 → 重置）
//!
//! ### ④ 编排层（App）
//! - `app` - 加载草稿文件，逐份顺序提交，展示信息流

pub mod app;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use app::App;
pub use clients::{AuthClient, DatabaseClient, ImageStorage, PostDatabase, StorageClient};
pub use config::Config;
pub use error::{ClientError, SubmitError, ValidationError};
pub use models::{ChoiceList, ImageDraft, NewPost, Post, QuestionDraft};
pub use workflow::{SubmissionCtx, SubmissionFlow, SubmissionOptions};
