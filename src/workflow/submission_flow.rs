//! 问题提交流程 - 流程层
//!
//! 核心职责：定义"一次提交"的完整处理流程
//!
//! 状态顺序：
//! 1. Validating（本地校验，短路）
//! 2. UploadingImage（仅当选了图片）
//! 3. Writing（单次远程创建，远端分配记录键）
//! 4. 成功 → 重置草稿；失败 → 默认保留草稿供重试
//!
//! 原 App 有两个近似重复的提交屏幕（AddPhoto / AddQuestion），
//! 校验与重置语义互相矛盾；这里统一成一个流程，用 SubmissionOptions
//! 的开关表达两者的差异。

use anyhow::Result;
use chrono::Utc;
use tracing::{info, warn};

use crate::clients::{ImageStorage, PostDatabase};
use crate::config::Config;
use crate::error::{SubmitError, ValidationError};
use crate::models::{assemble_post, NewPost, QuestionDraft};
use crate::workflow::submission_ctx::SubmissionCtx;

/// 提交流程的配置开关
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionOptions {
    /// 是否要求管理员权限（原 AddQuestion 的行为）
    pub require_moderator: bool,
    /// 失败后是否清空草稿（原 AddPhoto 的行为；默认保留，便于重试）
    pub reset_on_failure: bool,
}

impl Default for SubmissionOptions {
    fn default() -> Self {
        Self {
            require_moderator: true,
            reset_on_failure: false,
        }
    }
}

impl SubmissionOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            require_moderator: config.require_moderator,
            reset_on_failure: config.reset_on_failure,
        }
    }
}

/// 提交前的本地校验
///
/// 按固定顺序执行，第一个失败即返回（短路，不累积）：
/// 权限 → 描述 → 各选项 → 正确选项 → 分类。
/// 只做 trim 后的非空检查，不修改草稿内容。
pub fn validate(
    ctx: &SubmissionCtx,
    draft: &QuestionDraft,
    options: &SubmissionOptions,
) -> Result<(), ValidationError> {
    if options.require_moderator && !ctx.is_moderator {
        return Err(ValidationError::NotAuthorized);
    }

    if draft.description.trim().is_empty() {
        return Err(ValidationError::EmptyQuestion);
    }

    for (label, text) in draft.choices.labeled() {
        if text.trim().is_empty() {
            return Err(ValidationError::EmptyChoice { label });
        }
    }

    // 正确选项必须已选择，且指向当前存在的选项
    if draft.correct_choice.is_empty() || !draft.choices.contains_key(&draft.correct_choice) {
        return Err(ValidationError::NoCorrectChoice);
    }

    if draft.category.is_empty() {
        return Err(ValidationError::NoCategory);
    }

    Ok(())
}

/// 问题提交流程
///
/// 职责：
/// - 编排校验 → 上传 → 组装 → 写库 → 重置
/// - 不持有网络连接以外的资源
/// - 每次失败都是终态，不自动重试，不可取消
pub struct SubmissionFlow<S, D> {
    storage: S,
    database: D,
    options: SubmissionOptions,
}

impl<S: ImageStorage, D: PostDatabase> SubmissionFlow<S, D> {
    /// 创建新的提交流程
    pub fn new(storage: S, database: D, options: SubmissionOptions) -> Self {
        Self {
            storage,
            database,
            options,
        }
    }

    /// 提交一份草稿
    ///
    /// # 参数
    /// - `ctx`: 会话上下文（作者 + 权限）
    /// - `draft`: 待提交的草稿；成功后被重置为初始状态
    ///
    /// # 返回
    /// 返回实际写入数据库的载荷
    pub async fn submit(
        &self,
        ctx: &SubmissionCtx,
        draft: &mut QuestionDraft,
    ) -> Result<NewPost, SubmitError> {
        let result = self.run_states(ctx, draft).await;

        match &result {
            Ok(_) => {
                draft.reset();
                info!("✓ 问题创建成功");
            }
            Err(e) => {
                warn!("⚠️ 提交失败 (阶段: {}): {}", e.phase(), e);
                if self.options.reset_on_failure {
                    draft.reset();
                }
            }
        }

        result
    }

    /// 依次执行各个状态；任何一步失败都中止整个流程
    async fn run_states(
        &self,
        ctx: &SubmissionCtx,
        draft: &QuestionDraft,
    ) -> Result<NewPost, SubmitError> {
        // ========== 状态 1: Validating ==========
        validate(ctx, draft, &self.options)?;

        // ========== 状态 2: UploadingImage（可选） ==========
        let image_url = match &draft.image {
            Some(image) => {
                info!("📤 正在上传图片 ({})...", image.uri);
                let url = self
                    .storage
                    .upload_image(&image.base64)
                    .await
                    .map_err(SubmitError::ImageUpload)?;
                info!("✓ 图片上传完成: {}", url);
                Some(url)
            }
            None => None,
        };

        // ========== 状态 3: Writing ==========
        info!("📝 正在创建问题: {}", ctx);
        let post = assemble_post(draft, ctx.author(), image_url, Utc::now());

        self.database
            .create_post(&post)
            .await
            .map_err(SubmitError::DatabaseWrite)?;

        Ok(post)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{ImageStorage, PostDatabase};
    use crate::error::ClientError;
    use crate::models::{ImageDraft, Post};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    /// 记录所有远端调用的内存桩
    #[derive(Default)]
    struct RecordingRemote {
        /// 调用顺序："upload" / "write"
        calls: Mutex<Vec<&'static str>>,
        /// 每次写库的完整 JSON 载荷
        writes: Mutex<Vec<serde_json::Value>>,
        /// 上传返回的地址
        upload_url: String,
        fail_upload: bool,
        fail_write: bool,
    }

    impl RecordingRemote {
        fn with_upload_url(url: &str) -> Self {
            Self {
                upload_url: url.to_string(),
                ..Default::default()
            }
        }

        fn fake_error() -> ClientError {
            ClientError::BadStatus {
                endpoint: "test".to_string(),
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            }
        }
    }

    #[async_trait]
    impl ImageStorage for Arc<RecordingRemote> {
        async fn upload_image(&self, _base64: &str) -> Result<String, ClientError> {
            self.calls.lock().unwrap().push("upload");
            if self.fail_upload {
                return Err(RecordingRemote::fake_error());
            }
            Ok(self.upload_url.clone())
        }
    }

    #[async_trait]
    impl PostDatabase for Arc<RecordingRemote> {
        async fn create_post(&self, post: &NewPost) -> Result<(), ClientError> {
            self.calls.lock().unwrap().push("write");
            if self.fail_write {
                return Err(RecordingRemote::fake_error());
            }
            self.writes
                .lock()
                .unwrap()
                .push(serde_json::to_value(post).unwrap());
            Ok(())
        }

        async fn fetch_posts(&self) -> Result<Vec<Post>, ClientError> {
            Ok(Vec::new())
        }
    }

    fn flow_with(
        remote: &Arc<RecordingRemote>,
        options: SubmissionOptions,
    ) -> SubmissionFlow<Arc<RecordingRemote>, Arc<RecordingRemote>> {
        SubmissionFlow::new(Arc::clone(remote), Arc::clone(remote), options)
    }

    fn moderator_ctx() -> SubmissionCtx {
        SubmissionCtx::new("joao".to_string(), "joao@example.com".to_string(), true)
    }

    fn valid_draft() -> QuestionDraft {
        let mut draft = QuestionDraft::new();
        draft.description = "Capital of France?".to_string();
        draft.choices.set_text(0, "Paris");
        draft.choices.set_text(1, "Lyon");
        draft.correct_choice = "choiceA".to_string();
        draft.category = "Geografia".to_string();
        draft
    }

    // ========== 校验顺序 ==========

    #[test]
    fn test_validation_order_is_short_circuit() {
        let options = SubmissionOptions::default();
        let ctx = SubmissionCtx::new("ana".to_string(), "ana@example.com".to_string(), false);

        // 全部字段都不合法时，第一个失败的检查（权限）决定错误
        let draft = QuestionDraft::new();
        assert_eq!(
            validate(&ctx, &draft, &options),
            Err(ValidationError::NotAuthorized)
        );

        // 权限通过后轮到描述
        let ctx = moderator_ctx();
        assert_eq!(
            validate(&ctx, &draft, &options),
            Err(ValidationError::EmptyQuestion)
        );
    }

    #[test]
    fn test_validation_trims_whitespace() {
        let options = SubmissionOptions::default();
        let ctx = moderator_ctx();

        let mut draft = valid_draft();
        draft.description = "   ".to_string();
        assert_eq!(
            validate(&ctx, &draft, &options),
            Err(ValidationError::EmptyQuestion)
        );

        let mut draft = valid_draft();
        draft.choices.set_text(1, "  ");
        assert_eq!(
            validate(&ctx, &draft, &options),
            Err(ValidationError::EmptyChoice { label: 'B' })
        );
    }

    #[test]
    fn test_validation_checks_added_choice_slots() {
        let options = SubmissionOptions::default();
        let ctx = moderator_ctx();

        // 加了第三个选项但没填，必须拦住
        let mut draft = valid_draft();
        draft.choices.add_choice();
        assert_eq!(
            validate(&ctx, &draft, &options),
            Err(ValidationError::EmptyChoice { label: 'C' })
        );
    }

    #[test]
    fn test_validation_correct_choice_must_exist() {
        let options = SubmissionOptions::default();
        let ctx = moderator_ctx();

        let mut draft = valid_draft();
        draft.correct_choice = String::new();
        assert_eq!(
            validate(&ctx, &draft, &options),
            Err(ValidationError::NoCorrectChoice)
        );

        // 标签指向不存在的第三个选项
        let mut draft = valid_draft();
        draft.correct_choice = "choiceC".to_string();
        assert_eq!(
            validate(&ctx, &draft, &options),
            Err(ValidationError::NoCorrectChoice)
        );
    }

    #[test]
    fn test_validation_requires_category() {
        let options = SubmissionOptions::default();
        let ctx = moderator_ctx();

        let mut draft = valid_draft();
        draft.category = String::new();
        assert_eq!(
            validate(&ctx, &draft, &options),
            Err(ValidationError::NoCategory)
        );
    }

    #[test]
    fn test_validation_can_skip_moderator_check() {
        let options = SubmissionOptions {
            require_moderator: false,
            reset_on_failure: true,
        };
        let ctx = SubmissionCtx::new("ana".to_string(), "ana@example.com".to_string(), false);

        assert!(validate(&ctx, &valid_draft(), &options).is_ok());
    }

    // ========== 流程行为 ==========

    #[tokio::test]
    async fn test_non_moderator_makes_no_network_call() {
        let remote = Arc::new(RecordingRemote::default());
        let flow = flow_with(&remote, SubmissionOptions::default());
        let ctx = SubmissionCtx::new("ana".to_string(), "ana@example.com".to_string(), false);
        let mut draft = valid_draft();

        let result = flow.submit(&ctx, &mut draft).await;

        assert!(matches!(
            result,
            Err(SubmitError::Validation(ValidationError::NotAuthorized))
        ));
        assert!(remote.calls.lock().unwrap().is_empty());
        // 默认策略：失败后草稿原样保留
        assert_eq!(draft.description, "Capital of France?");
    }

    #[tokio::test]
    async fn test_valid_submit_writes_exactly_once() {
        let remote = Arc::new(RecordingRemote::default());
        let flow = flow_with(&remote, SubmissionOptions::default());
        let mut draft = valid_draft();

        flow.submit(&moderator_ctx(), &mut draft).await.unwrap();

        let writes = remote.writes.lock().unwrap();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0]["question"]["correctChoice"], "choiceA");
        assert_eq!(writes[0]["question"]["categorie"], "Geografia");
        assert_eq!(writes[0]["question"]["choices"]["choiceA"], "Paris");
        assert_eq!(writes[0]["user"]["username"], "joao");
    }

    #[tokio::test]
    async fn test_upload_precedes_write_and_url_lands_in_payload() {
        let url = "https://storage.example.com/img/42.jpg";
        let remote = Arc::new(RecordingRemote::with_upload_url(url));
        let flow = flow_with(&remote, SubmissionOptions::default());

        let mut draft = valid_draft();
        draft.image = Some(ImageDraft {
            uri: "/tmp/42.jpg".to_string(),
            base64: "aGVsbG8=".to_string(),
        });

        flow.submit(&moderator_ctx(), &mut draft).await.unwrap();

        assert_eq!(*remote.calls.lock().unwrap(), vec!["upload", "write"]);
        let writes = remote.writes.lock().unwrap();
        assert_eq!(writes[0]["question"]["image"], url);
    }

    #[tokio::test]
    async fn test_no_image_means_no_upload_and_absent_field() {
        let remote = Arc::new(RecordingRemote::default());
        let flow = flow_with(&remote, SubmissionOptions::default());
        let mut draft = valid_draft();

        flow.submit(&moderator_ctx(), &mut draft).await.unwrap();

        assert_eq!(*remote.calls.lock().unwrap(), vec!["write"]);
        let writes = remote.writes.lock().unwrap();
        assert!(writes[0]["question"].get("image").is_none());
    }

    #[tokio::test]
    async fn test_success_resets_draft_to_initial_state() {
        let remote = Arc::new(RecordingRemote::default());
        let flow = flow_with(&remote, SubmissionOptions::default());
        let mut draft = valid_draft();
        draft.choices.add_choice();
        draft.choices.set_text(2, "Marseille");
        draft.correct_choice = "choiceB".to_string();

        flow.submit(&moderator_ctx(), &mut draft).await.unwrap();

        assert_eq!(draft.choices.len(), 2);
        assert!(draft.choices.get(0).unwrap().text.is_empty());
        assert!(draft.choices.get(1).unwrap().text.is_empty());
        assert!(draft.category.is_empty());
        assert!(draft.correct_choice.is_empty());
        assert!(draft.image.is_none());
    }

    #[tokio::test]
    async fn test_upload_failure_aborts_before_write() {
        let remote = Arc::new(RecordingRemote {
            fail_upload: true,
            ..Default::default()
        });
        let flow = flow_with(&remote, SubmissionOptions::default());

        let mut draft = valid_draft();
        draft.image = Some(ImageDraft {
            uri: "/tmp/42.jpg".to_string(),
            base64: "aGVsbG8=".to_string(),
        });

        let result = flow.submit(&moderator_ctx(), &mut draft).await;

        assert!(matches!(result, Err(SubmitError::ImageUpload(_))));
        assert_eq!(*remote.calls.lock().unwrap(), vec!["upload"]);
        // 失败后图片草稿仍在，可直接重试
        assert!(draft.image.is_some());
    }

    #[tokio::test]
    async fn test_write_failure_preserves_draft_by_default() {
        let remote = Arc::new(RecordingRemote {
            fail_write: true,
            ..Default::default()
        });
        let flow = flow_with(&remote, SubmissionOptions::default());
        let mut draft = valid_draft();

        let result = flow.submit(&moderator_ctx(), &mut draft).await;

        assert!(matches!(result, Err(SubmitError::DatabaseWrite(_))));
        assert_eq!(draft.description, "Capital of France?");
        assert_eq!(draft.category, "Geografia");
    }

    #[tokio::test]
    async fn test_reset_on_failure_clears_draft() {
        let remote = Arc::new(RecordingRemote {
            fail_write: true,
            ..Default::default()
        });
        let options = SubmissionOptions {
            require_moderator: false,
            reset_on_failure: true,
        };
        let flow = flow_with(&remote, options);
        let mut draft = valid_draft();

        let result = flow.submit(&moderator_ctx(), &mut draft).await;

        assert!(result.is_err());
        assert!(draft.description.is_empty());
        assert_eq!(draft.choices.len(), 2);
    }
}
