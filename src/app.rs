//! 编排层
//!
//! 负责把各层组装起来：加载草稿 → 逐份顺序提交 → 拉取并展示信息流。
//! 流程内的两个网络调用各自完整结束后才进行下一步，
//! 提交之间也不重叠，不存在并发的流程实例。

use anyhow::Result;
use tracing::{error, info, warn};

use crate::clients::{AuthClient, DatabaseClient, StorageClient};
use crate::config::Config;
use crate::models::{load_all_draft_files, DraftFile};
use crate::services::{render_post, AnswerState, FeedService, ImageService};
use crate::utils::logging;
use crate::workflow::{SubmissionCtx, SubmissionFlow, SubmissionOptions};

/// 应用主结构
pub struct App {
    config: Config,
    ctx: SubmissionCtx,
    flow: SubmissionFlow<StorageClient, DatabaseClient>,
    image_service: ImageService,
    feed_service: FeedService<DatabaseClient>,
    auth_client: AuthClient,
}

/// 提交统计
#[derive(Debug, Default)]
struct SubmissionStats {
    success: usize,
    failed: usize,
    total: usize,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Self {
        // 所有客户端共用一个连接池
        let http = reqwest::Client::new();
        let options = SubmissionOptions::from_config(&config);

        Self {
            ctx: SubmissionCtx::from_config(&config),
            flow: SubmissionFlow::new(
                StorageClient::with_http(&config, http.clone()),
                DatabaseClient::with_http(&config, http.clone()),
                options,
            ),
            image_service: ImageService::new(),
            feed_service: FeedService::new(DatabaseClient::with_http(&config, http)),
            auth_client: AuthClient::new(&config),
            config,
        }
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<()> {
        logging::log_startup(&self.config.drafts_folder, self.config.require_moderator);

        // 加载所有待提交的草稿
        let drafts = load_all_draft_files(&self.config.drafts_folder).await?;

        if drafts.is_empty() {
            warn!("⚠️ 没有找到待提交的草稿文件，跳过提交阶段");
        } else {
            logging::log_drafts_loaded(drafts.len());
            let stats = self.submit_all(drafts).await;
            logging::print_final_stats(stats.success, stats.failed, stats.total);
        }

        // 展示最新的信息流
        self.show_feed().await
    }

    /// 逐份顺序提交草稿
    ///
    /// 严格串行：前一份提交完整结束（成功或失败）后才开始下一份。
    async fn submit_all(&self, drafts: Vec<DraftFile>) -> SubmissionStats {
        let mut stats = SubmissionStats {
            total: drafts.len(),
            ..Default::default()
        };

        for (index, draft_file) in drafts.into_iter().enumerate() {
            match self.submit_one(index + 1, draft_file).await {
                Ok(()) => stats.success += 1,
                Err(e) => {
                    error!("[草稿 {}] ❌ 提交失败: {:#}", index + 1, e);
                    stats.failed += 1;
                }
            }
        }

        stats
    }

    /// 提交单份草稿
    async fn submit_one(&self, index: usize, draft_file: DraftFile) -> Result<()> {
        let (mut draft, image_path) = draft_file.into_draft()?;

        info!(
            "\n[草稿 {}] 📝 开始提交: {}",
            index,
            logging::truncate_text(&draft.description, 60)
        );

        // 详细日志（如果启用）
        if self.config.verbose_logging {
            for (label, text) in draft.choices.labeled() {
                info!("[草稿 {}]   {}. {}", index, label, text);
            }
            info!(
                "[草稿 {}]   分类: {} | 正确选项: {}",
                index, draft.category, draft.correct_choice
            );
        }

        // 选图（路径缺省等同于取消）
        draft.image = self.image_service.pick_image(image_path.as_deref()).await?;

        self.flow.submit(&self.ctx, &mut draft).await?;

        Ok(())
    }

    /// 拉取并渲染信息流
    async fn show_feed(&self) -> Result<()> {
        info!("\n📰 正在加载信息流...");

        let posts = self.feed_service.fetch_feed().await?;

        for post in &posts {
            // 作答状态由远端按用户维护，这个入口没有登录态，统一按未作答展示
            println!("{}", render_post(post, AnswerState::Unanswered));
        }

        Ok(())
    }

    /// 发送密码找回邮件
    ///
    /// 成功与失败都只给用户一个总括提示，与原屏幕一致。
    pub async fn recover_password(&self, email: &str) -> Result<()> {
        match self.auth_client.send_password_reset(email).await {
            Ok(()) => {
                info!("✓ 验证邮件已发送至 {}", email);
                Ok(())
            }
            Err(e) => {
                warn!("⚠️ 密码找回失败: {}", e);
                Err(e.into())
            }
        }
    }
}
