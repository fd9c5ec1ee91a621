/// 日志工具模块
///
/// 初始化 tracing 订阅者，并提供启动横幅 / 统计输出的辅助函数
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// 默认 info 级别，可用 RUST_LOG 覆盖
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// 记录程序启动信息
///
/// # 参数
/// - `drafts_folder`: 草稿目录
/// - `require_moderator`: 是否要求管理员权限
pub fn log_startup(drafts_folder: &str, require_moderator: bool) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 问题草稿提交模式");
    info!("📁 草稿目录: {}", drafts_folder);
    info!("🔒 管理员校验: {}", if require_moderator { "开" } else { "关" });
    info!("{}", "=".repeat(60));
}

/// 记录草稿加载信息
pub fn log_drafts_loaded(total: usize) {
    info!("✓ 找到 {} 份待提交的草稿", total);
    info!("💡 草稿将逐份顺序提交，互不重叠\n");
}

/// 打印最终统计信息
///
/// # 参数
/// - `success`: 成功数量
/// - `failed`: 失败数量
/// - `total`: 总数
pub fn print_final_stats(success: usize, failed: usize, total: usize) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部提交完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}/{}", success, total);
    info!("❌ 失败: {}", failed);
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
