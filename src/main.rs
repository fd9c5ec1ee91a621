use anyhow::Result;
use quiz_question_submit::utils::logging;
use quiz_question_submit::{App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logging::init();

    // 加载配置
    let config = Config::from_env();

    let app = App::initialize(config);

    // `recover <email>` 走密码找回，其余情况走草稿提交
    let mut args = std::env::args().skip(1);
    match (args.next().as_deref(), args.next()) {
        (Some("recover"), Some(email)) => app.recover_password(&email).await,
        _ => app.run().await,
    }
}
