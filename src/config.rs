/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// Firebase 实时数据库根地址
    pub database_url: String,
    /// 图片上传服务地址（Cloud Function）
    pub storage_url: String,
    /// Firebase Auth REST 地址
    pub auth_url: String,
    /// Firebase Web API Key（密码找回接口使用）
    pub firebase_api_key: String,
    /// 数据库访问令牌（附在 posts.json?auth= 上）
    pub auth_token: String,
    /// 当前登录用户名
    pub username: String,
    /// 当前登录邮箱
    pub email: String,
    /// 当前用户是否为管理员
    pub is_moderator: bool,
    /// 草稿 TOML 文件存放目录
    pub drafts_folder: String,
    /// 是否要求管理员权限才能提交
    pub require_moderator: bool,
    /// 提交失败后是否清空草稿（默认保留，便于重试）
    pub reset_on_failure: bool,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "https://quizapp-5e02e.firebaseio.com".to_string(),
            storage_url: "https://us-central1-quizapp-5e02e.cloudfunctions.net".to_string(),
            auth_url: "https://identitytoolkit.googleapis.com/v1".to_string(),
            firebase_api_key: String::new(),
            auth_token: String::new(),
            username: String::new(),
            email: String::new(),
            is_moderator: false,
            drafts_folder: "drafts".to_string(),
            require_moderator: true,
            reset_on_failure: false,
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            database_url: std::env::var("DATABASE_URL").unwrap_or(default.database_url),
            storage_url: std::env::var("STORAGE_URL").unwrap_or(default.storage_url),
            auth_url: std::env::var("AUTH_URL").unwrap_or(default.auth_url),
            firebase_api_key: std::env::var("FIREBASE_API_KEY").unwrap_or(default.firebase_api_key),
            auth_token: std::env::var("AUTH_TOKEN").unwrap_or(default.auth_token),
            username: std::env::var("QUIZ_USERNAME").unwrap_or(default.username),
            email: std::env::var("QUIZ_EMAIL").unwrap_or(default.email),
            is_moderator: std::env::var("IS_MODERATOR").ok().and_then(|v| v.parse().ok()).unwrap_or(default.is_moderator),
            drafts_folder: std::env::var("DRAFTS_FOLDER").unwrap_or(default.drafts_folder),
            require_moderator: std::env::var("REQUIRE_MODERATOR").ok().and_then(|v| v.parse().ok()).unwrap_or(default.require_moderator),
            reset_on_failure: std::env::var("RESET_ON_FAILURE").ok().and_then(|v| v.parse().ok()).unwrap_or(default.reset_on_failure),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }
}
