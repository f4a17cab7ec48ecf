use crate::error::ConfigError;
use crate::services::parse_recipients;

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 测验文件（TOML 或 JSON）
    pub quiz_file: String,
    /// 表单标题
    pub form_title: String,
    /// 需要授予编辑权限的邮箱
    pub recipients: Vec<String>,
    /// 授权时是否发送通知邮件
    pub send_notification_email: bool,
    /// 是否严格校验选择题（选项不足、答案不在选项中时拒绝）
    pub strict_validation: bool,
    /// 同时进行的授权请求数
    pub max_concurrent_shares: usize,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    // --- Google API 配置 ---
    /// 访问令牌，由外部凭据提供方获取
    pub access_token: String,
    pub forms_api_base_url: String,
    pub drive_api_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quiz_file: "quiz.toml".to_string(),
            form_title: "Generated Quiz Form".to_string(),
            recipients: Vec::new(),
            send_notification_email: true,
            strict_validation: false,
            max_concurrent_shares: 1,
            verbose_logging: false,
            access_token: String::new(),
            forms_api_base_url: "https://forms.googleapis.com/v1".to_string(),
            drive_api_base_url: "https://www.googleapis.com/drive/v3".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            quiz_file: std::env::var("QUIZ_FILE").unwrap_or(default.quiz_file),
            form_title: std::env::var("FORM_TITLE").unwrap_or(default.form_title),
            recipients: std::env::var("RECIPIENTS").map(|v| parse_recipients(&v)).unwrap_or(default.recipients),
            send_notification_email: std::env::var("SEND_NOTIFICATION_EMAIL").ok().and_then(|v| v.parse().ok()).unwrap_or(default.send_notification_email),
            strict_validation: std::env::var("STRICT_VALIDATION").ok().and_then(|v| v.parse().ok()).unwrap_or(default.strict_validation),
            max_concurrent_shares: std::env::var("MAX_CONCURRENT_SHARES").ok().and_then(|v| v.parse().ok()).unwrap_or(default.max_concurrent_shares),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            access_token: std::env::var("GOOGLE_ACCESS_TOKEN").unwrap_or(default.access_token),
            forms_api_base_url: std::env::var("FORMS_API_BASE_URL").unwrap_or(default.forms_api_base_url),
            drive_api_base_url: std::env::var("DRIVE_API_BASE_URL").unwrap_or(default.drive_api_base_url),
        }
    }

    /// 检查运行所需的配置是否齐全
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.access_token.trim().is_empty() {
            return Err(ConfigError::EnvVarNotFound {
                var_name: "GOOGLE_ACCESS_TOKEN".to_string(),
            });
        }
        if self.max_concurrent_shares == 0 {
            return Err(ConfigError::EnvVarParseFailed {
                var_name: "MAX_CONCURRENT_SHARES".to_string(),
                value: "0".to_string(),
                expected_type: "正整数".to_string(),
            });
        }
        Ok(())
    }
}
