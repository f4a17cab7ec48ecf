use crate::clients::{FormService, GoogleFormsClient};
use crate::config::Config;
use crate::models::load_quiz_file;
use crate::utils::logging::{log_sharing_outcomes, log_startup, print_final_stats};
use crate::workflow::{FormBuildReport, QuizFormFlow};
use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info};

/// 应用主结构
pub struct App {
    config: Config,
    flow: QuizFormFlow,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        config.validate().context("配置不完整")?;

        log_startup(&config.quiz_file, config.recipients.len());

        let service: Arc<dyn FormService> = Arc::new(GoogleFormsClient::new(&config));
        let flow = QuizFormFlow::from_config(service, &config);

        Ok(Self { config, flow })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<FormBuildReport> {
        info!("\n📁 正在加载测验...");
        let quiz = load_quiz_file(Path::new(&self.config.quiz_file))
            .await
            .with_context(|| format!("无法加载测验: {}", self.config.quiz_file))?;

        let report = match self
            .flow
            .run(&quiz, &self.config.form_title, &self.config.recipients)
            .await
        {
            Ok(report) => report,
            Err(e) => {
                error!("❌ 表单生成失败: {}", e);
                return Err(e).context("表单生成失败");
            }
        };

        log_sharing_outcomes(&report.sharing);
        print_final_stats(&report.form_link, report.graded_items, &report.sharing_summary());

        if self.config.verbose_logging {
            info!("运行结果: {}", serde_json::to_string_pretty(&report)?);
        }

        Ok(report)
    }
}
