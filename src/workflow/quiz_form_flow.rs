//! 测验表单生成流程 - 流程层
//!
//! 核心职责：定义"一份测验"变成表单的完整流程
//!
//! 流程顺序（严格串行，每一步等待表单服务返回后才进行下一步）：
//! 1. 校验测验（在任何外部调用之前）
//! 2. 创建表单 → 批量创建题目
//! 3. 对齐返回的题目标识
//! 4. 提交评分规则（没有可评分的题目时不提交）
//! 5. 共享给收件人（单个失败只记录，不中断）
//!
//! 创建、对齐、评分失败都会终止流程；已经创建的表单不会回滚。

use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::clients::FormService;
use crate::config::Config;
use crate::error::AppResult;
use crate::models::{Quiz, SharingOutcome, SharingSummary};
use crate::services::{
    build_grading_entries, correlate, sequence_items, validate_quiz, SharingManager,
    ValidationPolicy,
};
use crate::utils::logging::truncate_text;
use crate::workflow::form_ctx::FormCtx;

/// 标题为空时使用的默认标题
pub const DEFAULT_FORM_TITLE: &str = "Generated Quiz Form";

/// 一次运行的结果
#[derive(Debug, Clone, Serialize)]
pub struct FormBuildReport {
    pub form_id: String,
    pub form_link: String,
    pub title: String,
    /// 创建的题目数（含姓名栏）
    pub items_created: usize,
    /// 设置了评分的题目数
    pub graded_items: usize,
    pub sharing: Vec<SharingOutcome>,
}

impl FormBuildReport {
    pub fn sharing_summary(&self) -> SharingSummary {
        SharingSummary::from_outcomes(&self.sharing)
    }
}

/// 测验表单生成流程
///
/// - 编排完整的表单生成流程
/// - 不持有任何跨运行的状态，每次运行相互独立
/// - 只依赖表单服务接口（`FormService`）
pub struct QuizFormFlow {
    service: Arc<dyn FormService>,
    sharing: SharingManager,
    policy: ValidationPolicy,
}

impl QuizFormFlow {
    /// 使用默认设置创建流程（宽松校验，逐个共享）
    pub fn new(service: Arc<dyn FormService>) -> Self {
        Self {
            sharing: SharingManager::new(service.clone()),
            service,
            policy: ValidationPolicy::default(),
        }
    }

    /// 按配置创建流程
    pub fn from_config(service: Arc<dyn FormService>, config: &Config) -> Self {
        Self {
            sharing: SharingManager::new(service.clone())
                .with_max_concurrent(config.max_concurrent_shares),
            service,
            policy: ValidationPolicy::from_strict(config.strict_validation),
        }
    }

    pub fn with_policy(mut self, policy: ValidationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// 运行完整流程
    ///
    /// # 参数
    /// - `quiz`: 测验
    /// - `form_title`: 表单标题（为空时使用默认标题）
    /// - `recipients`: 需要授予编辑权限的邮箱
    ///
    /// # 返回
    /// 返回表单链接和每个收件人的共享结果
    pub async fn run(
        &self,
        quiz: &Quiz,
        form_title: &str,
        recipients: &[String],
    ) -> AppResult<FormBuildReport> {
        // ========== 1. 校验 ==========
        let issues = validate_quiz(quiz, self.policy)?;
        for issue in &issues {
            warn!("⚠️ 测验存在问题（已保留原样）: {}", issue);
        }

        // ========== 2. 创建表单和题目 ==========
        let title = resolve_title(form_title);
        info!("📝 正在创建表单: {}", title);
        let form_id = self.service.create_form(&title).await?;
        let ctx = FormCtx::new(form_id, title);
        info!("{} ✓ 表单创建成功", ctx);

        let specs = sequence_items(quiz);
        info!(
            "{} 📤 正在创建 {} 个题目 (选择题 {}, 填空题 {})",
            ctx,
            specs.len(),
            quiz.mcq.len(),
            quiz.fill.len()
        );
        for spec in &specs {
            debug!(
                "{}   {}. [{}] {}",
                ctx,
                spec.position,
                spec.kind,
                truncate_text(&spec.title, 80)
            );
        }
        let created_ids = self.service.create_items(&ctx.form_id, &specs).await?;

        // ========== 3. 对齐 ==========
        let handles = correlate(&specs, created_ids)?;
        info!("{} ✓ 题目创建成功", ctx);

        // ========== 4. 评分 ==========
        let entries = build_grading_entries(quiz, &handles)?;
        if entries.is_empty() {
            info!("{} 没有可评分的题目，跳过评分设置", ctx);
        } else {
            info!("{} 📤 正在为 {} 个题目设置评分...", ctx, entries.len());
            self.service.update_grading(&ctx.form_id, &entries).await?;
            info!("{} ✓ 评分设置成功", ctx);
        }

        // ========== 5. 共享 ==========
        let sharing = if recipients.is_empty() {
            Vec::new()
        } else {
            info!("{} 📧 正在共享给 {} 个收件人...", ctx, recipients.len());
            self.sharing.share(&ctx.form_id, recipients).await
        };

        let form_link = self.service.edit_link(&ctx.form_id);

        Ok(FormBuildReport {
            form_id: ctx.form_id,
            form_link,
            title: ctx.title,
            items_created: handles.len(),
            graded_items: entries.len(),
            sharing,
        })
    }
}

/// 去掉首尾空白，为空时使用默认标题
pub fn resolve_title(title: &str) -> String {
    let title = title.trim();
    if title.is_empty() {
        DEFAULT_FORM_TITLE.to_string()
    } else {
        title.to_string()
    }
}
