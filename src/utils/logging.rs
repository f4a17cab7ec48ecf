//! 日志工具模块
//!
//! 提供日志初始化、格式化和输出的辅助函数

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::models::{SharingOutcome, SharingSummary};

/// 初始化日志
///
/// 优先使用 `RUST_LOG`，否则按 `verbose` 选择 debug 或 info 级别。
/// 重复调用不会报错（测试中可能多次初始化）。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
///
/// # 参数
/// - `quiz_file`: 测验文件路径
/// - `recipients`: 收件人数量
pub fn log_startup(quiz_file: &str, recipients: usize) {
    info!("{}", "=".repeat(60));
    info!(
        "🚀 程序启动 - 测验表单生成 ({})",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("📄 测验文件: {}", quiz_file);
    info!("📧 共享收件人: {} 个", recipients);
    info!("{}", "=".repeat(60));
}

/// 记录共享结果
///
/// 全部失败时单独提示一次
pub fn log_sharing_outcomes(outcomes: &[SharingOutcome]) {
    let summary = SharingSummary::from_outcomes(outcomes);

    let granted: Vec<&str> = outcomes
        .iter()
        .filter(|o| o.granted)
        .map(|o| o.email.as_str())
        .collect();
    if !granted.is_empty() {
        info!("✅ 已授予编辑权限: {}", granted.join(", "));
    }

    for outcome in outcomes.iter().filter(|o| !o.granted) {
        warn!(
            "❌ 授予 {} 编辑权限失败: {}",
            outcome.email,
            outcome.error.as_deref().unwrap_or("未知错误")
        );
    }

    if summary.all_failed() {
        warn!("❌ 所有收件人的权限授予均失败");
    }
}

/// 打印最终结果
///
/// # 参数
/// - `form_link`: 表单编辑链接
/// - `graded`: 设置了评分的题目数量
/// - `summary`: 共享统计
pub fn print_final_stats(form_link: &str, graded: usize, summary: &SharingSummary) {
    info!("\n{}", "=".repeat(60));
    info!("📊 测验表单创建完成");
    info!("{}", "=".repeat(60));
    info!("📝 表单链接: {}", form_link);
    info!("✅ 自动评分题目: {}", graded);
    info!("📧 共享: 成功 {}, 失败 {}", summary.granted, summary.failed);
    info!("{}", "=".repeat(60));
    info!("ℹ️ 如需收集学生邮箱，请在表单的回复设置中开启“收集电子邮件地址”");
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
