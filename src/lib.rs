//! # Quiz Form Builder
//!
//! 把一份测验（选择题 + 填空题）生成带自动评分的在线表单，并共享给指定邮箱
//!
//! ## 架构设计
//!
//! ### ① 接口层（Clients）
//! - `clients/` - 表单服务接口及其实现，只暴露能力
//! - `FormService` - 创建表单 / 创建题目 / 更新评分 / 授予权限
//! - `GoogleFormsClient` - 基于 Google Forms 与 Drive REST API 的实现
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，都是不访问外部的纯函数
//! - `dedup_options` / `generate_fill_variants` - 选项去重、答案变体
//! - `sequence_items` / `correlate` / `build_grading_entries` - 排序、对齐、评分
//! - `SharingManager` - 逐个授予权限，收集每个收件人的结果
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一份测验"的完整处理流程
//! - `QuizFormFlow` - 校验 → 创建 → 对齐 → 评分 → 共享
//!
//! ### ④ 应用层
//! - `App` - 加载配置与测验文件，调用流程并输出结果
//!
//! ## 模块结构

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
pub use clients::{FormService, GoogleFormsClient};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{Quiz, SharingOutcome};
pub use workflow::{FormBuildReport, QuizFormFlow};
