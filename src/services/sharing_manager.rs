//! 共享管理 - 业务能力层
//!
//! 逐个授予收件人访问权限。单个收件人失败只记录在结果里，
//! 不影响其他收件人，也不影响整个表单的创建结果。不重试。

use futures::stream::{self, StreamExt};
use std::sync::Arc;

use crate::clients::FormService;
use crate::models::{AccessRole, SharingOutcome};

/// 共享管理
pub struct SharingManager {
    service: Arc<dyn FormService>,
    role: AccessRole,
    max_concurrent: usize,
}

impl SharingManager {
    /// 创建共享管理（默认授予编辑权限，一次一个）
    pub fn new(service: Arc<dyn FormService>) -> Self {
        Self {
            service,
            role: AccessRole::Writer,
            max_concurrent: 1,
        }
    }

    /// 设置同时进行的授权请求数（至少为 1）
    pub fn with_max_concurrent(mut self, max_concurrent: usize) -> Self {
        self.max_concurrent = max_concurrent.max(1);
        self
    }

    /// 向所有收件人授予访问权限
    ///
    /// # 参数
    /// - `form_id`: 表单 ID
    /// - `recipients`: 收件人邮箱
    ///
    /// # 返回
    /// 每个收件人一条结果，顺序与输入一致
    pub async fn share(&self, form_id: &str, recipients: &[String]) -> Vec<SharingOutcome> {
        stream::iter(recipients)
            .map(|email| self.share_one(form_id, email))
            .buffered(self.max_concurrent)
            .collect::<Vec<_>>()
            .await
    }

    async fn share_one(&self, form_id: &str, email: &str) -> SharingOutcome {
        match self.service.grant_access(form_id, email, self.role).await {
            Ok(()) => SharingOutcome::granted(email),
            Err(e) => SharingOutcome::failed(email, e.to_string()),
        }
    }
}

/// 解析逗号分隔的收件人列表
///
/// 去掉首尾空白，丢弃空项
pub fn parse_recipients(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|email| !email.is_empty())
        .map(str::to_string)
        .collect()
}
