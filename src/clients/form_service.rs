//! 表单服务接口
//!
//! 流程只依赖这个 trait，具体实现（Google Forms、测试用的内存实现）在外部注入。

use async_trait::async_trait;

use crate::error::ServiceError;
use crate::models::{AccessRole, FormItemSpec, GradingEntry, ItemId};

/// 表单服务
#[async_trait]
pub trait FormService: Send + Sync {
    /// 创建测验表单，返回表单 ID
    ///
    /// 表单标题设置为 `title`，并开启测验模式。
    async fn create_form(&self, title: &str) -> Result<String, ServiceError>;

    /// 批量创建题目
    ///
    /// 返回的标识与 `items` 顺序一致；整批要么全部成功，要么返回错误。
    async fn create_items(
        &self,
        form_id: &str,
        items: &[FormItemSpec],
    ) -> Result<Vec<ItemId>, ServiceError>;

    /// 批量更新评分规则（整体成功或失败）
    async fn update_grading(
        &self,
        form_id: &str,
        entries: &[GradingEntry],
    ) -> Result<(), ServiceError>;

    /// 授予单个收件人访问权限
    async fn grant_access(
        &self,
        form_id: &str,
        email: &str,
        role: AccessRole,
    ) -> Result<(), ServiceError>;

    /// 表单编辑链接
    fn edit_link(&self, form_id: &str) -> String;
}
