//! 表单处理上下文
//!
//! 封装"我正在处理哪张表单"这一信息，用于日志前缀

use std::fmt::Display;

/// 表单处理上下文
#[derive(Debug, Clone)]
pub struct FormCtx {
    /// 表单ID
    pub form_id: String,

    /// 表单标题
    pub title: String,
}

impl FormCtx {
    pub fn new(form_id: String, title: String) -> Self {
        Self { form_id, title }
    }
}

impl Display for FormCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[表单 ID#{} 标题#{}]", self.form_id, self.title)
    }
}
