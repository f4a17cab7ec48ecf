use serde::{Deserialize, Serialize};
use std::fmt;

/// 表单题目类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ItemKind {
    /// 姓名栏（固定位于第 0 位）
    Name,
    /// 选择题
    Mcq,
    /// 填空题
    Fill,
}

impl ItemKind {
    pub fn name(self) -> &'static str {
        match self {
            ItemKind::Name => "姓名",
            ItemKind::Mcq => "选择",
            ItemKind::Fill => "填空",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 待创建的表单题目
///
/// `position` 从 0 开始连续编号，0 固定为姓名栏。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormItemSpec {
    pub position: usize,
    pub kind: ItemKind,
    pub title: String,
    /// 仅选择题有选项
    pub options: Vec<String>,
}

impl FormItemSpec {
    pub fn name_field() -> Self {
        Self {
            position: 0,
            kind: ItemKind::Name,
            title: "Name".to_string(),
            options: Vec::new(),
        }
    }
}

/// 表单服务分配的题目标识
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// 已创建的题目：请求位置与服务端标识的对应关系
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormItemHandle {
    pub position: usize,
    pub kind: ItemKind,
    pub external_id: ItemId,
}
