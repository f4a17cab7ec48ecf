use serde::Serialize;

/// 共享权限角色
///
/// 收件人一律获得编辑权限
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessRole {
    Writer,
}

impl AccessRole {
    /// Drive 权限接口中的角色名
    pub fn as_str(self) -> &'static str {
        match self {
            AccessRole::Writer => "writer",
        }
    }
}

/// 单个收件人的共享结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SharingOutcome {
    pub email: String,
    pub granted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SharingOutcome {
    pub fn granted(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            granted: true,
            error: None,
        }
    }

    pub fn failed(email: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            granted: false,
            error: Some(error.into()),
        }
    }
}

/// 共享结果统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SharingSummary {
    pub granted: usize,
    pub failed: usize,
}

impl SharingSummary {
    pub fn from_outcomes(outcomes: &[SharingOutcome]) -> Self {
        let granted = outcomes.iter().filter(|o| o.granted).count();
        Self {
            granted,
            failed: outcomes.len() - granted,
        }
    }

    /// 有收件人但全部失败
    pub fn all_failed(&self) -> bool {
        self.failed > 0 && self.granted == 0
    }
}
