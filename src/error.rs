use thiserror::Error;

use crate::models::ItemKind;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 输入测验不合法
    #[error("校验错误: {0}")]
    Validation(#[from] ValidationError),
    /// 创建题目后的标识对齐失败
    #[error("对齐错误: {0}")]
    Correlation(#[from] CorrelationError),
    /// 表单服务调用失败
    #[error("服务错误: {0}")]
    Service(#[from] ServiceError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
}

/// 测验校验错误
///
/// 在任何外部调用之前发现，直接终止本次运行。
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// 题干为空
    #[error("第 {index} 道{kind}题的题干为空")]
    EmptyPrompt { kind: ItemKind, index: usize },
    /// 去重后选项不足两个（仅严格模式）
    #[error("第 {index} 道选择题去重后只剩 {count} 个选项")]
    TooFewOptions { index: usize, count: usize },
    /// 答案不在选项中（仅严格模式）
    #[error("第 {index} 道选择题的答案 '{answer}' 不在选项中")]
    AnswerNotAmongOptions { index: usize, answer: String },
}

/// 服务返回的标识与请求的题目无法对齐
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CorrelationError {
    /// 返回的标识数量与请求的题目数量不一致
    #[error("请求创建 {requested} 个题目，服务返回 {returned} 个标识")]
    LengthMismatch { requested: usize, returned: usize },
    /// 某一类题目的数量与测验中的题目数量不一致
    #[error("{kind}题: 测验中有 {expected} 道，已创建 {actual} 个")]
    GroupMismatch {
        kind: ItemKind,
        expected: usize,
        actual: usize,
    },
}

/// 表单服务调用错误
#[derive(Debug, Error)]
pub enum ServiceError {
    /// 网络请求失败
    #[error("请求失败 ({operation}): {source}")]
    RequestFailed {
        operation: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 服务返回错误响应
    #[error("服务返回错误响应 ({operation}): status={status}, message={message}")]
    BadResponse {
        operation: String,
        status: u16,
        message: String,
    },
    /// 响应缺少必要字段
    #[error("响应格式不正确 ({operation}): {detail}")]
    MalformedResponse { operation: String, detail: String },
    /// JSON 解析失败
    #[error("JSON解析失败: {0}")]
    JsonParseFailed(#[from] serde_json::Error),
}

/// 配置错误
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
    /// 环境变量不存在
    #[error("环境变量 {var_name} 不存在")]
    EnvVarNotFound { var_name: String },
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 文件不存在
    #[error("文件不存在: {path}")]
    NotFound { path: String },
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 不支持的文件格式
    #[error("不支持的文件格式: {path}")]
    UnsupportedFormat { path: String },
    /// 测验内容解析失败
    #[error("解析失败 ({path}): {message}")]
    ParseFailed { path: String, message: String },
}

// ========== 便捷构造函数 ==========

impl ServiceError {
    /// 创建请求失败错误
    pub fn request_failed(
        operation: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        ServiceError::RequestFailed {
            operation: operation.into(),
            source: Box::new(source),
        }
    }

    /// 创建错误响应
    pub fn bad_response(operation: impl Into<String>, status: u16, message: impl Into<String>) -> Self {
        ServiceError::BadResponse {
            operation: operation.into(),
            status,
            message: message.into(),
        }
    }

    /// 创建响应格式错误
    pub fn malformed(operation: impl Into<String>, detail: impl Into<String>) -> Self {
        ServiceError::MalformedResponse {
            operation: operation.into(),
            detail: detail.into(),
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
