use crate::error::{AppResult, FileError};
use crate::models::quiz::Quiz;
use std::path::Path;
use tokio::fs;

/// 测验文件格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizFormat {
    Toml,
    Json,
}

impl QuizFormat {
    /// 根据扩展名判断格式
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Some(QuizFormat::Toml),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Some(QuizFormat::Json),
            _ => None,
        }
    }
}

/// 从文件加载测验
///
/// # 参数
/// - `path`: TOML 或 JSON 文件路径
///
/// # 返回
/// 返回解析后的 `Quiz`
pub async fn load_quiz_file(path: &Path) -> AppResult<Quiz> {
    let path_str = path.display().to_string();

    let format = QuizFormat::from_path(path).ok_or_else(|| FileError::UnsupportedFormat {
        path: path_str.clone(),
    })?;

    if !path.exists() {
        return Err(FileError::NotFound { path: path_str }.into());
    }

    let content = fs::read_to_string(path)
        .await
        .map_err(|source| FileError::ReadFailed {
            path: path_str.clone(),
            source,
        })?;

    let quiz = parse_quiz(&content, format).map_err(|message| FileError::ParseFailed {
        path: path_str.clone(),
        message,
    })?;

    tracing::info!(
        "成功加载 {}: {} 道选择题, {} 道填空题",
        path_str,
        quiz.mcq.len(),
        quiz.fill.len()
    );

    Ok(quiz)
}

/// 按指定格式解析测验内容
pub fn parse_quiz(content: &str, format: QuizFormat) -> Result<Quiz, String> {
    match format {
        QuizFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        QuizFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
    }
}
