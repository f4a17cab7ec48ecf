//! 测验校验 - 业务能力层
//!
//! 在任何外部调用之前检查输入测验。
//! 题干为空总是错误；选项不足与答案不在选项中按校验策略处理。

use crate::error::ValidationError;
use crate::models::{ItemKind, Quiz};
use crate::services::option_dedup::dedup_options;

/// 校验策略
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationPolicy {
    /// 有问题的选择题原样保留，只返回警告
    #[default]
    Lenient,
    /// 遇到第一个问题即返回错误
    Strict,
}

impl ValidationPolicy {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            ValidationPolicy::Strict
        } else {
            ValidationPolicy::Lenient
        }
    }
}

/// 校验测验
///
/// 题干为空的题目在两种策略下都直接返回错误，不会作为无标题题目交给表单服务。
///
/// # 参数
/// - `quiz`: 待校验的测验
/// - `policy`: 校验策略
///
/// # 返回
/// 宽松模式下返回发现的问题列表（作为警告）；严格模式下有问题直接返回错误
pub fn validate_quiz(
    quiz: &Quiz,
    policy: ValidationPolicy,
) -> Result<Vec<ValidationError>, ValidationError> {
    for (i, q) in quiz.mcq.iter().enumerate() {
        if q.prompt.trim().is_empty() {
            return Err(ValidationError::EmptyPrompt {
                kind: ItemKind::Mcq,
                index: i + 1,
            });
        }
    }
    for (j, q) in quiz.fill.iter().enumerate() {
        if q.prompt.trim().is_empty() {
            return Err(ValidationError::EmptyPrompt {
                kind: ItemKind::Fill,
                index: j + 1,
            });
        }
    }

    let mut issues = Vec::new();

    for (i, q) in quiz.mcq.iter().enumerate() {
        let options = dedup_options(&q.options);

        if options.len() < 2 {
            issues.push(ValidationError::TooFewOptions {
                index: i + 1,
                count: options.len(),
            });
        }

        let answer = q.answer.trim();
        if !answer.is_empty() && !options.iter().any(|o| o == answer) {
            issues.push(ValidationError::AnswerNotAmongOptions {
                index: i + 1,
                answer: answer.to_string(),
            });
        }
    }

    if policy == ValidationPolicy::Strict {
        if let Some(first) = issues.into_iter().next() {
            return Err(first);
        }
        return Ok(Vec::new());
    }

    Ok(issues)
}
