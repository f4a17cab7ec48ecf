//! 评分规则构建 - 业务能力层
//!
//! 为有答案的题目生成评分规则：
//! - 选择题：只接受去掉首尾空白后的答案
//! - 填空题：接受答案的所有变体
//!
//! 答案为空（或只有空白）的题目直接跳过。

use std::collections::BTreeSet;

use crate::error::CorrelationError;
use crate::models::{FormItemHandle, GradingEntry, ItemKind, Quiz};
use crate::services::answer_variants::generate_fill_variants;

/// 每道题的分值
pub const POINT_VALUE: u32 = 1;

/// 构建评分规则
///
/// # 参数
/// - `quiz`: 原始测验
/// - `handles`: 已对齐的题目标识
///
/// # 返回
/// 返回评分规则列表（选择题在前，填空题在后），可能为空
pub fn build_grading_entries(
    quiz: &Quiz,
    handles: &[FormItemHandle],
) -> Result<Vec<GradingEntry>, CorrelationError> {
    let mcq_handles = handles_of_kind(handles, ItemKind::Mcq, quiz.mcq.len())?;
    let fill_handles = handles_of_kind(handles, ItemKind::Fill, quiz.fill.len())?;

    let mut entries = Vec::new();

    for (q, handle) in quiz.mcq.iter().zip(mcq_handles) {
        let correct = q.answer.trim();
        if correct.is_empty() {
            continue;
        }
        entries.push(GradingEntry {
            external_id: handle.external_id.clone(),
            position: handle.position,
            point_value: POINT_VALUE,
            accepted_answers: BTreeSet::from([correct.to_string()]),
        });
    }

    for (q, handle) in quiz.fill.iter().zip(fill_handles) {
        let correct = q.answer.trim();
        if correct.is_empty() {
            continue;
        }
        entries.push(GradingEntry {
            external_id: handle.external_id.clone(),
            position: handle.position,
            point_value: POINT_VALUE,
            accepted_answers: generate_fill_variants(correct),
        });
    }

    Ok(entries)
}

/// 取出某一类题目的标识，并检查数量与测验一致
fn handles_of_kind(
    handles: &[FormItemHandle],
    kind: ItemKind,
    expected: usize,
) -> Result<Vec<&FormItemHandle>, CorrelationError> {
    let selected: Vec<&FormItemHandle> = handles.iter().filter(|h| h.kind == kind).collect();
    if selected.len() != expected {
        return Err(CorrelationError::GroupMismatch {
            kind,
            expected,
            actual: selected.len(),
        });
    }
    Ok(selected)
}
