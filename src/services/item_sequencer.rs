//! 题目排序 - 业务能力层
//!
//! 生成创建表单题目的有序列表：姓名栏 → 选择题 → 填空题

use crate::models::{FormItemSpec, ItemKind, Quiz};
use crate::services::option_dedup::dedup_options;

/// 生成待创建的表单题目
///
/// - 第 0 位固定为姓名栏
/// - 第 1..=len(mcq) 位为选择题（选项已去重），保持输入顺序
/// - 之后为填空题，保持输入顺序
///
/// 位置从 0 开始连续编号。去重后选项不足两个的选择题原样保留。
pub fn sequence_items(quiz: &Quiz) -> Vec<FormItemSpec> {
    let mut items = Vec::with_capacity(quiz.question_count() + 1);
    items.push(FormItemSpec::name_field());

    for q in &quiz.mcq {
        items.push(FormItemSpec {
            position: items.len(),
            kind: ItemKind::Mcq,
            title: q.prompt.clone(),
            options: dedup_options(&q.options),
        });
    }

    for q in &quiz.fill {
        items.push(FormItemSpec {
            position: items.len(),
            kind: ItemKind::Fill,
            title: q.prompt.clone(),
            options: Vec::new(),
        });
    }

    items
}
