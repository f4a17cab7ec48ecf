use serde::Serialize;
use std::collections::BTreeSet;

use crate::models::ItemId;

/// 评分规则
///
/// 告诉表单服务某个题目的分值以及哪些答案得分。
/// `accepted_answers` 不会为空。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GradingEntry {
    pub external_id: ItemId,
    /// 题目在表单中的位置，更新题目时需要
    pub position: usize,
    pub point_value: u32,
    pub accepted_answers: BTreeSet<String>,
}
