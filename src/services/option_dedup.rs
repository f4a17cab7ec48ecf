//! 选项去重 - 业务能力层
//!
//! 按精确字符串比较去掉重复选项，保留首次出现的顺序

use crate::utils::OrderedSet;

/// 去掉重复选项
///
/// 比较区分大小写和空白；空输入返回空列表。
pub fn dedup_options(options: &[String]) -> Vec<String> {
    options
        .iter()
        .cloned()
        .collect::<OrderedSet<String>>()
        .into_vec()
}
