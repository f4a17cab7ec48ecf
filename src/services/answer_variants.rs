//! 填空题答案变体生成 - 业务能力层
//!
//! 把一个正确答案扩展为一组可接受的写法（大小写、空格、逗号格式）。
//! 只做字面变换，不做语义归一化（重音、数字等价等）。

use regex::Regex;
use std::collections::BTreeSet;

/// 生成填空题答案的可接受变体
///
/// # 参数
/// - `answer`: 正确答案（内部会先去掉首尾空白）
///
/// # 返回
/// 返回变体集合，至少包含去掉首尾空白后的答案本身
pub fn generate_fill_variants(answer: &str) -> BTreeSet<String> {
    let base = answer.trim();

    let mut variants = BTreeSet::new();
    variants.insert(base.to_string());
    if let Ok(re) = Regex::new(r"\s*,\s*") {
        variants.insert(re.replace_all(base, ", ").into_owned());
    }
    variants.insert(title_case(base));
    variants.insert(base.to_lowercase());
    variants.insert(base.to_uppercase());
    variants.insert(base.replace(' ', ""));
    variants.insert(base.replace(" ,", ",").replace(", ", ","));
    variants
}

/// 每个单词首字母大写，其余小写
///
/// 单词指连续的字母，其他字符都视为分隔符（"o'neil" → "O'Neil"）
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut in_word = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            result.push(c);
            in_word = false;
        }
    }

    result
}
