use serde::{Deserialize, Serialize};

/// 测验
///
/// 题目来源（LLM 生成）输出的结构，运行期间只读。
/// 缺少 `mcq` 或 `fill` 时视为空列表。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    #[serde(default)]
    pub mcq: Vec<McQuestion>,
    #[serde(default)]
    pub fill: Vec<FillQuestion>,
}

/// 选择题
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct McQuestion {
    #[serde(rename = "question")]
    pub prompt: String,
    #[serde(default)]
    pub options: Vec<String>,
    /// 正确选项，可能为空（为空时不评分）
    #[serde(default)]
    pub answer: String,
}

/// 填空题
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillQuestion {
    #[serde(rename = "question")]
    pub prompt: String,
    #[serde(default)]
    pub answer: String,
}

impl Quiz {
    pub fn new(mcq: Vec<McQuestion>, fill: Vec<FillQuestion>) -> Self {
        Self { mcq, fill }
    }

    /// 题目总数（不含姓名栏）
    pub fn question_count(&self) -> usize {
        self.mcq.len() + self.fill.len()
    }
}

impl McQuestion {
    pub fn new(
        prompt: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            options: options.into_iter().map(Into::into).collect(),
            answer: answer.into(),
        }
    }
}

impl FillQuestion {
    pub fn new(prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            answer: answer.into(),
        }
    }
}
