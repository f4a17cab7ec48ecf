//! Google Forms / Drive 请求体与响应结构
//!
//! 只负责 JSON 结构，不发送请求

use serde::Deserialize;
use serde_json::{json, Value};

use crate::models::{AccessRole, FormItemSpec, GradingEntry, ItemId, ItemKind};

/// 创建表单
pub fn create_form_body(title: &str) -> Value {
    json!({
        "info": { "title": title }
    })
}

/// 开启测验模式
pub fn enable_quiz_request() -> Value {
    json!({
        "updateSettings": {
            "settings": { "quizSettings": { "isQuiz": true } },
            "updateMask": "quizSettings.isQuiz"
        }
    })
}

/// 创建单个题目
///
/// 所有题目都是必答题；选择题为单选且不打乱选项顺序。
pub fn create_item_request(item: &FormItemSpec) -> Value {
    let question = match item.kind {
        ItemKind::Name | ItemKind::Fill => json!({
            "required": true,
            "textQuestion": {}
        }),
        ItemKind::Mcq => {
            let options: Vec<Value> = item
                .options
                .iter()
                .map(|opt| json!({ "value": opt }))
                .collect();
            json!({
                "required": true,
                "choiceQuestion": {
                    "type": "RADIO",
                    "options": options,
                    "shuffle": false
                }
            })
        }
    };

    json!({
        "createItem": {
            "item": {
                "title": item.title,
                "questionItem": { "question": question }
            },
            "location": { "index": item.position }
        }
    })
}

/// 更新单个题目的评分规则
pub fn update_grading_request(entry: &GradingEntry) -> Value {
    let answers: Vec<Value> = entry
        .accepted_answers
        .iter()
        .map(|answer| json!({ "value": answer }))
        .collect();

    json!({
        "updateItem": {
            "item": {
                "itemId": entry.external_id.as_str(),
                "questionItem": {
                    "question": {
                        "grading": {
                            "pointValue": entry.point_value,
                            "correctAnswers": { "answers": answers }
                        }
                    }
                }
            },
            "location": { "index": entry.position },
            "updateMask": "questionItem.question.grading"
        }
    })
}

/// 批量更新请求体
pub fn batch_update_body(requests: Vec<Value>) -> Value {
    json!({ "requests": requests })
}

/// Drive 权限请求体
pub fn permission_body(email: &str, role: AccessRole) -> Value {
    json!({
        "type": "user",
        "role": role.as_str(),
        "emailAddress": email
    })
}

/// 创建表单的响应
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFormResponse {
    pub form_id: String,
}

/// 批量更新的响应
#[derive(Debug, Default, Deserialize)]
pub struct BatchUpdateResponse {
    #[serde(default)]
    pub replies: Vec<Reply>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    #[serde(default)]
    pub create_item: Option<CreateItemReply>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemReply {
    pub item_id: String,
}

impl BatchUpdateResponse {
    /// 按顺序取出所有 createItem 返回的题目标识
    pub fn created_item_ids(self) -> Vec<ItemId> {
        self.replies
            .into_iter()
            .filter_map(|r| r.create_item)
            .map(|c| ItemId::new(c.item_id))
            .collect()
    }
}

/// Google API 错误响应
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_mcq_item_request() {
        let item = FormItemSpec {
            position: 1,
            kind: ItemKind::Mcq,
            title: "2 + 2?".to_string(),
            options: vec!["3".to_string(), "4".to_string()],
        };

        let request = create_item_request(&item);
        let create = &request["createItem"];
        assert_eq!(create["location"]["index"], 1);
        assert_eq!(create["item"]["title"], "2 + 2?");

        let question = &create["item"]["questionItem"]["question"];
        assert_eq!(question["required"], true);
        assert_eq!(question["choiceQuestion"]["type"], "RADIO");
        assert_eq!(question["choiceQuestion"]["shuffle"], false);
        assert_eq!(question["choiceQuestion"]["options"][1]["value"], "4");
    }

    #[test]
    fn test_name_item_is_required_text_question() {
        let request = create_item_request(&FormItemSpec::name_field());
        let question = &request["createItem"]["item"]["questionItem"]["question"];
        assert_eq!(question["required"], true);
        assert!(question["textQuestion"].is_object());
        assert_eq!(request["createItem"]["location"]["index"], 0);
    }

    #[test]
    fn test_grading_request() {
        let entry = GradingEntry {
            external_id: ItemId::from("abc"),
            position: 3,
            point_value: 1,
            accepted_answers: BTreeSet::from(["Paris".to_string(), "paris".to_string()]),
        };

        let request = update_grading_request(&entry);
        let update = &request["updateItem"];
        assert_eq!(update["item"]["itemId"], "abc");
        assert_eq!(update["location"]["index"], 3);
        assert_eq!(update["updateMask"], "questionItem.question.grading");

        let grading = &update["item"]["questionItem"]["question"]["grading"];
        assert_eq!(grading["pointValue"], 1);
        assert_eq!(grading["correctAnswers"]["answers"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_created_item_ids_skip_other_replies() {
        let json = r#"{
            "replies": [
                {},
                {"createItem": {"itemId": "a", "questionId": ["q1"]}},
                {"createItem": {"itemId": "b"}}
            ]
        }"#;

        let response: BatchUpdateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.created_item_ids(),
            vec![ItemId::from("a"), ItemId::from("b")]
        );
    }

    #[test]
    fn test_permission_body() {
        let body = permission_body("a@x.com", AccessRole::Writer);
        assert_eq!(body["type"], "user");
        assert_eq!(body["role"], "writer");
        assert_eq!(body["emailAddress"], "a@x.com");
    }
}
