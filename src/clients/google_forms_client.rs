//! Google Forms / Drive API 客户端
//!
//! 通过 REST 接口实现 `FormService`。访问令牌由外部凭据提供方负责获取和刷新。

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::clients::form_service::FormService;
use crate::clients::google_requests::{
    batch_update_body, create_form_body, create_item_request, enable_quiz_request,
    permission_body, update_grading_request, BatchUpdateResponse, CreateFormResponse,
    ErrorResponse,
};
use crate::config::Config;
use crate::error::ServiceError;
use crate::models::{AccessRole, FormItemSpec, GradingEntry, ItemId};

/// Google Forms 客户端
pub struct GoogleFormsClient {
    http: Client,
    forms_base_url: String,
    drive_base_url: String,
    access_token: String,
    send_notification_email: bool,
}

impl GoogleFormsClient {
    /// 创建新的客户端
    pub fn new(config: &Config) -> Self {
        Self {
            http: Client::new(),
            forms_base_url: config.forms_api_base_url.trim_end_matches('/').to_string(),
            drive_base_url: config.drive_api_base_url.trim_end_matches('/').to_string(),
            access_token: config.access_token.clone(),
            send_notification_email: config.send_notification_email,
        }
    }

    /// 对表单执行 batchUpdate
    async fn batch_update(
        &self,
        operation: &str,
        form_id: &str,
        requests: Vec<Value>,
    ) -> Result<BatchUpdateResponse, ServiceError> {
        let url = format!("{}/forms/{}:batchUpdate", self.forms_base_url, form_id);
        let body = batch_update_body(requests);

        debug!("batchUpdate ({}) Payload: {}", operation, body);

        self.send(operation, self.http.post(url).json(&body)).await
    }

    /// 发送请求并解析响应
    async fn send<T: DeserializeOwned>(
        &self,
        operation: &str,
        request: RequestBuilder,
    ) -> Result<T, ServiceError> {
        let response = request
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(|e| ServiceError::request_failed(operation, e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ServiceError::request_failed(operation, e))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorResponse>(&text)
                .map(|e| e.error.message)
                .unwrap_or(text);
            return Err(ServiceError::bad_response(operation, status.as_u16(), message));
        }

        debug!("{} 响应: {}", operation, text);

        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl FormService for GoogleFormsClient {
    async fn create_form(&self, title: &str) -> Result<String, ServiceError> {
        let url = format!("{}/forms", self.forms_base_url);
        let created: CreateFormResponse = self
            .send("forms.create", self.http.post(url).json(&create_form_body(title)))
            .await?;
        let form_id = created.form_id;
        if form_id.is_empty() {
            return Err(ServiceError::malformed("forms.create", "formId 为空"));
        }

        self.batch_update("forms.enableQuiz", &form_id, vec![enable_quiz_request()])
            .await?;

        // 同步 Drive 中的文件名
        let url = format!("{}/files/{}", self.drive_base_url, form_id);
        let _: Value = self
            .send(
                "drive.files.update",
                self.http
                    .patch(url)
                    .query(&[("fields", "id")])
                    .json(&serde_json::json!({ "name": title })),
            )
            .await?;

        Ok(form_id)
    }

    async fn create_items(
        &self,
        form_id: &str,
        items: &[FormItemSpec],
    ) -> Result<Vec<ItemId>, ServiceError> {
        let requests = items.iter().map(create_item_request).collect();
        let response = self
            .batch_update("forms.createItems", form_id, requests)
            .await?;
        Ok(response.created_item_ids())
    }

    async fn update_grading(
        &self,
        form_id: &str,
        entries: &[GradingEntry],
    ) -> Result<(), ServiceError> {
        let requests = entries.iter().map(update_grading_request).collect();
        self.batch_update("forms.updateGrading", form_id, requests)
            .await?;
        Ok(())
    }

    async fn grant_access(
        &self,
        form_id: &str,
        email: &str,
        role: AccessRole,
    ) -> Result<(), ServiceError> {
        let url = format!("{}/files/{}/permissions", self.drive_base_url, form_id);
        let notify = if self.send_notification_email {
            "true"
        } else {
            "false"
        };

        let _: Value = self
            .send(
                "drive.permissions.create",
                self.http
                    .post(url)
                    .query(&[("sendNotificationEmail", notify), ("fields", "id")])
                    .json(&permission_body(email, role)),
            )
            .await?;

        Ok(())
    }

    fn edit_link(&self, form_id: &str) -> String {
        format!("https://docs.google.com/forms/d/{}/edit", form_id)
    }
}
