use async_trait::async_trait;
use quiz_form_builder::error::{AppError, CorrelationError, ServiceError, ValidationError};
use quiz_form_builder::models::{
    AccessRole, FillQuestion, FormItemSpec, GradingEntry, ItemId, ItemKind, McQuestion, Quiz,
};
use quiz_form_builder::services::ValidationPolicy;
use quiz_form_builder::utils::logging;
use quiz_form_builder::workflow::DEFAULT_FORM_TITLE;
use quiz_form_builder::{App, Config, FormService, QuizFormFlow};
use std::sync::{Arc, Mutex};

/// 记录所有调用的内存表单服务
#[derive(Default)]
struct RecordingFormService {
    /// 创建题目时少返回的标识数量
    drop_ids: usize,
    fail_create_items: bool,
    fail_grading: bool,
    titles: Mutex<Vec<String>>,
    created_items: Mutex<Vec<Vec<FormItemSpec>>>,
    grading_calls: Mutex<Vec<Vec<GradingEntry>>>,
    grants: Mutex<Vec<(String, AccessRole)>>,
}

#[async_trait]
impl FormService for RecordingFormService {
    async fn create_form(&self, title: &str) -> Result<String, ServiceError> {
        self.titles.lock().unwrap().push(title.to_string());
        Ok("form-123".to_string())
    }

    async fn create_items(
        &self,
        _form_id: &str,
        items: &[FormItemSpec],
    ) -> Result<Vec<ItemId>, ServiceError> {
        self.created_items.lock().unwrap().push(items.to_vec());
        if self.fail_create_items {
            return Err(ServiceError::bad_response("forms.createItems", 500, "backend error"));
        }
        let returned = items.len().saturating_sub(self.drop_ids);
        Ok(items
            .iter()
            .take(returned)
            .map(|item| ItemId::new(format!("id-{}", item.position)))
            .collect())
    }

    async fn update_grading(
        &self,
        _form_id: &str,
        entries: &[GradingEntry],
    ) -> Result<(), ServiceError> {
        self.grading_calls.lock().unwrap().push(entries.to_vec());
        if self.fail_grading {
            return Err(ServiceError::bad_response("forms.updateGrading", 400, "bad grading"));
        }
        Ok(())
    }

    async fn grant_access(
        &self,
        _form_id: &str,
        email: &str,
        role: AccessRole,
    ) -> Result<(), ServiceError> {
        self.grants.lock().unwrap().push((email.to_string(), role));
        if email.contains('@') {
            Ok(())
        } else {
            Err(ServiceError::bad_response(
                "drive.permissions.create",
                400,
                format!("Invalid email: {}", email),
            ))
        }
    }

    fn edit_link(&self, form_id: &str) -> String {
        format!("https://docs.google.com/forms/d/{}/edit", form_id)
    }
}

fn sample_quiz() -> Quiz {
    Quiz::new(
        vec![
            McQuestion::new("Largest planet?", ["Mars", "Jupiter", "Mars"], "Jupiter"),
            McQuestion::new("2 + 2 = ?", ["3", "4"], "4"),
        ],
        vec![FillQuestion::new("The capital of France is ____.", " paris ")],
    )
}

fn recipients(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn test_full_flow() {
    let service = Arc::new(RecordingFormService::default());
    let flow = QuizFormFlow::new(service.clone());

    let report = flow
        .run(&sample_quiz(), " Astronomy ", &recipients(&["a@x.com"]))
        .await
        .unwrap();

    assert_eq!(report.form_link, "https://docs.google.com/forms/d/form-123/edit");
    assert_eq!(report.title, "Astronomy");
    assert_eq!(report.items_created, 4);
    assert_eq!(report.graded_items, 3);
    assert_eq!(*service.titles.lock().unwrap(), vec!["Astronomy".to_string()]);

    let created = service.created_items.lock().unwrap();
    assert_eq!(created.len(), 1);
    let layout: Vec<(usize, ItemKind)> = created[0].iter().map(|i| (i.position, i.kind)).collect();
    assert_eq!(
        layout,
        vec![
            (0, ItemKind::Name),
            (1, ItemKind::Mcq),
            (2, ItemKind::Mcq),
            (3, ItemKind::Fill),
        ]
    );
    assert_eq!(created[0][1].options, vec!["Mars".to_string(), "Jupiter".to_string()]);

    let grading = service.grading_calls.lock().unwrap();
    assert_eq!(grading.len(), 1);
    let ids: Vec<&str> = grading[0].iter().map(|e| e.external_id.as_str()).collect();
    assert_eq!(ids, vec!["id-1", "id-2", "id-3"]);
    assert!(grading[0][2].accepted_answers.contains("Paris"));
    assert!(grading[0][2].accepted_answers.contains("paris"));

    assert_eq!(
        *service.grants.lock().unwrap(),
        vec![("a@x.com".to_string(), AccessRole::Writer)]
    );
}

#[tokio::test]
async fn test_correlation_mismatch_aborts_before_grading() {
    let service = Arc::new(RecordingFormService {
        drop_ids: 1,
        ..Default::default()
    });
    let flow = QuizFormFlow::new(service.clone());

    let result = flow
        .run(&sample_quiz(), "Quiz", &recipients(&["a@x.com"]))
        .await;

    assert!(matches!(
        result,
        Err(AppError::Correlation(CorrelationError::LengthMismatch {
            requested: 4,
            returned: 3
        }))
    ));
    assert!(service.grading_calls.lock().unwrap().is_empty());
    assert!(service.grants.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_blank_answers_skip_grading_call() {
    let service = Arc::new(RecordingFormService::default());
    let flow = QuizFormFlow::new(service.clone());
    let quiz = Quiz::new(
        vec![McQuestion::new("Q1", ["A", "B"], "")],
        vec![FillQuestion::new("F1", "  ")],
    );

    let report = flow.run(&quiz, "Quiz", &[]).await.unwrap();

    assert_eq!(report.graded_items, 0);
    assert!(service.grading_calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_sharing_partial_failure_still_returns_link() {
    let service = Arc::new(RecordingFormService::default());
    let flow = QuizFormFlow::new(service.clone());

    let report = flow
        .run(
            &sample_quiz(),
            "Quiz",
            &recipients(&["a@x.com", "bad", "c@x.com"]),
        )
        .await
        .unwrap();

    assert_eq!(report.form_link, "https://docs.google.com/forms/d/form-123/edit");
    assert_eq!(report.sharing.len(), 3);
    assert!(report.sharing[0].granted);
    assert!(!report.sharing[1].granted);
    assert_eq!(report.sharing[1].email, "bad");
    assert!(report.sharing[1].error.as_deref().unwrap().contains("Invalid email"));
    assert!(report.sharing[2].granted);

    let summary = report.sharing_summary();
    assert_eq!((summary.granted, summary.failed), (2, 1));
}

#[tokio::test]
async fn test_create_items_failure_is_fatal() {
    let service = Arc::new(RecordingFormService {
        fail_create_items: true,
        ..Default::default()
    });
    let flow = QuizFormFlow::new(service.clone());

    let result = flow
        .run(&sample_quiz(), "Quiz", &recipients(&["a@x.com"]))
        .await;

    assert!(matches!(result, Err(AppError::Service(_))));
    assert!(service.grading_calls.lock().unwrap().is_empty());
    assert!(service.grants.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_grading_failure_is_fatal_and_skips_sharing() {
    let service = Arc::new(RecordingFormService {
        fail_grading: true,
        ..Default::default()
    });
    let flow = QuizFormFlow::new(service.clone());

    let result = flow
        .run(&sample_quiz(), "Quiz", &recipients(&["a@x.com"]))
        .await;

    assert!(matches!(result, Err(AppError::Service(_))));
    assert!(service.grants.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_validation_error_makes_no_external_calls() {
    let service = Arc::new(RecordingFormService::default());
    let flow = QuizFormFlow::new(service.clone());
    let quiz = Quiz::new(vec![McQuestion::new(" ", ["A", "B"], "A")], vec![]);

    let result = flow.run(&quiz, "Quiz", &recipients(&["a@x.com"])).await;

    assert!(matches!(
        result,
        Err(AppError::Validation(ValidationError::EmptyPrompt { .. }))
    ));
    assert!(service.titles.lock().unwrap().is_empty());
    assert!(service.created_items.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_strict_policy_rejects_malformed_mcq() {
    let service = Arc::new(RecordingFormService::default());
    let quiz = Quiz::new(vec![McQuestion::new("Pick one", ["A", "A"], "A")], vec![]);

    let lenient = QuizFormFlow::new(service.clone());
    assert!(lenient.run(&quiz, "Quiz", &[]).await.is_ok());

    let strict = QuizFormFlow::new(service.clone()).with_policy(ValidationPolicy::Strict);
    assert!(matches!(
        strict.run(&quiz, "Quiz", &[]).await,
        Err(AppError::Validation(ValidationError::TooFewOptions { index: 1, count: 1 }))
    ));
}

#[tokio::test]
async fn test_blank_title_uses_default() {
    let service = Arc::new(RecordingFormService::default());
    let flow = QuizFormFlow::new(service.clone());

    let report = flow.run(&Quiz::default(), "   ", &[]).await.unwrap();

    assert_eq!(report.title, DEFAULT_FORM_TITLE);
    assert_eq!(report.items_created, 1);
    assert!(report.sharing.is_empty());
}

#[tokio::test]
#[ignore] // 需要真实的 Google 访问令牌：cargo test -- --ignored
async fn test_create_form_from_quiz_file() {
    // 初始化日志
    logging::init(true);

    // 加载配置（QUIZ_FILE / GOOGLE_ACCESS_TOKEN / RECIPIENTS）
    let config = Config::from_env();

    let report = App::initialize(config)
        .expect("初始化失败")
        .run()
        .await
        .expect("表单生成失败");

    println!("表单链接: {}", report.form_link);
    assert!(!report.form_id.is_empty());
}
