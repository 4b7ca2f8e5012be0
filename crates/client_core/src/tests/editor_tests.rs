use super::*;
use crate::test_support::{numbered_courses, valid_input, FakeRepository};

#[tokio::test]
async fn add_mode_creates_course_and_emits_success() {
    let repo = Arc::new(FakeRepository::with_courses(numbered_courses(2)));
    let mut editor = CourseEditor::new(repo.clone(), None);
    assert_eq!(editor.mode(), &EditorMode::Add);
    assert_eq!(editor.load_detail().await.expect("detail"), None);

    let created = editor.submit(valid_input()).await.expect("submit");

    assert_eq!(created.id, CourseId::from(3));
    assert_eq!(*repo.created.lock().await, vec![valid_input()]);
    assert!(repo.updated.lock().await.is_empty());
    assert_eq!(editor.drain_notices(), vec![Notice::success("Thành công")]);
}

#[tokio::test]
async fn edit_mode_prefills_and_replaces_course() {
    let repo = Arc::new(FakeRepository::with_courses(numbered_courses(2)));
    let mut editor = CourseEditor::new(repo.clone(), Some(CourseId::from(2)));
    assert_eq!(editor.mode(), &EditorMode::Edit(CourseId::from(2)));

    let mut input = editor
        .load_detail()
        .await
        .expect("detail")
        .expect("edit mode prefill");
    assert_eq!(input.name, "Course 2");
    input.teacher = "Nguyễn A".into();

    let updated = editor.submit(input.clone()).await.expect("submit");

    assert_eq!(updated.id, CourseId::from(2));
    assert_eq!(updated.teacher, "Nguyễn A");
    assert_eq!(*repo.updated.lock().await, vec![(CourseId::from(2), input)]);
    assert!(repo.created.lock().await.is_empty());
}

#[tokio::test]
async fn invalid_input_never_reaches_backend() {
    let repo = Arc::new(FakeRepository::with_courses(Vec::new()));
    let mut editor = CourseEditor::new(repo.clone(), None);
    let mut input = valid_input();
    input.name = "abc".into();
    input.credit = 0.0;

    let err = editor.submit(input).await.expect_err("must fail");

    let errors = match err {
        SubmitError::Invalid(errors) => errors,
        other => panic!("expected validation failure, got {other:?}"),
    };
    assert_eq!(errors.message_for("name"), Some("Tên phải dài hơn 3 ký tự"));
    assert_eq!(errors.message_for("credit"), Some("Số tín chỉ phải > 0"));
    assert!(repo.created.lock().await.is_empty());
    assert!(editor.drain_notices().is_empty());
}

#[tokio::test]
async fn editing_missing_course_reports_not_found() {
    let repo = Arc::new(FakeRepository::with_courses(numbered_courses(1)));
    let mut editor = CourseEditor::new(repo, Some(CourseId::from(42)));

    let detail_err = editor.load_detail().await.expect_err("missing");
    assert_eq!(detail_err, RepositoryError::NotFound(CourseId::from(42)));

    let err = editor.submit(valid_input()).await.expect_err("missing");
    assert!(matches!(
        err,
        SubmitError::Repository(RepositoryError::NotFound(ref id)) if *id == CourseId::from(42)
    ));
    let notices = editor.drain_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].message, "Thất bại: không tìm thấy mục 42");
}

#[tokio::test]
async fn backend_failure_emits_error_notice() {
    let repo = Arc::new(FakeRepository::failing(RepositoryError::Validation(
        "duplicate name".into(),
    )));
    let mut editor = CourseEditor::new(repo, None);

    let err = editor.submit(valid_input()).await.expect_err("must fail");

    assert!(matches!(err, SubmitError::Repository(RepositoryError::Validation(_))));
    assert_eq!(
        editor.drain_notices(),
        vec![Notice::error("Thất bại: duplicate name")]
    );
}

#[tokio::test]
async fn unreadable_detail_falls_back_to_blank_form_and_validation_decides() {
    let repo = Arc::new(FakeRepository::failing(RepositoryError::Network(
        "connection refused".into(),
    )));
    let mut editor = CourseEditor::new(repo.clone(), Some(CourseId::from(2)));

    let mut input = editor.prefill().await;
    assert_eq!(input, CourseInput::default());
    assert_eq!(
        editor.drain_notices(),
        vec![Notice::error(
            "Không tải được khóa học: không kết nối được máy chủ; kiểm tra địa chỉ API và thử lại"
        )]
    );

    input.teacher = "Nguyễn A".into();
    let err = editor.submit(input).await.expect_err("incomplete form");
    let SubmitError::Invalid(errors) = err else {
        panic!("expected validation failure");
    };
    assert!(errors.message_for("name").is_some());
    assert!(errors.message_for("teacher").is_none());
    assert!(repo.updated.lock().await.is_empty());
}

#[tokio::test]
async fn prefill_uses_stored_values_in_edit_mode_and_blank_in_add_mode() {
    let repo = Arc::new(FakeRepository::with_courses(numbered_courses(2)));

    let mut editor = CourseEditor::new(repo.clone(), Some(CourseId::from(1)));
    assert_eq!(editor.prefill().await.name, "Course 1");
    assert!(editor.drain_notices().is_empty());

    let mut editor = CourseEditor::new(repo, None);
    assert_eq!(editor.prefill().await, CourseInput::default());
}
