use crate::build_router;
use crate::tests::common::{create_test_account, create_test_credential, create_test_state};

use axum::body::Body;
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

async fn get_json(
    app: axum::Router,
    uri: &str,
) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    (status, json)
}

#[tokio::test]
async fn test_list_students_returns_roster_and_vocabulary() {
    let state = create_test_state().await;
    let pool = state.pool.clone();

    let ana = create_test_account(&pool, "Ana", "ana@example.com", Some("555-0101"), "student").await;
    let ben = create_test_account(&pool, "Ben", "ben@example.com", None, "student").await;
    create_test_account(&pool, "Tia", "tia@example.com", None, "teacher").await;

    create_test_credential(&pool, ana, "Systems Cert", Some("Rust, SQL")).await;
    create_test_credential(&pool, ana, "Backend Cert", Some("Rust, Go")).await;
    create_test_credential(&pool, ben, "Data Cert", Some("SQL")).await;

    let (status, json) = get_json(build_router(state), "/api/v1/students").await;

    assert_eq!(status, StatusCode::OK);

    let students = json["students"].as_array().unwrap();
    assert_eq!(students.len(), 2);

    let ana_entry = students
        .iter()
        .find(|s| s["id"] == ana.to_string())
        .unwrap();
    // Deduplicated across credentials, sorted
    assert_eq!(
        ana_entry["skills"],
        serde_json::json!(["Go", "Rust", "SQL"])
    );

    assert_eq!(
        json["available_skills"],
        serde_json::json!(["Go", "Rust", "SQL"])
    );
}

#[tokio::test]
async fn test_list_students_without_credentials_has_empty_skills() {
    let state = create_test_state().await;
    let pool = state.pool.clone();

    create_test_account(&pool, "Ana", "ana@example.com", None, "student").await;

    let (status, json) = get_json(build_router(state), "/api/v1/students").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["students"][0]["skills"], serde_json::json!([]));
    assert_eq!(json["available_skills"], serde_json::json!([]));
}

#[tokio::test]
async fn test_list_students_search_filters_but_keeps_vocabulary() {
    let state = create_test_state().await;
    let pool = state.pool.clone();

    let ana = create_test_account(&pool, "Ana", "ana@example.com", None, "student").await;
    let ben = create_test_account(&pool, "Ben", "ben@example.com", None, "student").await;
    create_test_credential(&pool, ana, "Systems Cert", Some("Rust")).await;
    create_test_credential(&pool, ben, "Data Cert", Some("SQL")).await;

    let (status, json) = get_json(build_router(state), "/api/v1/students?search=ANA").await;

    assert_eq!(status, StatusCode::OK);

    let students = json["students"].as_array().unwrap();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0]["name"], "Ana");

    // Vocabulary stays global while a filter is active
    assert_eq!(
        json["available_skills"],
        serde_json::json!(["Rust", "SQL"])
    );
}

#[tokio::test]
async fn test_list_students_skill_filter_requires_all_selected() {
    let state = create_test_state().await;
    let pool = state.pool.clone();

    let ana = create_test_account(&pool, "Ana", "ana@example.com", None, "student").await;
    let ben = create_test_account(&pool, "Ben", "ben@example.com", None, "student").await;
    create_test_credential(&pool, ana, "Systems Cert", Some("Rust, SQL")).await;
    create_test_credential(&pool, ben, "Data Cert", Some("SQL")).await;

    let (status, json) = get_json(
        build_router(state),
        "/api/v1/students?skills=Rust,SQL",
    )
    .await;

    assert_eq!(status, StatusCode::OK);

    let students = json["students"].as_array().unwrap();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0]["name"], "Ana");
}

#[tokio::test]
async fn test_get_student_returns_profile_with_raw_credentials() {
    let state = create_test_state().await;
    let pool = state.pool.clone();

    let ana = create_test_account(
        &pool,
        "Ana",
        "ana@example.com",
        Some("555-0101"),
        "student",
    )
    .await;
    create_test_credential(&pool, ana, "Systems Cert", Some("Rust, SQL")).await;

    let uri = format!("/api/v1/students/{}", ana);
    let (status, json) = get_json(build_router(state), &uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["student"]["id"], ana.to_string());
    assert_eq!(json["student"]["name"], "Ana");
    assert_eq!(json["student"]["phone"], "555-0101");

    let credentials = json["student"]["credentials"].as_array().unwrap();
    assert_eq!(credentials.len(), 1);
    // Skill field stays unsplit on the profile view
    assert_eq!(credentials[0]["skills_acquired"], "Rust, SQL");
    assert_eq!(credentials[0]["credential_name"], "Systems Cert");
}

#[tokio::test]
async fn test_get_student_unknown_id_returns_404() {
    let state = create_test_state().await;

    let uri = format!("/api/v1/students/{}", uuid::Uuid::new_v4());
    let (status, json) = get_json(build_router(state), &uri).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_get_student_non_student_role_returns_404() {
    let state = create_test_state().await;
    let pool = state.pool.clone();

    let teacher = create_test_account(&pool, "Tia", "tia@example.com", None, "teacher").await;

    let uri = format!("/api/v1/students/{}", teacher);
    let (status, json) = get_json(build_router(state), &uri).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_get_student_malformed_id_returns_400() {
    let state = create_test_state().await;

    let (status, json) = get_json(build_router(state), "/api/v1/students/not-a-uuid").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_undecodable_row_returns_500_without_schema_details() {
    let state = create_test_state().await;
    let pool = state.pool.clone();

    // A row that satisfies the SQL constraints but cannot decode into a
    // domain model (id column is not a UUID)
    sqlx::query(
        "INSERT INTO users (id, name, email, phone, role, created_at) VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind("not-a-uuid")
    .bind("Ana")
    .bind("ana@example.com")
    .bind(Option::<String>::None)
    .bind("student")
    .bind(chrono::Utc::now().timestamp())
    .execute(&pool)
    .await
    .unwrap();

    let (status, json) = get_json(build_router(state), "/api/v1/students").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    // Table/column names stay in the server log, never in the body
    assert_eq!(json["error"]["message"], "Database operation failed");
}

#[tokio::test]
async fn test_health_endpoints() {
    let state = create_test_state().await;
    let app = build_router(state);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/live").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/ready")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
