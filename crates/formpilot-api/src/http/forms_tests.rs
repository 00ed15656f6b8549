use axum::http::StatusCode;
use tempfile::tempdir;
use tower::ServiceExt;

use crate::http::routes::create_router;
use crate::http::testing::{
    empty_request, read_json, state_with_forms, write_patient_form, INTAKE_REPLY,
};

#[tokio::test]
async fn test_list_forms_sorted() {
    let dir = tempdir().unwrap();
    write_patient_form(dir.path());
    std::fs::write(dir.path().join("admission.json"), "{}").unwrap();
    std::fs::write(dir.path().join("notes.txt"), "not a form").unwrap();

    let app = create_router(state_with_forms(dir.path(), INTAKE_REPLY));
    let response = app.oneshot(empty_request("GET", "/forms")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = read_json(response).await;
    assert_eq!(json["count"], 2);
    assert_eq!(json["forms"][0], "admission");
    assert_eq!(json["forms"][1], "patient_intake");
}

#[tokio::test]
async fn test_form_schema_shape() {
    let dir = tempdir().unwrap();
    write_patient_form(dir.path());

    let app = create_router(state_with_forms(dir.path(), INTAKE_REPLY));
    let response = app
        .oneshot(empty_request("GET", "/forms/patient_intake/schema"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = read_json(response).await;
    assert_eq!(
        json["$schema"],
        "https://json-schema.org/draft/2020-12/schema"
    );
    assert_eq!(json["title"], "Patient Intake");
    assert_eq!(json["properties"]["Name"]["type"], "string");
    assert_eq!(
        json["properties"]["Symptoms"]["items"]["enum"][0],
        "Fever"
    );
    assert_eq!(json["required"], serde_json::json!([]));
}

#[tokio::test]
async fn test_form_schema_require_all() {
    let dir = tempdir().unwrap();
    write_patient_form(dir.path());

    let app = create_router(state_with_forms(dir.path(), INTAKE_REPLY));
    let response = app
        .oneshot(empty_request(
            "GET",
            "/forms/patient_intake/schema?require_all=true",
        ))
        .await
        .unwrap();

    let json = read_json(response).await;
    assert_eq!(
        json["required"],
        serde_json::json!(["Name", "Doctor", "Symptoms"])
    );
}

#[tokio::test]
async fn test_form_template_defaults() {
    let dir = tempdir().unwrap();
    write_patient_form(dir.path());

    let app = create_router(state_with_forms(dir.path(), INTAKE_REPLY));
    let response = app
        .oneshot(empty_request("GET", "/forms/patient_intake/template"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = read_json(response).await;
    assert_eq!(json["Name"], "");
    assert_eq!(json["Symptoms"], serde_json::json!([]));
}

#[tokio::test]
async fn test_unknown_form_schema_is_404() {
    let dir = tempdir().unwrap();
    let app = create_router(state_with_forms(dir.path(), INTAKE_REPLY));

    let response = app
        .oneshot(empty_request("GET", "/forms/ghost/schema"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
