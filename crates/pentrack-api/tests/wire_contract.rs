// SPDX-License-Identifier: Apache-2.0

use pentrack_api::{decode_project, AckDto, ApiErrorCode, PROJECT_ADDED_MESSAGE};

const CANONICAL_BODY: &str = r#"{
  "id":"2","name":"X","client":"Y",
  "startDate":"2025-01-01","endDate":"2025-02-01",
  "status":"planning","type":"mobile","priority":"low",
  "assignedTesters":[]
}"#;

#[test]
fn canonical_body_decodes_without_transformation() {
    let project = decode_project(CANONICAL_BODY.as_bytes()).expect("decode canonical body");
    assert_eq!(project.id.as_str(), "2");
    assert_eq!(project.name, "X");
    assert_eq!(project.client, "Y");
    assert_eq!(project.start_date, "2025-01-01");
    assert_eq!(project.end_date, "2025-02-01");
    assert_eq!(project.status, "planning");
    assert_eq!(project.kind, "mobile");
    assert_eq!(project.priority, "low");
    assert!(project.assigned_testers.is_empty());

    // Serializing the decoded record reproduces the posted body exactly.
    let reencoded = serde_json::to_value(&project).expect("encode");
    let posted: serde_json::Value = serde_json::from_str(CANONICAL_BODY).expect("parse fixture");
    assert_eq!(reencoded, posted);
}

#[test]
fn syntactically_broken_body_is_malformed() {
    let err = decode_project(b"{not json").expect_err("broken body");
    assert_eq!(err.code, ApiErrorCode::MalformedRequestBody);

    let err = decode_project(b"").expect_err("empty body");
    assert_eq!(err.code, ApiErrorCode::MalformedRequestBody);
}

#[test]
fn schema_mismatch_is_validation_failure() {
    // Missing required field.
    let err = decode_project(br#"{"id":"2"}"#).expect_err("missing fields");
    assert_eq!(err.code, ApiErrorCode::ValidationFailed);

    // Unknown field.
    let raw = CANONICAL_BODY.replace("\"assignedTesters\":[]", "\"assignedTesters\":[],\"x\":1");
    let err = decode_project(raw.as_bytes()).expect_err("unknown field");
    assert_eq!(err.code, ApiErrorCode::ValidationFailed);

    // Wrong type.
    let raw = CANONICAL_BODY.replace("\"assignedTesters\":[]", "\"assignedTesters\":{}");
    let err = decode_project(raw.as_bytes()).expect_err("wrong type");
    assert_eq!(err.code, ApiErrorCode::ValidationFailed);
}

#[test]
fn ack_carries_the_published_message() {
    let ack = AckDto::project_added();
    assert_eq!(ack.message, PROJECT_ADDED_MESSAGE);
    let value = serde_json::to_value(&ack).expect("encode ack");
    assert_eq!(
        value,
        serde_json::json!({"message": "Project added successfully"})
    );
}
