// SPDX-License-Identifier: Apache-2.0

use crate::errors::ApiError;
use crate::wire::ProjectDto;
use pentrack_model::{AssignedTester, Project, ProjectId, TesterId};
use serde_json::{json, Value};

/// Decode a raw POST body into a validated [`Project`].
///
/// A body that is not syntactically valid JSON maps to
/// `malformed_request_body`; well-formed JSON that does not match the
/// schema (wrong types, missing required field, unknown field) maps to
/// `validation_failed`.
pub fn decode_project(body: &[u8]) -> Result<Project, ApiError> {
    let dto: ProjectDto = serde_json::from_slice(body).map_err(|err| {
        use serde_json::error::Category;
        match err.classify() {
            Category::Data => ApiError::validation_failed(
                json!([{ "field": "body", "reason": err.to_string() }]),
            ),
            Category::Syntax | Category::Eof | Category::Io => {
                ApiError::malformed_body(&err.to_string())
            }
        }
    })?;
    project_from_dto(dto)
}

/// Convert a schema-shaped DTO into a model [`Project`], accumulating
/// field-level failures into one `validation_failed` error.
pub fn project_from_dto(dto: ProjectDto) -> Result<Project, ApiError> {
    let mut field_errors: Vec<Value> = Vec::new();

    let id = match ProjectId::parse(&dto.id) {
        Ok(id) => Some(id),
        Err(err) => {
            field_errors.push(json!({ "field": "id", "reason": err.to_string() }));
            None
        }
    };

    let mut testers = Vec::with_capacity(dto.assigned_testers.len());
    for (idx, tester) in dto.assigned_testers.into_iter().enumerate() {
        match TesterId::parse(&tester.tester_id) {
            Ok(tester_id) => {
                testers.push(AssignedTester::new(tester_id, tester.role, tester.status));
            }
            Err(err) => field_errors.push(json!({
                "field": format!("assignedTesters[{idx}].testerId"),
                "reason": err.to_string(),
            })),
        }
    }

    if !field_errors.is_empty() {
        return Err(ApiError::validation_failed(Value::Array(field_errors)));
    }
    let Some(id) = id else {
        return Err(ApiError::validation_failed(Value::Array(vec![
            json!({ "field": "id", "reason": "missing" }),
        ])));
    };

    let project = Project::new(
        id,
        dto.name,
        dto.client,
        dto.start_date,
        dto.end_date,
        dto.status,
        dto.kind,
        dto.priority,
        testers,
    );
    project.validate().map_err(|err| {
        ApiError::validation_failed(json!([{ "field": "project", "reason": err.to_string() }]))
    })?;
    Ok(project)
}
