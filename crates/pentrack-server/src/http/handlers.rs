use crate::http::render;
use crate::http::request_tracing::RequestTrace;
use crate::{AppState, CRATE_NAME};
use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use pentrack_api::{decode_project, map_error, AckDto, ApiError};
use serde_json::json;
use std::time::Instant;
use tracing::info;

pub(crate) fn api_error_response(err: ApiError) -> Response {
    let status =
        StatusCode::from_u16(map_error(&err)).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(json!({ "error": err }))).into_response()
}

pub(crate) async fn dashboard_handler(State(state): State<AppState>) -> impl IntoResponse {
    let started = Instant::now();
    let projects = state.store.list().await;
    let html = render::render_dashboard(&projects);

    let mut resp = Response::new(Body::from(html));
    *resp.status_mut() = StatusCode::OK;
    resp.headers_mut().insert(
        "content-type",
        HeaderValue::from_static("text/html; charset=utf-8"),
    );
    state
        .metrics
        .observe_request("/", StatusCode::OK, started.elapsed())
        .await;
    resp
}

pub(crate) async fn list_projects_handler(State(state): State<AppState>) -> impl IntoResponse {
    let started = Instant::now();
    let projects = state.store.list().await;
    // The published contract is a bare JSON array in insertion order.
    let resp = (StatusCode::OK, Json(projects)).into_response();
    state
        .metrics
        .observe_request("/api/projects", StatusCode::OK, started.elapsed())
        .await;
    resp
}

pub(crate) async fn create_project_handler(
    State(state): State<AppState>,
    Extension(trace): Extension<RequestTrace>,
    body: Bytes,
) -> impl IntoResponse {
    let started = Instant::now();
    let project = match decode_project(&body) {
        Ok(project) => project,
        Err(err) => {
            info!(
                request_id = %trace.request_id,
                route = "/api/projects",
                code = ?err.code,
                "rejected project submission"
            );
            let resp = api_error_response(err.with_request_id(trace.request_id.as_str()));
            state
                .metrics
                .observe_request("/api/projects", resp.status(), started.elapsed())
                .await;
            return resp;
        }
    };

    info!(
        request_id = %trace.request_id,
        route = "/api/projects",
        project_id = %project.id,
        "project added"
    );
    state.store.append(project).await;

    let resp = (StatusCode::CREATED, Json(AckDto::project_added())).into_response();
    state
        .metrics
        .observe_request("/api/projects", StatusCode::CREATED, started.elapsed())
        .await;
    resp
}

pub(crate) async fn healthz_handler(State(state): State<AppState>) -> impl IntoResponse {
    let started = Instant::now();
    let resp = (StatusCode::OK, "ok").into_response();
    state
        .metrics
        .observe_request("/healthz", StatusCode::OK, started.elapsed())
        .await;
    resp
}

pub(crate) async fn version_handler(State(state): State<AppState>) -> impl IntoResponse {
    let started = Instant::now();
    let payload = json!({
        "server": {
            "crate": CRATE_NAME,
            "version": env!("CARGO_PKG_VERSION"),
            "config_schema_version": crate::config::CONFIG_SCHEMA_VERSION,
        },
        "store": state.store.store_tag(),
    });
    let resp = Json(payload).into_response();
    state
        .metrics
        .observe_request("/api/version", StatusCode::OK, started.elapsed())
        .await;
    resp
}

pub(crate) async fn metrics_handler(State(state): State<AppState>) -> impl IntoResponse {
    let body = state.metrics.render().await;
    let mut resp = Response::new(Body::from(body));
    *resp.status_mut() = StatusCode::OK;
    resp.headers_mut().insert(
        "content-type",
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    resp
}
