#![forbid(unsafe_code)]
//! Wire contract for the Pentrack HTTP API.
//!
//! Request/response DTOs, the `ApiError` body returned on every failure,
//! the error-code to HTTP-status mapping, and DTO → model conversion with
//! field-level validation.

pub mod convert;
pub mod error_mapping;
pub mod errors;
pub mod wire;

pub use convert::{decode_project, project_from_dto};
pub use error_mapping::map_error;
pub use errors::{ApiError, ApiErrorCode};
pub use wire::{AckDto, AssignedTesterDto, ProjectDto, PROJECT_ADDED_MESSAGE};

pub const CRATE_NAME: &str = "pentrack-api";
