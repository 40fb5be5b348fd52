#![forbid(unsafe_code)]
//! Pentrack model SSOT.
//!
//! Domain types for tracked security-assessment projects: the [`Project`]
//! record, its [`AssignedTester`] sub-records, and the validated identifier
//! newtypes. This crate depends only on `serde`.

mod project;

pub use project::{
    AssignedTester, Project, ProjectId, TesterId, ValidationError, CLIENT_MAX_LEN, ID_MAX_LEN,
    KNOWN_STATUSES, NAME_MAX_LEN, STATUS_COMPLETED, STATUS_IN_PROGRESS, STATUS_ON_HOLD,
    STATUS_PLANNING,
};

pub const CRATE_NAME: &str = "pentrack-model";
