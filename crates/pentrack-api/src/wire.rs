// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

/// Acknowledgement body returned by a successful POST. The message text is
/// part of the published contract and must not change.
pub const PROJECT_ADDED_MESSAGE: &str = "Project added successfully";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AckDto {
    pub message: String,
}

impl AckDto {
    #[must_use]
    pub fn project_added() -> Self {
        Self {
            message: PROJECT_ADDED_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AssignedTesterDto {
    pub tester_id: String,
    pub role: String,
    pub status: String,
}

/// Raw POST body shape. Every scalar arrives as an unchecked string; the
/// conversion layer turns this into a validated model `Project`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProjectDto {
    pub id: String,
    pub name: String,
    pub client: String,
    pub start_date: String,
    pub end_date: String,
    pub status: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub priority: String,
    #[serde(default)]
    pub assigned_testers: Vec<AssignedTesterDto>,
}
