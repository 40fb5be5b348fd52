// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError(pub String);

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ValidationError {}

pub const ID_MAX_LEN: usize = 64;
pub const NAME_MAX_LEN: usize = 256;
pub const CLIENT_MAX_LEN: usize = 256;

/// Status values the dashboard knows how to style. Rendering vocabulary
/// only: `Project::status` stays free-form and is never checked against
/// this set.
pub const STATUS_PLANNING: &str = "planning";
pub const STATUS_IN_PROGRESS: &str = "in-progress";
pub const STATUS_COMPLETED: &str = "completed";
pub const STATUS_ON_HOLD: &str = "on-hold";

pub const KNOWN_STATUSES: [&str; 4] = [
    STATUS_PLANNING,
    STATUS_IN_PROGRESS,
    STATUS_COMPLETED,
    STATUS_ON_HOLD,
];

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
#[non_exhaustive]
pub struct ProjectId(String);

impl ProjectId {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        if input.is_empty() {
            return Err(ValidationError("project id must not be empty".to_string()));
        }
        if input.trim() != input {
            return Err(ValidationError(
                "project id must not contain leading/trailing whitespace".to_string(),
            ));
        }
        if input.len() > ID_MAX_LEN {
            return Err(ValidationError(format!(
                "project id exceeds max length {ID_MAX_LEN}"
            )));
        }
        Ok(Self(input.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for ProjectId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
#[non_exhaustive]
pub struct TesterId(String);

impl TesterId {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        if input.is_empty() {
            return Err(ValidationError("tester id must not be empty".to_string()));
        }
        if input.trim() != input {
            return Err(ValidationError(
                "tester id must not contain leading/trailing whitespace".to_string(),
            ));
        }
        if input.len() > ID_MAX_LEN {
            return Err(ValidationError(format!(
                "tester id exceeds max length {ID_MAX_LEN}"
            )));
        }
        Ok(Self(input.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for TesterId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Assignment of one tester to a project, with role and acceptance status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[non_exhaustive]
pub struct AssignedTester {
    pub tester_id: TesterId,
    pub role: String,
    pub status: String,
}

impl AssignedTester {
    #[must_use]
    pub fn new(tester_id: TesterId, role: String, status: String) -> Self {
        Self {
            tester_id,
            role,
            status,
        }
    }
}

/// One tracked engagement record.
///
/// `start_date`/`end_date` hold `YYYY-MM-DD`-shaped strings but are never
/// parsed as dates. `status`, `kind`, and `priority` are free-form.
/// Project ids are NOT unique: the store keeps every appended record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[non_exhaustive]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub client: String,
    pub start_date: String,
    pub end_date: String,
    pub status: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub priority: String,
    #[serde(default)]
    pub assigned_testers: Vec<AssignedTester>,
}

impl Project {
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        id: ProjectId,
        name: String,
        client: String,
        start_date: String,
        end_date: String,
        status: String,
        kind: String,
        priority: String,
        assigned_testers: Vec<AssignedTester>,
    ) -> Self {
        Self {
            id,
            name,
            client,
            start_date,
            end_date,
            status,
            kind,
            priority,
            assigned_testers,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError("project name must not be empty".to_string()));
        }
        if self.name.len() > NAME_MAX_LEN {
            return Err(ValidationError(format!(
                "project name exceeds max length {NAME_MAX_LEN}"
            )));
        }
        if self.client.len() > CLIENT_MAX_LEN {
            return Err(ValidationError(format!(
                "client exceeds max length {CLIENT_MAX_LEN}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_id_parse_rejects_empty_and_padded() {
        assert!(ProjectId::parse("").is_err());
        assert!(ProjectId::parse(" 1").is_err());
        assert!(ProjectId::parse("1 ").is_err());
        assert!(ProjectId::parse(&"x".repeat(ID_MAX_LEN + 1)).is_err());
        assert_eq!(ProjectId::parse("1").expect("valid id").as_str(), "1");
    }

    #[test]
    fn tester_id_parse_rejects_empty_and_padded() {
        assert!(TesterId::parse("").is_err());
        assert!(TesterId::parse(" T1").is_err());
        assert_eq!(TesterId::parse("T1").expect("valid id").as_str(), "T1");
    }

    #[test]
    fn known_statuses_are_distinct() {
        let mut seen = std::collections::BTreeSet::new();
        for status in KNOWN_STATUSES {
            assert!(seen.insert(status), "duplicate status {status}");
        }
    }

    #[test]
    fn validate_rejects_blank_name() {
        let project = Project::new(
            ProjectId::parse("1").expect("id"),
            "  ".to_string(),
            "TechCorp Inc".to_string(),
            "2024-11-20".to_string(),
            "2024-12-20".to_string(),
            STATUS_PLANNING.to_string(),
            "webapp".to_string(),
            "high".to_string(),
            Vec::new(),
        );
        let err = project.validate().expect_err("blank name");
        assert!(err.to_string().contains("name"));
    }
}
