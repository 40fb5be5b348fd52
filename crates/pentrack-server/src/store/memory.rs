// SPDX-License-Identifier: Apache-2.0

use crate::store::ProjectStore;
use async_trait::async_trait;
use pentrack_model::{AssignedTester, Project, ProjectId, TesterId};
use tokio::sync::RwLock;

/// Process-lifetime store: one `RwLock` guards the sequence, so concurrent
/// appends serialize on the write lock and reads share the read lock.
pub struct MemoryStore {
    projects: RwLock<Vec<Project>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            projects: RwLock::new(Vec::new()),
        }
    }

    /// The startup store: exactly one example engagement record.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            projects: RwLock::new(vec![seed_project()]),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProjectStore for MemoryStore {
    fn store_tag(&self) -> &'static str {
        "memory"
    }

    async fn list(&self) -> Vec<Project> {
        self.projects.read().await.clone()
    }

    async fn append(&self, project: Project) {
        self.projects.write().await.push(project);
    }
}

fn seed_project() -> Project {
    Project::new(
        ProjectId::parse("1").expect("seed project id"),
        "Web Application Security Assessment".to_string(),
        "TechCorp Inc".to_string(),
        "2024-11-20".to_string(),
        "2024-12-20".to_string(),
        "planning".to_string(),
        "webapp".to_string(),
        "high".to_string(),
        vec![AssignedTester::new(
            TesterId::parse("T1").expect("seed tester id"),
            "lead".to_string(),
            "accepted".to_string(),
        )],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, name: &str) -> Project {
        Project::new(
            ProjectId::parse(id).expect("id"),
            name.to_string(),
            "Client".to_string(),
            "2025-01-01".to_string(),
            "2025-02-01".to_string(),
            "planning".to_string(),
            "webapp".to_string(),
            "low".to_string(),
            Vec::new(),
        )
    }

    #[tokio::test]
    async fn seeded_store_holds_the_example_record() {
        let store = MemoryStore::seeded();
        let projects = store.list().await;
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].id.as_str(), "1");
        assert_eq!(projects[0].name, "Web Application Security Assessment");
        assert_eq!(projects[0].status, "planning");
        assert_eq!(projects[0].assigned_testers.len(), 1);
        assert_eq!(projects[0].assigned_testers[0].tester_id.as_str(), "T1");
    }

    #[tokio::test]
    async fn append_preserves_insertion_order() {
        let store = MemoryStore::seeded();
        store.append(project("2", "Second")).await;
        store.append(project("3", "Third")).await;

        let projects = store.list().await;
        let ids: Vec<&str> = projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[tokio::test]
    async fn duplicate_ids_are_both_kept() {
        let store = MemoryStore::new();
        store.append(project("7", "First")).await;
        store.append(project("7", "Second")).await;

        let projects = store.list().await;
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].name, "First");
        assert_eq!(projects[1].name, "Second");
    }

    #[tokio::test]
    async fn list_is_a_snapshot_not_a_view() {
        let store = MemoryStore::new();
        let before = store.list().await;
        store.append(project("9", "Later")).await;
        assert!(before.is_empty());
        assert_eq!(store.list().await.len(), 1);
    }
}
