// SPDX-License-Identifier: Apache-2.0

use crate::store::ProjectStore;
use async_trait::async_trait;
use pentrack_model::Project;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;

/// Test double that records how handlers drive the store.
pub struct FakeStore {
    pub projects: Mutex<Vec<Project>>,
    pub list_calls: AtomicU64,
    pub append_calls: AtomicU64,
}

impl Default for FakeStore {
    fn default() -> Self {
        Self {
            projects: Mutex::new(Vec::new()),
            list_calls: AtomicU64::new(0),
            append_calls: AtomicU64::new(0),
        }
    }
}

#[async_trait]
impl ProjectStore for FakeStore {
    fn store_tag(&self) -> &'static str {
        "fake"
    }

    async fn list(&self) -> Vec<Project> {
        self.list_calls.fetch_add(1, Ordering::Relaxed);
        self.projects.lock().await.clone()
    }

    async fn append(&self, project: Project) {
        self.append_calls.fetch_add(1, Ordering::Relaxed);
        self.projects.lock().await.push(project);
    }
}
