// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use pentrack_model::Project;

mod fake;
mod memory;

pub use fake::FakeStore;
pub use memory::MemoryStore;

/// Ordered collection of project records.
///
/// Both operations are total: listing never fails and appending always
/// succeeds. There is no capacity bound and no duplicate-id check; order is
/// insertion order.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    fn store_tag(&self) -> &'static str;

    /// Full snapshot of the sequence, in insertion order.
    async fn list(&self) -> Vec<Project>;

    /// Push one record onto the end of the sequence.
    async fn append(&self, project: Project);
}
