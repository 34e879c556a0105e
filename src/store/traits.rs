//! Repository contract for characters and the job catalog.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use super::error::Result;
use crate::character::{Character, Job, JobType};

/// Storage for characters and the job templates they are built from.
///
/// Reads hand out copies. Changes go through the `update*` methods, which
/// apply a closure to the stored characters in one step, so concurrent
/// updates to the same character never overwrite each other.
#[async_trait]
pub trait CharacterRepository: Send + Sync {
    /// Append a new character
    async fn create(&self, character: Character) -> Result<()>;

    /// Load one character by id
    async fn get(&self, id: Uuid) -> Result<Option<Character>>;

    /// Skip `(page - 1) * page_size`, take `page_size`, in insertion order
    async fn list(&self, page: u32, page_size: u32) -> Result<Vec<Character>>;

    /// Apply `apply` to one stored character and return the updated copy,
    /// or `None` if the id is unknown.
    async fn update(
        &self,
        id: Uuid,
        apply: &mut (dyn for<'c> FnMut(&'c mut Character) + Send),
    ) -> Result<Option<Character>>;

    /// Apply `apply` to two distinct stored characters, in `ids` order.
    ///
    /// Changes are kept only when `apply` returns true. Returns false without
    /// calling `apply` unless both ids name distinct stored characters.
    async fn update_pair(
        &self,
        ids: [Uuid; 2],
        apply: &mut (dyn for<'c> FnMut(&'c mut [Character; 2]) -> bool + Send),
    ) -> Result<bool>;

    /// All job templates
    async fn jobs(&self) -> Result<Vec<Arc<Job>>>;

    /// Template for one job type
    async fn job(&self, job_type: JobType) -> Result<Option<Arc<Job>>> {
        Ok(self
            .jobs()
            .await?
            .into_iter()
            .find(|job| job.job_type == job_type))
    }
}
