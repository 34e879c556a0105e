use async_trait::async_trait;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use super::error::{RepositoryError, Result};
use super::traits::CharacterRepository;
use crate::character::{seed_job_catalog, Character, Job};

/// Process-memory character store, seeded with the job catalog.
pub struct InMemoryCharacterRepository {
    characters: RwLock<Vec<Character>>,
    jobs: Vec<Arc<Job>>,
}

impl InMemoryCharacterRepository {
    pub fn new() -> Self {
        Self::with_jobs(seed_job_catalog())
    }

    pub fn with_jobs(jobs: Vec<Arc<Job>>) -> Self {
        Self {
            characters: RwLock::new(Vec::new()),
            jobs,
        }
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self
            .characters
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?
            .len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl Default for InMemoryCharacterRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CharacterRepository for InMemoryCharacterRepository {
    async fn create(&self, character: Character) -> Result<()> {
        let mut characters = self
            .characters
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        characters.push(character);
        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Character>> {
        let characters = self
            .characters
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(characters.iter().find(|c| c.id() == id).cloned())
    }

    async fn list(&self, page: u32, page_size: u32) -> Result<Vec<Character>> {
        let skip = (page.saturating_sub(1) as usize).saturating_mul(page_size as usize);
        let characters = self
            .characters
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(characters
            .iter()
            .skip(skip)
            .take(page_size as usize)
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        id: Uuid,
        apply: &mut (dyn for<'c> FnMut(&'c mut Character) + Send),
    ) -> Result<Option<Character>> {
        let mut characters = self
            .characters
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        Ok(characters.iter_mut().find(|c| c.id() == id).map(|character| {
            apply(character);
            character.clone()
        }))
    }

    async fn update_pair(
        &self,
        ids: [Uuid; 2],
        apply: &mut (dyn for<'c> FnMut(&'c mut [Character; 2]) -> bool + Send),
    ) -> Result<bool> {
        let mut characters = self
            .characters
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        let position = |id: Uuid| characters.iter().position(|c| c.id() == id);
        let (Some(first), Some(second)) = (position(ids[0]), position(ids[1])) else {
            return Ok(false);
        };
        if first == second {
            return Ok(false);
        }

        // Work on copies so a declined update leaves the store untouched.
        let mut pair = [characters[first].clone(), characters[second].clone()];
        if apply(&mut pair) {
            let [a, b] = pair;
            characters[first] = a;
            characters[second] = b;
        }
        Ok(true)
    }

    async fn jobs(&self) -> Result<Vec<Arc<Job>>> {
        Ok(self.jobs.clone())
    }
}
