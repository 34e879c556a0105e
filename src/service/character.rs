use std::sync::Arc;

use uuid::Uuid;

use super::error::ServiceError;
use super::requests::CreateCharacterRequest;
use crate::character::{Character, CharacterDetail, CharacterSummary};
use crate::core::constants::DEFAULT_PAGE;
use crate::store::CharacterRepository;

/// Character creation, listing, lookup, and revival.
pub struct CharacterService {
    repository: Arc<dyn CharacterRepository>,
}

impl CharacterService {
    pub fn new(repository: Arc<dyn CharacterRepository>) -> Self {
        Self { repository }
    }

    /// Validates the request and stores a full-health character.
    pub async fn create_character(
        &self,
        request: &CreateCharacterRequest,
    ) -> Result<Uuid, ServiceError> {
        let result = self.try_create(request).await;
        if let Err(err) = &result {
            err.log("character creation");
        }
        result
    }

    async fn try_create(&self, request: &CreateCharacterRequest) -> Result<Uuid, ServiceError> {
        tracing::debug!("Initializing request validation");
        let job_type = request.validate()?;

        let job = self
            .repository
            .job(job_type)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Job not found".to_string()))?;

        let character = Character::new(request.name.as_str(), job);
        let id = character.id();
        self.repository.create(character).await?;

        tracing::info!(%id, name = %request.name, job = %job_type, "character created");
        Ok(id)
    }

    /// A page of summaries; page numbers below 1 are read as 1.
    pub async fn list_characters(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<CharacterSummary>, ServiceError> {
        let page = page.max(DEFAULT_PAGE);
        let characters = self.repository.list(page, page_size).await?;
        Ok(characters.iter().map(Character::summary).collect())
    }

    pub async fn character_detail(&self, id: Uuid) -> Result<CharacterDetail, ServiceError> {
        self.find(id).await.map(|character| character.detail())
    }

    /// Restores a character to full health.
    pub async fn revive_character(&self, id: Uuid) -> Result<CharacterDetail, ServiceError> {
        let character = self
            .repository
            .update(id, &mut |character: &mut Character| character.revive())
            .await?
            .ok_or_else(|| ServiceError::NotFound("Character not found".to_string()))?;

        tracing::info!(%id, "character revived");
        Ok(character.detail())
    }

    async fn find(&self, id: Uuid) -> Result<Character, ServiceError> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Character not found".to_string()))
    }
}
