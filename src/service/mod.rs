//! Application services sitting between the HTTP surface and the store.

mod battle;
mod character;
mod error;
mod requests;

pub use battle::{BattleResult, BattleService};
pub use character::CharacterService;
pub use error::{ServiceError, ValidationErrors};
pub use requests::{is_valid_name_pattern, BattleRequest, CreateCharacterRequest};

use std::sync::Arc;

use crate::store::{CharacterRepository, InMemoryCharacterRepository};

/// Services wired to one shared store.
pub struct AppServices {
    pub characters: CharacterService,
    pub battles: BattleService,
}

impl AppServices {
    pub fn new(repository: Arc<dyn CharacterRepository>) -> Self {
        Self {
            characters: CharacterService::new(Arc::clone(&repository)),
            battles: BattleService::new(repository),
        }
    }

    /// Services over a fresh in-memory store with the seeded job catalog.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryCharacterRepository::new()))
    }
}
