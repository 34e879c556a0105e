use std::sync::Arc;

use serde::Serialize;

use super::error::ServiceError;
use super::requests::BattleRequest;
use crate::battle::{run_battle, BattleError, BattleOutcome, BattleVerdict};
use crate::character::{Character, CharacterSummary};
use crate::store::CharacterRepository;

/// Winner and loser are absent on a draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleResult {
    pub winner: Option<CharacterSummary>,
    pub loser: Option<CharacterSummary>,
    pub battle_log: String,
}

impl BattleResult {
    pub fn from_outcome(players: &[Character; 2], outcome: &BattleOutcome) -> Self {
        let (winner, loser) = match outcome.verdict {
            BattleVerdict::Victory { winner, loser } => (
                Some(players[winner].summary()),
                Some(players[loser].summary()),
            ),
            BattleVerdict::Draw => (None, None),
        };

        Self {
            winner,
            loser,
            battle_log: outcome.log.to_text(),
        }
    }

    pub fn is_draw(&self) -> bool {
        self.winner.is_none() && self.loser.is_none()
    }
}

/// Runs duels between stored characters.
pub struct BattleService {
    repository: Arc<dyn CharacterRepository>,
}

impl BattleService {
    pub fn new(repository: Arc<dyn CharacterRepository>) -> Self {
        Self { repository }
    }

    /// Validates, then fights on the stored characters.
    ///
    /// Nothing is written when validation or turn-order resolution fails.
    pub async fn execute_battle(&self, request: &BattleRequest) -> Result<BattleResult, ServiceError> {
        let result = self.try_execute(request).await;
        if let Err(err) = &result {
            err.log("battle execution");
        }
        result
    }

    async fn try_execute(&self, request: &BattleRequest) -> Result<BattleResult, ServiceError> {
        tracing::debug!("Initializing request validation");
        let (first, second) = request.validate()?;

        tracing::info!("Battle execution started.");

        // The fight runs inside the store update, so a character shared by
        // two concurrent battles takes the damage from both.
        let mut fought: Option<Result<BattleResult, BattleError>> = None;
        self.repository
            .update_pair([first, second], &mut |players: &mut [Character; 2]| {
                let mut rng = rand::thread_rng();
                let result = run_battle(players, &mut rng)
                    .map(|outcome| BattleResult::from_outcome(&*players, &outcome));
                let keep = result.is_ok();
                fought = Some(result);
                keep
            })
            .await?;

        let result = fought.ok_or(BattleError::NotEnoughPlayers)?;
        Ok(result?)
    }
}
