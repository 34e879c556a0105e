use thiserror::Error;

/// Errors raised while resolving a battle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BattleError {
    #[error("Not enough players to start the battle.")]
    NotEnoughPlayers,

    #[error("These characters cannot establish a turn order.")]
    UndecidableTurnOrder,
}
