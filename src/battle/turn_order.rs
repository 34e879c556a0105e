//! Randomized turn order.
//!
//! Each combatant draws a speed in `[0, speed potential)`; the highest speed
//! acts first. A draw is only usable when nobody rolled 0 and no two speeds
//! tie, so the resolver keeps redrawing until it gets one.

use super::error::BattleError;
use crate::character::Character;
use crate::core::combat_math::{roll_speed, speed_potential};
use rand::Rng;

/// One ranked slot: the drawn speed and the combatant's index in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnEntry {
    pub speed: u32,
    pub combatant: usize,
}

pub fn combatant_speed_potential(character: &Character) -> u32 {
    let job = character.job();
    speed_potential(&job.base_stats, &job.speed_modifier)
}

/// Single draw, sorted by descending speed. Ties keep input order.
pub fn determine_turn_order(combatants: &[Character], rng: &mut impl Rng) -> Vec<TurnEntry> {
    let mut order: Vec<TurnEntry> = combatants
        .iter()
        .enumerate()
        .map(|(combatant, character)| TurnEntry {
            speed: roll_speed(combatant_speed_potential(character), rng),
            combatant,
        })
        .collect();

    order.sort_by(|a, b| b.speed.cmp(&a.speed));
    order
}

/// True when no speed is 0 and no two speeds tie. Expects a sorted order.
pub fn is_decisive(order: &[TurnEntry]) -> bool {
    order.iter().all(|entry| entry.speed != 0)
        && order.windows(2).all(|pair| pair[0].speed != pair[1].speed)
}

/// Whether any draw over these combatants can be decisive.
///
/// Usable speeds for a potential `p` are `1..p`. Sorted ascending, the i-th
/// potential must leave room for i + 1 distinct usable speeds.
pub fn can_be_decisive(combatants: &[Character]) -> bool {
    let mut potentials: Vec<u32> = combatants.iter().map(combatant_speed_potential).collect();
    potentials.sort_unstable();

    potentials
        .iter()
        .enumerate()
        .all(|(i, &potential)| u64::from(potential) >= i as u64 + 2)
}

/// Draws until the order is decisive.
///
/// Fails up front when no decisive draw exists, which would otherwise loop
/// forever (two Mages, or any job whose potential is 0 or 1).
pub fn resolve_turn_order(
    combatants: &[Character],
    rng: &mut impl Rng,
) -> Result<Vec<TurnEntry>, BattleError> {
    if !can_be_decisive(combatants) {
        return Err(BattleError::UndecidableTurnOrder);
    }

    let mut attempts: u32 = 0;
    loop {
        attempts += 1;
        let order = determine_turn_order(combatants, rng);
        if is_decisive(&order) {
            tracing::trace!(attempts, "turn order resolved");
            return Ok(order);
        }
    }
}
