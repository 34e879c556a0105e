use crate::character::Character;
use crate::core::combat_math::{attack_power, roll_damage};
use rand::Rng;

pub fn combatant_attack_power(character: &Character) -> u32 {
    let job = character.job();
    attack_power(&job.base_stats, &job.attack_modifier)
}

/// Rolls damage for `attacker` and applies it to `defender`.
///
/// Returns the damage rolled, which may be 0 (a miss).
pub fn resolve_attack(attacker: &Character, defender: &mut Character, rng: &mut impl Rng) -> u32 {
    let damage = roll_damage(combatant_attack_power(attacker), rng);
    defender.take_damage(damage);
    damage
}
