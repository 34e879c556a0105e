//! Shared combat math functions for the turn-order and attack resolvers.
//!
//! These pure functions calculate combat values without side effects. Weights
//! are fixed-point hundredths, so flooring and rounding behave exactly as they
//! would on decimal values.

use crate::character::stats::{Modifier, Stats};
use crate::core::constants::WEIGHT_SCALE;
use rand::Rng;

/// Weighted combination of the three combat stats, in hundredths.
pub fn weighted_sum(stats: &Stats, modifier: &Modifier) -> u64 {
    u64::from(stats.strength) * u64::from(modifier.strength_modifier.hundredths())
        + u64::from(stats.dexterity) * u64::from(modifier.dexterity_modifier.hundredths())
        + u64::from(stats.intelligence) * u64::from(modifier.intelligence_modifier.hundredths())
}

/// Exclusive upper bound of a combatant's speed draw (weighted sum, floored).
pub fn speed_potential(stats: &Stats, speed_modifier: &Modifier) -> u32 {
    let scaled = weighted_sum(stats, speed_modifier) / u64::from(WEIGHT_SCALE);
    u32::try_from(scaled).unwrap_or(u32::MAX)
}

/// Inclusive upper bound of a damage roll.
///
/// Rounds half away from zero; the sum is never negative so that is
/// "add half, then floor".
pub fn attack_power(stats: &Stats, attack_modifier: &Modifier) -> u32 {
    let scale = u64::from(WEIGHT_SCALE);
    let rounded = (weighted_sum(stats, attack_modifier) + scale / 2) / scale;
    u32::try_from(rounded).unwrap_or(u32::MAX)
}

/// Draw a speed in `[0, potential)`. A potential of 0 always yields 0.
pub fn roll_speed(potential: u32, rng: &mut impl Rng) -> u32 {
    if potential == 0 {
        return 0;
    }
    rng.gen_range(0..potential)
}

/// Draw a damage value in `[0, attack_power]`.
pub fn roll_damage(attack_power: u32, rng: &mut impl Rng) -> u32 {
    rng.gen_range(0..=attack_power)
}

/// Apply damage to HP, returning remaining HP (minimum 0).
pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}

/// Check if a combatant is still standing.
pub fn is_alive(current_hp: u32) -> bool {
    current_hp > 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::stats::Weight;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn stats(strength: u32, dexterity: u32, intelligence: u32) -> Stats {
        Stats::new(10, strength, dexterity, intelligence)
    }

    fn modifier(s: u32, d: u32, i: u32) -> Modifier {
        Modifier::new(
            Weight::from_hundredths(s),
            Weight::from_hundredths(d),
            Weight::from_hundredths(i),
        )
    }

    #[test]
    fn test_speed_potential_floors() {
        // 0.5 + 2.4 = 2.9
        assert_eq!(speed_potential(&stats(5, 6, 10), &modifier(10, 40, 0)), 2);
        // 3.0 + 1.0 = 4.0
        assert_eq!(speed_potential(&stats(10, 5, 5), &modifier(0, 60, 20)), 4);
    }

    #[test]
    fn test_attack_power_rounds_half_away_from_zero() {
        // 1.0 + 7.2 + 2.0 = 10.2
        assert_eq!(attack_power(&stats(5, 6, 10), &modifier(20, 120, 20)), 10);
        // 0.5 exactly rounds up
        assert_eq!(attack_power(&stats(1, 0, 0), &modifier(50, 0, 0)), 1);
        // 2.5 rounds up, not to even
        assert_eq!(attack_power(&stats(5, 0, 0), &modifier(50, 0, 0)), 3);
        // 0.49 rounds down
        assert_eq!(attack_power(&stats(1, 0, 0), &modifier(49, 0, 0)), 0);
    }

    #[test]
    fn test_default_modifier_is_plain_sum() {
        assert_eq!(attack_power(&stats(4, 10, 4), &Modifier::default()), 18);
        assert_eq!(speed_potential(&stats(4, 10, 4), &Modifier::default()), 18);
    }

    #[test]
    fn test_roll_speed_stays_below_potential() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..500 {
            assert!(roll_speed(8, &mut rng) < 8);
        }
    }

    #[test]
    fn test_roll_speed_zero_potential() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(roll_speed(0, &mut rng), 0);
        assert_eq!(roll_speed(1, &mut rng), 0);
    }

    #[test]
    fn test_roll_damage_is_inclusive() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut seen_max = false;
        for _ in 0..2000 {
            let damage = roll_damage(3, &mut rng);
            assert!(damage <= 3);
            seen_max |= damage == 3;
        }
        assert!(seen_max);
        assert_eq!(roll_damage(0, &mut rng), 0);
    }

    #[test]
    fn test_apply_damage() {
        assert_eq!(apply_damage(20, 14), 6);
        assert_eq!(apply_damage(5, 14), 0); // Can't go negative
        assert_eq!(apply_damage(12, 0), 12);
    }

    #[test]
    fn test_is_alive() {
        assert!(is_alive(1));
        assert!(!is_alive(0));
    }
}
