//! Round loop for a duel between two characters.
//!
//! Each round re-rolls the turn order (except the first, which reuses the
//! order that opened the battle), then the faster side strikes and, if the
//! defender survives, the slower side strikes back. Every strike is preceded
//! by a turn-order line naming the striker first. The battle ends at the
//! first death or after [`MAX_ROUNDS`] rounds as a draw.

use super::attack::resolve_attack;
use super::error::BattleError;
use super::log::{BattleLog, BattleLogEvent, Fighter};
use super::turn_order::{resolve_turn_order, TurnEntry};
use crate::character::Character;
use crate::core::constants::MAX_ROUNDS;
use rand::Rng;

/// How a battle ended. Indices refer to the two-element player array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleVerdict {
    Victory { winner: usize, loser: usize },
    Draw,
}

#[derive(Debug, Clone)]
pub struct BattleOutcome {
    pub verdict: BattleVerdict,
    pub log: BattleLog,
    pub rounds_fought: u32,
    pub attacks: u32,
}

impl BattleOutcome {
    pub fn is_draw(&self) -> bool {
        self.verdict == BattleVerdict::Draw
    }
}

/// Fights a duel to completion, mutating both players' HP.
///
/// Turn-order failures surface before any damage is dealt.
pub fn run_battle(
    players: &mut [Character; 2],
    rng: &mut impl Rng,
) -> Result<BattleOutcome, BattleError> {
    let mut log = BattleLog::new();
    let mut order = resolve_turn_order(&players[..], rng)?;

    log.record(BattleLogEvent::BattleStart {
        first: Fighter::from(&players[order[0].combatant]),
        second: Fighter::from(&players[order[1].combatant]),
    });

    let mut attacks = 0;
    for round in 0..MAX_ROUNDS {
        if round > 0 {
            order = resolve_turn_order(&players[..], rng)?;
        }
        let (faster, slower) = (order[0], order[1]);

        for (attacker, defender) in [(faster, slower), (slower, faster)] {
            attacks += 1;
            if strike(players, attacker, defender, &mut log, rng) {
                return Ok(BattleOutcome {
                    verdict: BattleVerdict::Victory {
                        winner: attacker.combatant,
                        loser: defender.combatant,
                    },
                    log,
                    rounds_fought: round + 1,
                    attacks,
                });
            }
        }
    }

    log.record(BattleLogEvent::Draw);
    Ok(BattleOutcome {
        verdict: BattleVerdict::Draw,
        log,
        rounds_fought: MAX_ROUNDS,
        attacks,
    })
}

/// One attack plus its narration. Returns true if the defender died.
fn strike(
    players: &mut [Character; 2],
    attacker_entry: TurnEntry,
    defender_entry: TurnEntry,
    log: &mut BattleLog,
    rng: &mut impl Rng,
) -> bool {
    let (attacker, defender) = split_attacker(players, attacker_entry.combatant);

    log.record(BattleLogEvent::TurnOrder {
        attacker: attacker.name(),
        attacker_speed: attacker_entry.speed,
        defender: defender.name(),
        defender_speed: defender_entry.speed,
    });

    let damage = resolve_attack(attacker, defender, rng);

    log.record(BattleLogEvent::Attack {
        attacker: attacker.name(),
        defender: defender.name(),
        damage,
        defender_hp: defender.current_hp(),
    });

    if defender.is_dead() {
        log.record(BattleLogEvent::Victory {
            winner: attacker.name(),
            winner_hp: attacker.current_hp(),
        });
        return true;
    }
    false
}

fn split_attacker(
    players: &mut [Character; 2],
    attacker_index: usize,
) -> (&Character, &mut Character) {
    let [first, second] = players;
    if attacker_index == 0 {
        (&*first, second)
    } else {
        (&*second, first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{Job, JobType};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::sync::Arc;

    fn character(name: &str, job_type: JobType) -> Character {
        Character::new(name, Arc::new(Job::template(job_type)))
    }

    fn duel(a: JobType, b: JobType) -> [Character; 2] {
        [character("Jhon", a), character("Merlin", b)]
    }

    #[test]
    fn test_battle_ends_within_round_budget() {
        for seed in 0..300 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut players = duel(JobType::Warrior, JobType::Mage);
            let outcome = run_battle(&mut players, &mut rng).unwrap();

            assert!(outcome.rounds_fought <= MAX_ROUNDS);
            assert!(outcome.attacks <= 2 * MAX_ROUNDS);

            match outcome.verdict {
                BattleVerdict::Victory { winner, loser } => {
                    assert_ne!(winner, loser);
                    assert!(players[loser].is_dead());
                    assert!(!players[winner].is_dead());
                    assert!(outcome.log.last().unwrap().contains("wins the battle!"));
                }
                BattleVerdict::Draw => {
                    assert!(players.iter().all(|p| !p.is_dead()));
                    assert_eq!(outcome.attacks, 4);
                    assert_eq!(outcome.log.last(), Some("The battle ended in a draw!"));
                }
            }
        }
    }

    #[test]
    fn test_log_shape() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut players = duel(JobType::Thief, JobType::Warrior);
        let outcome = run_battle(&mut players, &mut rng).unwrap();
        let lines = outcome.log.lines();

        assert!(lines[0].starts_with("Battle between "));
        assert!(lines[0].ends_with(" HP begins!"));

        let turn_lines = lines.iter().filter(|l| l.contains("speed was faster than")).count();
        let attack_lines = lines.iter().filter(|l| l.contains(" attacks ")).count();
        assert_eq!(turn_lines as u32, outcome.attacks);
        assert_eq!(attack_lines as u32, outcome.attacks);

        // start + (turn line + attack line) per attack + victory/draw
        assert_eq!(lines.len() as u32, 1 + 2 * outcome.attacks + 1);
    }

    #[test]
    fn test_counterattack_names_striker_first() {
        // Warrior against Thief draws often enough that a full round shows up.
        let outcome = (0..100)
            .map(|seed| {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                let mut players = duel(JobType::Warrior, JobType::Thief);
                run_battle(&mut players, &mut rng).unwrap()
            })
            .find(|outcome| outcome.attacks >= 2)
            .unwrap();
        let lines = outcome.log.lines();

        // lines: start, turn, attack, turn, attack, ...
        let opener = lines[1].split(' ').next().unwrap();
        let responder = lines[3].split(' ').next().unwrap();
        assert_ne!(opener, responder);
        assert!(lines[2].starts_with(opener));
        assert!(lines[3].contains(&format!("faster than {} ", opener)));
        assert!(lines[4].starts_with(responder));
    }

    #[test]
    fn test_both_outcomes_occur() {
        let mut victories = 0;
        let mut draws = 0;
        for seed in 0..200 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut players = duel(JobType::Warrior, JobType::Thief);
            if run_battle(&mut players, &mut rng).unwrap().is_draw() {
                draws += 1;
            } else {
                victories += 1;
            }
        }
        assert!(victories > 0);
        assert!(draws > 0);
    }

    #[test]
    fn test_undecidable_matchup_touches_nothing() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut players = duel(JobType::Mage, JobType::Mage);
        let err = run_battle(&mut players, &mut rng).unwrap_err();
        assert_eq!(err, BattleError::UndecidableTurnOrder);
        assert!(players.iter().all(|p| p.current_hp() == p.max_hp()));
    }

    #[test]
    fn test_dead_defender_loses_on_first_strike() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut players = duel(JobType::Warrior, JobType::Thief);
        players[1].take_damage(100);

        // The downed thief may still swing first, but falls to the first blow it takes.
        let outcome = run_battle(&mut players, &mut rng).unwrap();
        assert!(outcome.attacks <= 2);
        assert_eq!(outcome.rounds_fought, 1);
        assert_eq!(
            outcome.verdict,
            BattleVerdict::Victory {
                winner: 0,
                loser: 1
            }
        );
    }

    #[test]
    fn test_split_attacker() {
        let mut players = duel(JobType::Warrior, JobType::Mage);
        let (attacker, defender) = split_attacker(&mut players, 1);
        assert_eq!(attacker.name(), "Merlin");
        assert_eq!(defender.name(), "Jhon");
    }
}
