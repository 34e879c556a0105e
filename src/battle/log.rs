//! Battle narration.
//!
//! Lines are formatted from already-resolved values only, so the text for a
//! given event never depends on randomness.

use crate::character::{Character, JobType};
use std::fmt;

/// Name, job and current HP of a combatant at the moment of logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fighter<'a> {
    pub name: &'a str,
    pub job: JobType,
    pub hp: u32,
}

impl<'a> From<&'a Character> for Fighter<'a> {
    fn from(character: &'a Character) -> Self {
        Self {
            name: character.name(),
            job: character.job_type(),
            hp: character.current_hp(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleLogEvent<'a> {
    BattleStart {
        first: Fighter<'a>,
        second: Fighter<'a>,
    },
    /// Announced before every attack, with the attacker named first.
    TurnOrder {
        attacker: &'a str,
        attacker_speed: u32,
        defender: &'a str,
        defender_speed: u32,
    },
    Attack {
        attacker: &'a str,
        defender: &'a str,
        damage: u32,
        defender_hp: u32,
    },
    Victory {
        winner: &'a str,
        winner_hp: u32,
    },
    Draw,
}

impl fmt::Display for BattleLogEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleLogEvent::BattleStart { first, second } => write!(
                f,
                "Battle between {} ({}) - {} HP and {} ({}) - {} HP begins!",
                first.name, first.job, first.hp, second.name, second.job, second.hp
            ),
            BattleLogEvent::TurnOrder {
                attacker,
                attacker_speed,
                defender,
                defender_speed,
            } => write!(
                f,
                "{} {} speed was faster than {} {} speed and will begin this round.",
                attacker, attacker_speed, defender, defender_speed
            ),
            BattleLogEvent::Attack {
                attacker,
                defender,
                damage,
                defender_hp,
            } => write!(
                f,
                "{} attacks {} for {}, {} has {} HP remaining.",
                attacker, defender, damage, defender, defender_hp
            ),
            BattleLogEvent::Victory { winner, winner_hp } => write!(
                f,
                "{} wins the battle! {} still has {} HP remaining!",
                winner, winner, winner_hp
            ),
            BattleLogEvent::Draw => write!(f, "The battle ended in a draw!"),
        }
    }
}

/// Ordered narration of one battle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BattleLog {
    lines: Vec<String>,
}

impl BattleLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, event: BattleLogEvent<'_>) {
        let line = event.to_string();
        tracing::info!("{}", line);
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Full narration, every line newline-terminated.
    pub fn to_text(&self) -> String {
        self.lines.iter().fold(String::new(), |mut text, line| {
            text.push_str(line);
            text.push('\n');
            text
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_battle_start_line() {
        let event = BattleLogEvent::BattleStart {
            first: Fighter {
                name: "Jhon",
                job: JobType::Warrior,
                hp: 20,
            },
            second: Fighter {
                name: "Merlin",
                job: JobType::Mage,
                hp: 12,
            },
        };
        assert_eq!(
            event.to_string(),
            "Battle between Jhon (Warrior) - 20 HP and Merlin (Mage) - 12 HP begins!"
        );
    }

    #[test]
    fn test_turn_order_line() {
        let event = BattleLogEvent::TurnOrder {
            attacker: "Bilbo",
            attacker_speed: 7,
            defender: "Jhon",
            defender_speed: 2,
        };
        assert_eq!(
            event.to_string(),
            "Bilbo 7 speed was faster than Jhon 2 speed and will begin this round."
        );
    }

    #[test]
    fn test_attack_and_victory_lines() {
        let attack = BattleLogEvent::Attack {
            attacker: "Jhon",
            defender: "Merlin",
            damage: 13,
            defender_hp: 0,
        };
        assert_eq!(
            attack.to_string(),
            "Jhon attacks Merlin for 13, Merlin has 0 HP remaining."
        );

        let victory = BattleLogEvent::Victory {
            winner: "Jhon",
            winner_hp: 20,
        };
        assert_eq!(
            victory.to_string(),
            "Jhon wins the battle! Jhon still has 20 HP remaining!"
        );
    }

    #[test]
    fn test_log_text_terminates_every_line() {
        let mut log = BattleLog::new();
        assert!(log.is_empty());
        log.record(BattleLogEvent::Attack {
            attacker: "A_a_",
            defender: "B_b_",
            damage: 0,
            defender_hp: 15,
        });
        log.record(BattleLogEvent::Draw);
        assert_eq!(log.lines().len(), 2);
        assert_eq!(log.last(), Some("The battle ended in a draw!"));
        assert_eq!(
            log.to_text(),
            "A_a_ attacks B_b_ for 0, B_b_ has 15 HP remaining.\nThe battle ended in a draw!\n"
        );
    }
}
