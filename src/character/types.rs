use super::job::{Job, JobType};
use super::stats::Modifier;
use crate::core::combat_math::{apply_damage, is_alive};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

/// A combatant: identity plus mutable health, backed by a shared job template.
#[derive(Debug, Clone)]
pub struct Character {
    id: Uuid,
    name: String,
    job: Arc<Job>,
    current_hp: u32,
    max_hp: u32,
}

impl Character {
    /// Creates a character at full health with a fresh id.
    pub fn new(name: impl Into<String>, job: Arc<Job>) -> Self {
        let max_hp = job.base_stats.health_points;
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            job,
            current_hp: max_hp,
            max_hp,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn job(&self) -> &Job {
        &self.job
    }

    pub fn job_type(&self) -> JobType {
        self.job.job_type
    }

    pub fn current_hp(&self) -> u32 {
        self.current_hp
    }

    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    pub fn is_dead(&self) -> bool {
        !is_alive(self.current_hp)
    }

    pub fn take_damage(&mut self, damage: u32) {
        self.current_hp = apply_damage(self.current_hp, damage);
    }

    pub fn revive(&mut self) {
        self.current_hp = self.max_hp;
    }

    /// Whether two handles share the same job template instance.
    pub fn shares_job_with(&self, other: &Character) -> bool {
        Arc::ptr_eq(&self.job, &other.job)
    }

    pub fn summary(&self) -> CharacterSummary {
        CharacterSummary {
            id: self.id,
            name: self.name.clone(),
            job: self.job.job_type,
            is_alive: !self.is_dead(),
        }
    }

    pub fn detail(&self) -> CharacterDetail {
        let stats = &self.job.base_stats;
        CharacterDetail {
            name: self.name.clone(),
            job: self.job.job_type,
            current_hp: self.current_hp,
            max_hp: self.max_hp,
            strength: stats.strength,
            dexterity: stats.dexterity,
            intelligence: stats.intelligence,
            attack_modifier: self.job.attack_modifier,
            speed_modifier: self.job.speed_modifier,
        }
    }
}

/// Listing view of a character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterSummary {
    pub id: Uuid,
    pub name: String,
    pub job: JobType,
    pub is_alive: bool,
}

/// Full view of a character, including its job's stats and modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterDetail {
    pub name: String,
    pub job: JobType,
    pub current_hp: u32,
    pub max_hp: u32,
    pub strength: u32,
    pub dexterity: u32,
    pub intelligence: u32,
    pub attack_modifier: Modifier,
    pub speed_modifier: Modifier,
}
