//! Job templates and the seeded job catalog.

use super::stats::{Modifier, Stats, Weight};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum JobType {
    Warrior,
    Thief,
    Mage,
}

/// Archetype shared by every character of the same job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub job_type: JobType,
    pub base_stats: Stats,
    pub attack_modifier: Modifier,
    pub speed_modifier: Modifier,
}

const fn w(hundredths: u32) -> Weight {
    Weight::from_hundredths(hundredths)
}

impl Job {
    /// Template for a job type, with the fixed catalog values.
    pub fn template(job_type: JobType) -> Self {
        match job_type {
            JobType::Warrior => Job {
                job_type,
                base_stats: Stats::new(20, 10, 5, 5),
                attack_modifier: Modifier::new(w(80), w(20), Weight::ONE),
                speed_modifier: Modifier::new(Weight::ZERO, w(60), w(20)),
            },
            JobType::Thief => Job {
                job_type,
                base_stats: Stats::new(15, 4, 10, 4),
                attack_modifier: Modifier::new(w(25), Weight::ONE, w(25)),
                speed_modifier: Modifier::new(Weight::ZERO, w(80), Weight::ZERO),
            },
            JobType::Mage => Job {
                job_type,
                base_stats: Stats::new(12, 5, 6, 10),
                attack_modifier: Modifier::new(w(20), w(120), w(20)),
                speed_modifier: Modifier::new(w(10), w(40), Weight::ZERO),
            },
        }
    }
}

/// Builds one shared template per job type, in declaration order.
pub fn seed_job_catalog() -> Vec<Arc<Job>> {
    JobType::iter().map(|t| Arc::new(Job::template(t))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::combat_math::{attack_power, speed_potential};

    #[test]
    fn test_catalog_has_every_job_once() {
        let catalog = seed_job_catalog();
        assert_eq!(catalog.len(), 3);
        for job_type in JobType::iter() {
            assert_eq!(
                catalog.iter().filter(|j| j.job_type == job_type).count(),
                1
            );
        }
    }

    #[test]
    fn test_catalog_derived_values() {
        let warrior = Job::template(JobType::Warrior);
        let thief = Job::template(JobType::Thief);
        let mage = Job::template(JobType::Mage);

        assert_eq!(attack_power(&warrior.base_stats, &warrior.attack_modifier), 14);
        assert_eq!(attack_power(&thief.base_stats, &thief.attack_modifier), 12);
        assert_eq!(attack_power(&mage.base_stats, &mage.attack_modifier), 10);

        assert_eq!(speed_potential(&warrior.base_stats, &warrior.speed_modifier), 4);
        assert_eq!(speed_potential(&thief.base_stats, &thief.speed_modifier), 8);
        assert_eq!(speed_potential(&mage.base_stats, &mage.speed_modifier), 2);
    }

    #[test]
    fn test_job_type_parses_case_insensitively() {
        assert_eq!("warrior".parse::<JobType>().unwrap(), JobType::Warrior);
        assert_eq!("MAGE".parse::<JobType>().unwrap(), JobType::Mage);
        assert!("Paladin".parse::<JobType>().is_err());
    }

    #[test]
    fn test_job_type_display() {
        assert_eq!(JobType::Thief.to_string(), "Thief");
    }
}
