//! Request bodies and their validation rules.
//!
//! Validation collects every broken rule instead of stopping at the first,
//! so a caller sees all problems with a request at once.

use serde::{Deserialize, Deserializer};
use uuid::Uuid;

use super::error::ValidationErrors;
use crate::character::JobType;
use crate::core::constants::{NAME_MAX_LEN, NAME_MIN_LEN};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCharacterRequest {
    #[serde(default)]
    pub name: String,
    /// `None` when absent or not a known job name.
    #[serde(default, deserialize_with = "lenient_job")]
    pub job: Option<JobType>,
}

impl CreateCharacterRequest {
    pub fn new(name: impl Into<String>, job: JobType) -> Self {
        Self {
            name: name.into(),
            job: Some(job),
        }
    }

    /// Returns the chosen job when every rule passes.
    pub fn validate(&self) -> Result<JobType, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.name.trim().is_empty() {
            errors.push("Name is required.");
        }
        let len = self.name.chars().count();
        if !(NAME_MIN_LEN..=NAME_MAX_LEN).contains(&len) {
            errors.push(format!(
                "Name must be between {} and {} characters.",
                NAME_MIN_LEN, NAME_MAX_LEN
            ));
        }
        if !is_valid_name_pattern(&self.name) {
            errors.push("Name can only contain letters and underscore.");
        }

        match self.job {
            Some(job) => errors.into_result(job),
            None => {
                errors.push("Job must be a valid value.");
                Err(errors)
            }
        }
    }
}

/// `^[A-Za-z_]+$`
pub fn is_valid_name_pattern(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphabetic() || c == '_')
}

fn lenient_job<'de, D>(deserializer: D) -> Result<Option<JobType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.trim().parse().ok()))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleRequest {
    #[serde(default, deserialize_with = "optional_id")]
    pub first_player: Option<Uuid>,
    #[serde(default, deserialize_with = "optional_id")]
    pub second_player: Option<Uuid>,
}

impl BattleRequest {
    pub fn new(first_player: Uuid, second_player: Uuid) -> Self {
        Self {
            first_player: Some(first_player),
            second_player: Some(second_player),
        }
    }

    /// Returns both ids when every rule passes.
    pub fn validate(&self) -> Result<(Uuid, Uuid), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let first = self.first_player.filter(|id| !id.is_nil());
        let second = self.second_player.filter(|id| !id.is_nil());

        if first.is_none() {
            errors.push("First character id is required.");
        }
        if second.is_none() {
            errors.push("Second character id is required.");
        }
        if first == second {
            errors.push("Characters in a battle must be different.");
        }

        match (first, second) {
            (Some(first), Some(second)) => errors.into_result((first, second)),
            _ => Err(errors),
        }
    }
}

/// Empty strings count as absent; anything else must be a UUID.
fn optional_id<'de, D>(deserializer: D) -> Result<Option<Uuid>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => Uuid::parse_str(s).map(Some).map_err(serde::de::Error::custom),
    }
}
