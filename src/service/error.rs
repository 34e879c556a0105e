//! Error taxonomy surfaced by the services.

use std::fmt;

use thiserror::Error;

use crate::battle::BattleError;
use crate::store::RepositoryError;

/// Every rule a request broke, in the order the rules were checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(message: impl Into<String>) -> Self {
        Self(vec![message.into()])
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.0.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn messages(&self) -> &[String] {
        &self.0
    }

    pub fn contains(&self, message: &str) -> bool {
        self.0.iter().any(|m| m == message)
    }

    /// `Ok(value)` when nothing was recorded.
    pub fn into_result<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(","))
    }
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(ValidationErrors),

    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ServiceError {
    pub fn is_validation(&self) -> bool {
        matches!(self, ServiceError::Validation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::NotFound(_))
    }

    /// Anything that is neither the caller's fault nor a missing resource.
    pub fn is_unexpected(&self) -> bool {
        !self.is_validation() && !self.is_not_found()
    }

    /// Records the failure at a level matching its category.
    pub(crate) fn log(&self, operation: &str) {
        match self {
            ServiceError::Validation(errors) => tracing::warn!(
                "An error occurred during the validation process. Message: {}",
                errors
            ),
            ServiceError::NotFound(what) => tracing::info!("{} failed: {}", operation, what),
            other => tracing::error!(error = ?other, "An error occurred during {}.", operation),
        }
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(errors: ValidationErrors) -> Self {
        ServiceError::Validation(errors)
    }
}

impl From<BattleError> for ServiceError {
    fn from(error: BattleError) -> Self {
        match error {
            BattleError::NotEnoughPlayers | BattleError::UndecidableTurnOrder => {
                ServiceError::Validation(ValidationErrors::single(error.to_string()))
            }
        }
    }
}
