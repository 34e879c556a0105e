//! Arena - character management and turn-based duels over HTTP.
//!
//! This module exposes the game logic and services for testing and for
//! the server binary.

pub mod battle;
pub mod character;
pub mod config;
pub mod core;
pub mod service;
pub mod store;
pub mod web;

pub use battle::{run_battle, BattleError, BattleOutcome, BattleVerdict};
pub use character::{Character, Job, JobType};
pub use config::ServerConfig;
pub use service::{AppServices, BattleRequest, BattleResult, CreateCharacterRequest, ServiceError};
