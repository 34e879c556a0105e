//! Duel resolution: turn order, attacks, round loop, and narration.

pub mod attack;
pub mod engine;
pub mod error;
pub mod log;
pub mod turn_order;

pub use attack::*;
pub use engine::*;
pub use error::*;
pub use log::*;
pub use turn_order::*;
