//! Shared constants and combat arithmetic.

pub mod combat_math;
pub mod constants;

pub use combat_math::*;
pub use constants::*;
