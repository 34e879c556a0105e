//! Character stats, job templates, and combat state.

pub mod job;
pub mod stats;
pub mod types;

pub use job::*;
pub use stats::*;
pub use types::*;
