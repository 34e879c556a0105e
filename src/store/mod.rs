//! Character storage.
//!
//! Everything lives in process memory; the trait is the seam services
//! depend on.

mod error;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use memory::InMemoryCharacterRepository;
pub use traits::CharacterRepository;
