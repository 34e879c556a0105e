//! HTTP surface for the character and battle services, built on axum.
//!
//! Routes:
//! - `GET  /api/characters?page=&pageSize=`
//! - `POST /api/characters`
//! - `GET  /api/characters/{id}`
//! - `POST /api/characters/{id}/revive`
//! - `POST /api/battle`

mod router;
mod server;

pub use router::{error_response, router};
pub use server::{bind, ApiServer};
