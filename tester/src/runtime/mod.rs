//! Runtime Management
//!
//! Fixture lookup and the authenticated session scenarios run against.

pub mod fixtures;
pub mod session;

// Re-export main types
pub use fixtures::Fixtures;
pub use session::{PetSeed, Session, first_pet_id};
