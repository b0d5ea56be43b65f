//! Shared types for the PetFriends API client and contract suite
//!
//! Holds the wire data model, credentials/settings loading, error types
//! and tracing initialisation used by both the `api` and `tester` crates.

pub mod types;
pub mod errors;
pub mod settings;
pub mod logging;

pub use types::*;
pub use errors::*;
pub use settings::{Credentials, Settings};
